//! In-process stand-ins used by the handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use async_trait::async_trait;

use unscripted::api::ContentSource;
use unscripted::common::{FetchError, Settings};
use unscripted::models::{Article, HistoryEvent, Image};
use unscripted::store::SiteStore;

use super::AppState;

pub struct FakeSource {
    history: Result<HistoryEvent, FetchError>,
    articles: Result<Vec<Article>, FetchError>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            history: Err(FetchError::Missing("History event")),
            articles: Ok(Vec::new()),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_history(mut self, history: Result<HistoryEvent, FetchError>) -> Self {
        self.history = history;
        self
    }

    pub fn with_articles(mut self, articles: Result<Vec<Article>, FetchError>) -> Self {
        self.articles = articles;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of backend calls made so far, readable after the source has
    /// been moved into the app.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    async fn pause(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn today_history(&self) -> Result<HistoryEvent, FetchError> {
        self.pause().await;
        self.history.clone()
    }

    async fn latest_articles(&self) -> Result<Vec<Article>, FetchError> {
        self.pause().await;
        self.articles.clone()
    }

    async fn article_by_slug(&self, slug: &str) -> Result<Article, FetchError> {
        self.pause().await;
        self.articles
            .clone()?
            .into_iter()
            .find(|a| a.link_slug() == Some(slug))
            .ok_or(FetchError::Missing("Article"))
    }
}

pub fn settings(render_wait: Duration) -> Settings {
    let wait_ms = render_wait.as_millis().to_string();
    Settings::from_lookup(|key| match key {
        "SITE_URL" => Some("https://unscripted.test".to_string()),
        "RENDER_WAIT_MS" => Some(wait_ms.clone()),
        _ => None,
    })
    .expect("test settings are valid")
}

pub fn app_state(source: FakeSource) -> AppState {
    app_state_with_wait(source, Duration::from_millis(1500))
}

pub fn app_state_with_wait(source: FakeSource, render_wait: Duration) -> AppState {
    AppState::new(SiteStore::new(Arc::new(source)), settings(render_wait))
}

pub fn article(id: &str, slug: Option<&str>, created_at: &str) -> Article {
    Article {
        id: id.to_string(),
        slug: slug.map(str::to_string),
        title: format!("Title {id}"),
        content: format!("<p>Body of {id}</p>"),
        created_at: Some(created_at.to_string()),
        ..Article::default()
    }
}

pub fn history_event(title: &str) -> HistoryEvent {
    HistoryEvent {
        title: title.to_string(),
        content: "<p>On this day</p>\nsecond line".to_string(),
        created_at: Some("2024-03-12T00:00:00Z".to_string()),
        ..HistoryEvent::default()
    }
}

pub fn image(url: &str) -> Image {
    Image {
        url: url.to_string(),
        alt: None,
    }
}

pub async fn body_string<B: MessageBody>(res: ServiceResponse<B>) -> String {
    let bytes = actix_web::test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Reload target of a pending page's meta refresh, with askama's attribute
/// escaping undone.
pub fn refresh_target(body: &str) -> Option<String> {
    let meta = &body[body.find("http-equiv=\"refresh\"")?..];
    let start = meta.find("url=")? + "url=".len();
    let end = start + meta[start..].find('"')?;
    Some(
        meta[start..end]
            .replace("&amp;", "&")
            .replace("&#x2f;", "/"),
    )
}
