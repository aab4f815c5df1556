#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use unscripted::api::ContentSource;
use unscripted::common::FetchError;
use unscripted::models::*;

type Scripted<T> = Mutex<VecDeque<(Duration, Result<T, FetchError>)>>;

/// Content source whose responses (and how long each takes) are scripted per call.
#[derive(Default)]
pub struct ScriptedSource {
    history: Scripted<HistoryEvent>,
    articles: Scripted<Vec<Article>>,
    article: Scripted<Article>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(self, delay_ms: u64, result: Result<HistoryEvent, FetchError>) -> Self {
        push(&self.history, delay_ms, result);
        self
    }

    pub fn articles(self, delay_ms: u64, result: Result<Vec<Article>, FetchError>) -> Self {
        push(&self.articles, delay_ms, result);
        self
    }

    pub fn article(self, delay_ms: u64, result: Result<Article, FetchError>) -> Self {
        push(&self.article, delay_ms, result);
        self
    }
}

fn push<T>(queue: &Scripted<T>, delay_ms: u64, result: Result<T, FetchError>) {
    queue
        .lock()
        .unwrap()
        .push_back((Duration::from_millis(delay_ms), result));
}

async fn next<T>(queue: &Scripted<T>, resource: &'static str) -> Result<T, FetchError> {
    let scripted = queue.lock().unwrap().pop_front();
    match scripted {
        Some((delay, result)) => {
            tokio::time::sleep(delay).await;
            result
        }
        None => Err(FetchError::Missing(resource)),
    }
}

#[async_trait]
impl ContentSource for ScriptedSource {
    async fn today_history(&self) -> Result<HistoryEvent, FetchError> {
        next(&self.history, "History event").await
    }

    async fn latest_articles(&self) -> Result<Vec<Article>, FetchError> {
        next(&self.articles, "Article list").await
    }

    async fn article_by_slug(&self, _slug: &str) -> Result<Article, FetchError> {
        next(&self.article, "Article").await
    }
}

pub fn get_article(id: &str, created_at: &str) -> Article {
    Article {
        id: id.to_string(),
        slug: Some(format!("{id}-slug")),
        title: format!("Article {id}"),
        content: format!("<p>{id}</p>"),
        created_at: Some(created_at.to_string()),
        ..Article::default()
    }
}

pub fn get_history_event(title: &str) -> HistoryEvent {
    HistoryEvent {
        title: title.to_string(),
        content: "<p>It happened.</p>".to_string(),
        date: Some("1947-08-15".to_string()),
        ..HistoryEvent::default()
    }
}
