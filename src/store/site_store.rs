use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::{Slot, Ticket};
use crate::api::ContentSource;
use crate::common::FetchError;
use crate::models::{Article, HistoryEvent};
use crate::services::ordering::sort_newest_first;

/// Settled article-page slots kept before they are pruned. Pending slots are
/// never pruned.
const ARTICLE_PAGE_SLOTS: usize = 256;

/// Process-wide container for the two resources several page regions share:
/// today's history event and the latest article list.
///
/// Constructed once at startup and handed to handlers through `web::Data`.
/// The `fetch_*` actions re-run the request unconditionally; there is no
/// caching window. Pages go through the `attach_*` and `load_*` entry points
/// instead, which join a request already in flight so that concurrent
/// visitors and pending-page reloads wait on one invocation rather than
/// restarting it. Detail pages use their own slots and never touch the
/// shared ones.
#[derive(Clone)]
pub struct SiteStore {
    source: Arc<dyn ContentSource>,
    history: Slot<HistoryEvent>,
    articles: Slot<Vec<Article>>,
    history_page: Slot<HistoryEvent>,
    article_pages: Arc<Mutex<HashMap<String, Slot<Article>>>>,
}

impl SiteStore {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            history: Slot::new("today_history"),
            articles: Slot::new("latest_articles"),
            history_page: Slot::new("today_history_page"),
            article_pages: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn fetch_today_history(&self) -> Ticket {
        self.history.spawn_load(today_history(Arc::clone(&self.source)))
    }

    /// Stores the list already sorted newest first.
    pub fn fetch_latest_articles(&self) -> Ticket {
        self.articles
            .spawn_load(latest_articles(Arc::clone(&self.source)))
    }

    /// [`SiteStore::fetch_today_history`] for a page view; see [`Slot::attach`].
    pub fn attach_today_history(&self, since: Option<Ticket>) -> Ticket {
        let source = Arc::clone(&self.source);
        self.history.attach(since, move || today_history(source))
    }

    /// [`SiteStore::fetch_latest_articles`] for a page view; see [`Slot::attach`].
    pub fn attach_latest_articles(&self, since: Option<Ticket>) -> Ticket {
        let source = Arc::clone(&self.source);
        self.articles.attach(since, move || latest_articles(source))
    }

    pub fn history(&self) -> &Slot<HistoryEvent> {
        &self.history
    }

    pub fn articles(&self) -> &Slot<Vec<Article>> {
        &self.articles
    }

    /// Controller for the history detail page.
    pub fn load_today_history(&self, since: Option<Ticket>) -> Slot<HistoryEvent> {
        let source = Arc::clone(&self.source);
        self.history_page.attach(since, move || today_history(source));
        self.history_page.clone()
    }

    /// Controller for one article detail page, shared by every view of `slug`.
    pub fn load_article(&self, slug: &str, since: Option<Ticket>) -> Slot<Article> {
        let slot = {
            let mut pages = self
                .article_pages
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if !pages.contains_key(slug) && pages.len() >= ARTICLE_PAGE_SLOTS {
                pages.retain(|_, slot| slot.current().is_pending());
            }
            pages
                .entry(slug.to_string())
                .or_insert_with(|| Slot::new("article"))
                .clone()
        };

        let source = Arc::clone(&self.source);
        let slug = slug.to_string();
        slot.attach(since, move || async move { source.article_by_slug(&slug).await });
        slot
    }
}

async fn today_history(source: Arc<dyn ContentSource>) -> Result<HistoryEvent, FetchError> {
    source.today_history().await
}

async fn latest_articles(source: Arc<dyn ContentSource>) -> Result<Vec<Article>, FetchError> {
    let mut articles = source.latest_articles().await?;
    sort_newest_first(&mut articles);
    Ok(articles)
}
