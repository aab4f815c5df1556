//! Outbound access to the publishing backend.

mod client;
mod normalize;

pub use client::ApiClient;
pub use normalize::{article_from_value, articles_from_value, history_from_value};

use async_trait::async_trait;

use crate::common::FetchError;
use crate::models::{Article, HistoryEvent};

/// Where pages get their content from. [`ApiClient`] talks to the real
/// backend; tests provide in-process fakes.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// `GET /today-history`
    async fn today_history(&self) -> Result<HistoryEvent, FetchError>;

    /// `GET /articles`, in whatever order the backend returns them.
    async fn latest_articles(&self) -> Result<Vec<Article>, FetchError>;

    /// `GET /articles/slug/{slug}`
    async fn article_by_slug(&self, slug: &str) -> Result<Article, FetchError>;
}
