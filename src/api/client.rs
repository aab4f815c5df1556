use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::ContentSource;
use super::normalize::{article_from_value, articles_from_value, history_from_value};
use crate::common::FetchError;
use crate::models::{Article, HistoryEvent};

/// `reqwest`-backed client for the publishing backend.
///
/// No timeout or retry is configured: a request runs until the backend
/// answers or the connection fails.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self::with_client(base, reqwest::Client::new())
    }

    pub fn with_client(base: Url, http: reqwest::Client) -> Self {
        Self { base, http }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl ContentSource for ApiClient {
    async fn today_history(&self) -> Result<HistoryEvent, FetchError> {
        let url = self.endpoint(&["today-history"])?;
        history_from_value(self.get_json(url).await?)
    }

    async fn latest_articles(&self) -> Result<Vec<Article>, FetchError> {
        let url = self.endpoint(&["articles"])?;
        articles_from_value(self.get_json(url).await?)
    }

    async fn article_by_slug(&self, slug: &str) -> Result<Article, FetchError> {
        let url = self.endpoint(&["articles", "slug", slug])?;
        article_from_value(self.get_json(url).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() {
        let client = ApiClient::new(Url::parse("https://api.example.org/v1/").unwrap());
        assert_eq!(
            client.endpoint(&["articles"]).unwrap().as_str(),
            "https://api.example.org/v1/articles"
        );
        assert_eq!(
            client
                .endpoint(&["articles", "slug", "raja ravi/varma"])
                .unwrap()
                .as_str(),
            "https://api.example.org/v1/articles/slug/raja%20ravi%2Fvarma"
        );
    }
}
