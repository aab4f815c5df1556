use serde::{Deserialize, Serialize};

use super::{Image, non_empty, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Pre-rendered markup from the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_articles: Vec<RelatedArticle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArticle {
    #[serde(default, alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl HistoryEvent {
    /// The event's own date when the backend supplies one, else its creation time.
    pub fn display_date(&self) -> Option<&str> {
        non_empty(&self.date).or_else(|| non_empty(&self.created_at))
    }

    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.summary)
    }

    pub fn first_image(&self) -> Option<&Image> {
        self.images.first().filter(|img| img.has_url())
    }

    /// First three lines of the content joined with spaces.
    pub fn preview(&self) -> Option<String> {
        if self.content.is_empty() {
            return None;
        }
        Some(
            self.content
                .split('\n')
                .take(3)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}
