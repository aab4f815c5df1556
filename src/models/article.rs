use serde::{Deserialize, Serialize};

use super::{Image, non_empty, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Routing key. Absent or blank means the article is not linkable yet.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Pre-rendered markup from the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_caption: Option<String>,
}

impl Article {
    pub fn link_slug(&self) -> Option<&str> {
        non_empty(&self.slug)
    }

    /// First gallery image, falling back to the legacy single `imageUrl` field.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.has_url())
            .map(|img| img.url.as_str())
            .or_else(|| non_empty(&self.image_url))
    }

    pub fn excerpt(&self) -> Option<&str> {
        non_empty(&self.excerpt)
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }

    pub fn image_caption(&self) -> Option<&str> {
        non_empty(&self.image_caption)
    }
}
