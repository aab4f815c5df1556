use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Image {
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}
