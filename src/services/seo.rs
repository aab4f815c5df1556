//! Document metadata (title, description, canonical link, Open Graph,
//! JSON-LD) derived from whatever state a page's fetch ended in.

use serde_json::{Value, json};

use super::RichText;
use crate::models::{Article, HistoryEvent};

pub const SITE_NAME: &str = "Unscripted India";
pub const FALLBACK_IMAGE: &str = "/static/fallback-image.svg";
const DESCRIPTION_LIMIT: usize = 160;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: Option<OpenGraph>,
    /// Serialized JSON-LD, already safe to place inside a `<script>` element.
    pub json_ld: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub kind: &'static str,
    pub image: String,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: &str, canonical: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: truncate_description(description),
            canonical: canonical.into(),
            open_graph: None,
            json_ld: None,
        }
    }

    pub fn with_open_graph(mut self, og: OpenGraph) -> Self {
        self.open_graph = Some(og);
        self
    }

    pub fn with_json_ld(mut self, value: &Value) -> Self {
        self.json_ld = Some(script_safe_json(value));
        self
    }
}

/// Descriptions over the limit are cut to leave room for an ellipsis.
pub fn truncate_description(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_LIMIT - 3).collect();
    format!("{cut}...")
}

pub fn article_url(site_url: &str, slug: &str) -> String {
    format!("{site_url}/article/{slug}")
}

/// `</` would otherwise let a string value close the surrounding script tag.
fn script_safe_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

const HOME_TITLE: &str = "Latest Articles - Unscripted India";
const HOME_DESCRIPTION: &str = "Explore the latest historical and cultural articles from Unscripted India. Stay informed and inspired.";

/// Home page metadata; the structured data lists only the articles on screen.
pub fn home_meta(site_url: &str, visible: &[Article]) -> PageMeta {
    let canonical = format!("{site_url}/");
    let main_entity: Vec<Value> = visible
        .iter()
        .map(|article| {
            json!({
                "@type": "Article",
                "headline": article.title,
                "datePublished": article.created_at,
                "image": article.primary_image_url().unwrap_or(FALLBACK_IMAGE),
                "url": article.link_slug().map(|slug| article_url(site_url, slug)),
                "author": { "@type": "Organization", "name": SITE_NAME },
            })
        })
        .collect();

    let structured = json!({
        "@context": "https://schema.org",
        "@type": "CollectionPage",
        "name": HOME_TITLE,
        "description": "Explore the latest historical and cultural articles from Unscripted India.",
        "mainEntity": main_entity,
    });

    let image = visible
        .first()
        .and_then(Article::primary_image_url)
        .unwrap_or(FALLBACK_IMAGE)
        .to_string();

    PageMeta::new(HOME_TITLE, HOME_DESCRIPTION, canonical.clone())
        .with_open_graph(OpenGraph {
            title: HOME_TITLE.to_string(),
            description: "Explore the latest historical and cultural articles from Unscripted India."
                .to_string(),
            url: canonical,
            kind: "website",
            image,
        })
        .with_json_ld(&structured)
}

const HISTORY_TITLE: &str = "Today in History";
const HISTORY_DESCRIPTION: &str = "Explore historical events that happened on this day.";

pub fn history_meta(site_url: &str, path: &str, event: Option<&HistoryEvent>) -> PageMeta {
    let canonical = format!("{site_url}{path}");
    let Some(event) = event else {
        return PageMeta::new(HISTORY_TITLE, HISTORY_DESCRIPTION, canonical);
    };

    let title = if event.title.trim().is_empty() {
        HISTORY_TITLE
    } else {
        event.title.as_str()
    };
    let description = event.summary().unwrap_or(HISTORY_DESCRIPTION);
    PageMeta::new(title, description, canonical)
}

pub fn article_meta(site_url: &str, slug: &str, article: Option<&Article>) -> PageMeta {
    let canonical = article_url(site_url, slug);
    let Some(article) = article else {
        return PageMeta::new(SITE_NAME, HOME_DESCRIPTION, canonical);
    };

    let description = match article.excerpt() {
        Some(excerpt) => excerpt.to_string(),
        None => RichText::trusted(article.content.as_str()).plain_text(),
    };
    let author = match article.author() {
        Some(name) => json!({ "@type": "Person", "name": name }),
        None => json!({ "@type": "Organization", "name": SITE_NAME }),
    };
    let structured = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "datePublished": article.created_at,
        "image": article.primary_image_url().unwrap_or(FALLBACK_IMAGE),
        "url": canonical,
        "author": author,
        "publisher": { "@type": "Organization", "name": SITE_NAME },
    });

    PageMeta::new(article.title.as_str(), &description, canonical).with_json_ld(&structured)
}
