use askama::Template;

use unscripted::services::{PageMeta, Placeholder, RichText};

/// `<meta http-equiv="refresh">` of a page rendered while pending. `target`
/// is a relative URL (query string only) so the reload keeps the path.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    pub secs: u64,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryCard {
    pub title: String,
    pub date: String,
    pub image: Option<ImageView>,
    pub preview: Option<RichText>,
}

pub enum HistoryCardView {
    Loading(Placeholder),
    Failed(String),
    Ready(HistoryCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    /// `None` renders a disabled card for articles without a slug.
    pub href: Option<String>,
    pub title: String,
    pub excerpt: Option<String>,
    pub image_url: String,
}

pub struct ArticleGrid {
    pub cards: Vec<ArticleCard>,
    pub more_href: Option<String>,
    pub less_href: Option<String>,
}

pub enum ArticleListView {
    Loading(Vec<Placeholder>),
    Failed(String),
    Empty,
    Ready(ArticleGrid),
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub meta: PageMeta,
    pub refresh: Option<Refresh>,
    pub history: HistoryCardView,
    pub articles: ArticleListView,
}

pub struct ArticleDetail {
    pub title: String,
    pub byline: String,
    pub date: String,
    pub image: Option<ImageView>,
    pub image_caption: Option<String>,
    pub content: RichText,
}

pub enum ArticleBodyView {
    Loading(Placeholder),
    Failed(String),
    Ready(ArticleDetail),
}

#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub meta: PageMeta,
    pub refresh: Option<Refresh>,
    pub body: ArticleBodyView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelatedLink {
    pub href: String,
    pub title: String,
    pub date: String,
}

pub struct HistoryDetail {
    pub title: String,
    pub date: String,
    pub images: Vec<ImageView>,
    pub content: RichText,
    pub summary: Option<String>,
    pub related: Vec<RelatedLink>,
}

pub enum HistoryBodyView {
    Loading(Placeholder),
    Failed(String),
    Ready(HistoryDetail),
}

#[derive(Template)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    pub meta: PageMeta,
    pub refresh: Option<Refresh>,
    pub body: HistoryBodyView,
}

#[derive(Template)]
#[template(path = "vision.html")]
pub struct VisionTemplate {
    pub meta: PageMeta,
    pub refresh: Option<Refresh>,
}

#[derive(Template)]
#[template(path = "coming_soon.html")]
pub struct ComingSoonTemplate {
    pub meta: PageMeta,
    pub refresh: Option<Refresh>,
    pub section_name: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub meta: PageMeta,
    pub refresh: Option<Refresh>,
}
