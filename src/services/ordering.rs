use std::cmp::Reverse;

use super::dates::parse_timestamp;
use crate::models::Article;

/// Newest `createdAt` first. Stable; articles with a missing or unreadable date
/// go to the end in their original order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by_cached_key(|article| {
        Reverse(article.created_at.as_deref().and_then(parse_timestamp))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(id: &str, created_at: Option<&str>) -> Article {
        Article {
            id: id.into(),
            created_at: created_at.map(str::to_string),
            ..Article::default()
        }
    }

    #[test]
    fn orders_descending_by_creation() {
        let mut articles = vec![
            dated("jan", Some("2024-01-01")),
            dated("mar", Some("2024-03-01")),
            dated("feb", Some("2024-02-01")),
        ];
        sort_newest_first(&mut articles);
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["mar", "feb", "jan"]);
    }

    #[test]
    fn undated_articles_sink() {
        let mut articles = vec![
            dated("none", None),
            dated("bad", Some("yesterday")),
            dated("old", Some("2020-05-05T10:00:00Z")),
        ];
        sort_newest_first(&mut articles);
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["old", "none", "bad"]);
    }
}
