use serde::Deserialize;

use unscripted::store::Ticket;

/// Query string of the home page. `shown` is the article reveal cursor;
/// `history` and `articles` are the tickets a pending page reloads with. All
/// are read leniently, so they stay strings here.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub shown: Option<String>,
    pub history: Option<String>,
    pub articles: Option<String>,
}

impl HomeQuery {
    pub fn history_ticket(&self) -> Option<Ticket> {
        parse_ticket(self.history.as_deref())
    }

    pub fn articles_ticket(&self) -> Option<Ticket> {
        parse_ticket(self.articles.as_deref())
    }
}

/// Query string of the detail pages: the ticket a pending page reloads with.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub wait: Option<String>,
}

impl DetailQuery {
    pub fn ticket(&self) -> Option<Ticket> {
        parse_ticket(self.wait.as_deref())
    }
}

fn parse_ticket(raw: Option<&str>) -> Option<Ticket> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_tickets_are_ignored() {
        let query = HomeQuery {
            shown: None,
            history: Some(" 4 ".into()),
            articles: Some("soon".into()),
        };
        assert_eq!(query.history_ticket(), Some(4));
        assert_eq!(query.articles_ticket(), None);
        assert_eq!(DetailQuery::default().ticket(), None);
    }
}
