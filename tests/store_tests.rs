mod common;

#[cfg(test)]
pub mod store_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::common::*;

    use unscripted::common::FetchError;
    use unscripted::store::*;

    const WAIT: Duration = Duration::from_secs(2);

    fn store(source: ScriptedSource) -> SiteStore {
        SiteStore::new(Arc::new(source))
    }

    #[tokio::test]
    async fn history_goes_pending_then_success_exactly_once() {
        let store = store(ScriptedSource::new().history(10, Ok(get_history_event("Independence"))));
        let mut rx = store.history().subscribe();

        store.fetch_today_history();
        assert!(rx.borrow_and_update().result.as_ref().unwrap().is_pending());
        assert!(store.history().snapshot().loading);

        rx.changed().await.unwrap();
        let settled = rx.borrow_and_update().result.clone().unwrap();
        assert_eq!(settled.data().unwrap().title, "Independence");

        let again = tokio::time::timeout(Duration::from_millis(50), rx.changed()).await;
        assert!(again.is_err(), "slot must not change after its terminal state");
    }

    #[tokio::test]
    async fn failure_keeps_message_and_leaves_other_slot_alone() {
        let store = store(ScriptedSource::new().history(0, Err(FetchError::Status(503))));

        store.fetch_today_history();
        let result = store.history().settled(WAIT).await;
        assert_eq!(result.error(), Some("Request failed with status code 503"));

        let history = store.history().snapshot();
        assert!(!history.loading);
        assert!(history.data.is_none());
        assert_eq!(history.error.as_deref(), Some("Request failed with status code 503"));

        let articles = store.articles().snapshot();
        assert_eq!(
            articles,
            SlotSnapshot {
                data: None,
                loading: false,
                error: None
            }
        );
    }

    #[tokio::test]
    async fn latest_articles_are_stored_newest_first() {
        let store = store(ScriptedSource::new().articles(
            0,
            Ok(vec![
                get_article("jan", "2024-01-01"),
                get_article("mar", "2024-03-01"),
                get_article("feb", "2024-02-01"),
            ]),
        ));

        store.fetch_latest_articles();
        let result = store.articles().settled(WAIT).await;
        let ids: Vec<_> = result.data().unwrap().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["mar", "feb", "jan"]);
    }

    #[tokio::test]
    async fn refetch_clears_to_pending() {
        let store = store(
            ScriptedSource::new()
                .history(0, Ok(get_history_event("First")))
                .history(50, Ok(get_history_event("Second"))),
        );

        store.fetch_today_history();
        assert!(store.history().settled(WAIT).await.data().is_some());

        store.fetch_today_history();
        assert!(store.history().current().is_pending());
        assert!(store.history().snapshot().data.is_none());

        let second = store.history().settled(WAIT).await;
        assert_eq!(second.data().unwrap().title, "Second");
    }

    #[tokio::test]
    async fn late_earlier_response_does_not_override_newer_call() {
        let store = store(
            ScriptedSource::new()
                .articles(120, Ok(vec![get_article("stale", "2024-01-01")]))
                .articles(10, Ok(vec![get_article("fresh", "2024-01-02")])),
        );

        store.fetch_latest_articles();
        store.fetch_latest_articles();

        let result = store.articles().settled(WAIT).await;
        assert_eq!(result.data().unwrap()[0].id, "fresh");

        tokio::time::sleep(Duration::from_millis(200)).await;
        let after = store.articles().current();
        assert_eq!(after.data().unwrap()[0].id, "fresh");
    }

    #[tokio::test]
    async fn early_earlier_response_does_not_settle_newer_call() {
        let store = store(
            ScriptedSource::new()
                .history(5, Ok(get_history_event("stale")))
                .history(80, Ok(get_history_event("fresh"))),
        );

        store.fetch_today_history();
        store.fetch_today_history();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(store.history().current().is_pending());

        let result = store.history().settled(WAIT).await;
        assert_eq!(result.data().unwrap().title, "fresh");
    }

    #[tokio::test]
    async fn dropping_a_controller_before_its_response_is_harmless() {
        let store = store(ScriptedSource::new().article(20, Ok(get_article("a", "2024-01-01"))));

        let controller = store.load_article("a-slug", None);
        let ticket = controller.ticket();
        let mut rx = controller.subscribe();
        assert!(controller.current().is_pending());
        drop(controller);

        let state = rx
            .wait_for(|state| state.result.as_ref().is_some_and(FetchResult::is_terminal))
            .await
            .unwrap()
            .clone();
        assert_eq!(state.seq, ticket);
        assert_eq!(state.result.unwrap().data().unwrap().id, "a");

        // The settled result stays available to a reload carrying the ticket.
        let reloaded = store.load_article("a-slug", Some(ticket));
        assert_eq!(reloaded.current().data().unwrap().id, "a");
    }

    #[tokio::test]
    async fn detail_controllers_do_not_touch_shared_slots() {
        let store = store(
            ScriptedSource::new()
                .history(0, Ok(get_history_event("Page")))
                .article(0, Err(FetchError::Missing("Article"))),
        );

        let page = store.load_today_history(None);
        assert_eq!(page.settled(WAIT).await.data().unwrap().title, "Page");

        let article = store.load_article("nope", None);
        assert_eq!(article.settled(WAIT).await.error(), Some("Article not found"));

        assert_eq!(store.history().state().result, None);
        assert_eq!(store.articles().state().result, None);
    }

    #[tokio::test]
    async fn page_views_join_a_pending_fetch_instead_of_restarting_it() {
        let store = store(
            ScriptedSource::new()
                .articles(60, Ok(vec![get_article("only", "2024-01-01")]))
                .articles(0, Ok(vec![get_article("second", "2024-01-02")])),
        );

        let first = store.attach_latest_articles(None);
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = store.attach_latest_articles(None);
        let reload = store.attach_latest_articles(Some(first));
        assert_eq!(first, second);
        assert_eq!(first, reload);

        let result = store.articles().settled(WAIT).await;
        assert_eq!(result.data().unwrap()[0].id, "only");
        assert_eq!(store.articles().ticket(), first);
    }

    #[tokio::test]
    async fn reload_with_a_settled_ticket_keeps_the_result() {
        let store = store(
            ScriptedSource::new()
                .history(0, Ok(get_history_event("Kept")))
                .history(0, Ok(get_history_event("Refetched"))),
        );

        let ticket = store.attach_today_history(None);
        store.history().settled(WAIT).await;

        assert_eq!(store.attach_today_history(Some(ticket)), ticket);
        assert_eq!(store.history().current().data().unwrap().title, "Kept");

        let fresh = store.attach_today_history(None);
        assert_ne!(fresh, ticket);
        let result = store.history().settled(WAIT).await;
        assert_eq!(result.data().unwrap().title, "Refetched");
    }

    #[tokio::test]
    async fn article_pages_are_shared_per_slug() {
        let store = store(
            ScriptedSource::new()
                .article(40, Ok(get_article("a", "2024-01-01")))
                .article(0, Ok(get_article("b", "2024-01-01"))),
        );

        let one = store.load_article("a-slug", None);
        let other_viewer = store.load_article("a-slug", None);
        assert_eq!(one.ticket(), other_viewer.ticket());
        assert_eq!(other_viewer.settled(WAIT).await.data().unwrap().id, "a");

        let different = store.load_article("b-slug", None);
        assert_eq!(different.settled(WAIT).await.data().unwrap().id, "b");
        assert_eq!(one.current().data().unwrap().id, "a");
    }
}
