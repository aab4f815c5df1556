use std::sync::Arc;

use unscripted::common::Settings;
use unscripted::store::SiteStore;

use super::templates::Refresh;

#[derive(Clone)]
pub struct AppState {
    pub store: SiteStore,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: SiteStore, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }

    /// Meta refresh for a page rendered while a fetch is still pending.
    /// `target` is a query string naming the tickets to re-attach to.
    pub fn refresh_if(&self, pending: bool, target: impl FnOnce() -> String) -> Option<Refresh> {
        pending.then(|| Refresh {
            secs: self.settings.pending_refresh_secs,
            target: target(),
        })
    }
}
