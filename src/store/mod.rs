//! Fetch lifecycle state: the tri-state result, the observable slot that
//! drives it, and the two-slot site store shared by pages.

mod fetch_result;
mod site_store;
mod slot;

pub use fetch_result::FetchResult;
pub use site_store::SiteStore;
pub use slot::{Slot, SlotSnapshot, SlotState, Ticket};
