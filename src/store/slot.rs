use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use super::FetchResult;
use crate::common::FetchError;

/// Sequence number handed out each time a slot is reset to Pending.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState<T> {
    /// Ticket of the most recent invocation; only its response may settle the slot.
    pub seq: Ticket,
    /// `None` until the first fetch is issued.
    pub result: Option<FetchResult<T>>,
}

/// The `{data, loading, error}` view consumers read from a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> From<SlotState<T>> for SlotSnapshot<T> {
    fn from(state: SlotState<T>) -> Self {
        match state.result {
            None => Self {
                data: None,
                loading: false,
                error: None,
            },
            Some(FetchResult::Pending) => Self {
                data: None,
                loading: true,
                error: None,
            },
            Some(FetchResult::Success(data)) => Self {
                data: Some(data),
                loading: false,
                error: None,
            },
            Some(FetchResult::Failure(message)) => Self {
                data: None,
                loading: false,
                error: Some(message),
            },
        }
    }
}

/// One observable resource.
///
/// Transitions are published through a `watch` channel. Issuing a ticket and
/// settling it both happen under the channel's write lock, so a response for an
/// older ticket can never overwrite the state of a newer invocation.
#[derive(Debug)]
pub struct Slot<T> {
    name: &'static str,
    tx: Arc<watch::Sender<SlotState<T>>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Slot<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        let (tx, _) = watch::channel(SlotState {
            seq: 0,
            result: None,
        });
        Self {
            name,
            tx: Arc::new(tx),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resets the slot to Pending and returns the ticket the response must carry.
    pub fn begin(&self) -> Ticket {
        let mut ticket = 0;
        self.tx.send_modify(|state| {
            state.seq += 1;
            state.result = Some(FetchResult::Pending);
            ticket = state.seq;
        });
        ticket
    }

    /// Applies a response. Returns `false` when the ticket has been superseded or
    /// already settled, in which case the state is left untouched.
    pub fn settle(&self, ticket: Ticket, outcome: Result<T, FetchError>) -> bool {
        if let Err(err) = &outcome {
            crate::log_fetch_err!(self.name, ticket, err);
        }

        let applied = self.tx.send_if_modified(|state| {
            if state.seq != ticket || !matches!(state.result, Some(FetchResult::Pending)) {
                return false;
            }
            state.result = Some(outcome.into());
            true
        });

        if !applied {
            tracing::debug!(slot = self.name, ticket, "discarding superseded response");
        }
        applied
    }

    /// Starts `fetch` on a detached task. The task outlives whoever triggered it,
    /// so dropping the caller never aborts the request.
    pub fn spawn_load<F>(&self, fetch: F) -> Ticket
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let ticket = self.begin();
        self.settle_in_background(ticket, fetch);
        ticket
    }

    /// Re-attaches to an earlier invocation instead of starting a new one.
    ///
    /// While the slot is Pending the in-flight invocation is joined. A settled
    /// slot is reused when `since` names its ticket or an earlier one, which is
    /// how a page reloaded while waiting picks up the result it was waiting
    /// for. Anything else starts `fetch` exactly like [`Slot::spawn_load`].
    ///
    /// Returns the ticket of the invocation the caller is now attached to.
    pub fn attach<F, Fut>(&self, since: Option<Ticket>, fetch: F) -> Ticket
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let mut ticket = 0;
        let started = self.tx.send_if_modified(|state| {
            let reuse = match &state.result {
                Some(FetchResult::Pending) => true,
                Some(_) => since.is_some_and(|t| t > 0 && t <= state.seq),
                None => false,
            };
            if reuse {
                ticket = state.seq;
                return false;
            }
            state.seq += 1;
            state.result = Some(FetchResult::Pending);
            ticket = state.seq;
            true
        });

        if started {
            self.settle_in_background(ticket, fetch());
        } else {
            tracing::debug!(slot = self.name, ticket, "joined existing invocation");
        }
        ticket
    }

    fn settle_in_background<F>(&self, ticket: Ticket, fetch: F)
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let slot = self.clone();
        tokio::spawn(async move {
            let outcome = fetch.await;
            slot.settle(ticket, outcome);
        });
    }

    /// Ticket of the most recent invocation, `0` before the first one.
    pub fn ticket(&self) -> Ticket {
        self.tx.borrow().seq
    }

    pub fn state(&self) -> SlotState<T> {
        self.tx.borrow().clone()
    }

    /// Current result; a slot that was never fetched reads as Pending.
    pub fn current(&self) -> FetchResult<T> {
        self.state().result.unwrap_or(FetchResult::Pending)
    }

    pub fn snapshot(&self) -> SlotSnapshot<T> {
        self.state().into()
    }

    pub fn subscribe(&self) -> watch::Receiver<SlotState<T>> {
        self.tx.subscribe()
    }

    /// Waits up to `wait` for the latest invocation to reach a terminal state and
    /// returns whatever state the slot is in at that point.
    pub async fn settled(&self, wait: Duration) -> FetchResult<T> {
        let mut rx = self.subscribe();
        let waited = tokio::time::timeout(wait, async {
            rx.wait_for(|state| {
                state
                    .result
                    .as_ref()
                    .is_some_and(FetchResult::is_terminal)
            })
            .await
            .map(|state| state.result.clone())
        })
        .await;

        match waited {
            Ok(Ok(Some(result))) => result,
            _ => self.current(),
        }
    }
}
