//! Fetch Lifecycle Controller
//!
//! Orchestrates one asynchronous retrieval per mounted view. Each
//! [`FetchController::load`] call spawns a task that performs the GET and
//! publishes the terminal state through a watch channel. The handle owns
//! the receiving side; dropping it (unmount) makes a late completion
//! unpublishable, so stale responses can never mutate observable state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::client::ApiClient;
use crate::endpoint::Resource;

use super::state::{FetchState, FetchStatus};

#[derive(Debug, Default)]
struct Counters {
    published: AtomicU64,
    stale: AtomicU64,
    failed: AtomicU64,
}

/// Completion counters across all fetches issued by one controller.
///
/// Not part of the view contract; exists so tests and logs can observe
/// what a renderer must not (e.g. a discarded stale completion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchStats {
    /// Completions delivered to a live observer
    pub published: u64,
    /// Completions discarded because the view unmounted first
    pub stale: u64,
    /// Fetch attempts that ended in `Failed`
    pub failed: u64,
}

/// Issues collection fetches. Cheap to clone; clones share the underlying
/// HTTP client and counters but every [`load`](Self::load) still produces
/// an independent, uncoordinated fetch.
#[derive(Debug, Clone)]
pub struct FetchController {
    client: Arc<ApiClient>,
    counters: Arc<Counters>,
}

impl FetchController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn stats(&self) -> FetchStats {
        FetchStats {
            published: self.counters.published.load(Ordering::Relaxed),
            stale: self.counters.stale.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }

    /// Start one fetch attempt for a freshly mounted view.
    ///
    /// The returned handle observes `Loading` until the attempt settles,
    /// then exactly one of `Ready`/`Failed`. No retries, no caching, no
    /// sharing with other handles for the same resource.
    pub fn load(&self, resource: Resource) -> FetchHandle {
        let (tx, rx) = watch::channel(FetchState::Loading);
        let client = Arc::clone(&self.client);
        let counters = Arc::clone(&self.counters);

        tokio::spawn(async move {
            let state = match client.fetch_collection(resource).await {
                Ok(records) => {
                    tracing::debug!(%resource, count = records.len(), "collection fetched");
                    FetchState::Ready(records)
                }
                Err(e) => {
                    counters.failed.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(%resource, error = %e, "collection fetch failed");
                    FetchState::Failed(e.to_string())
                }
            };

            // Send fails once every receiver is gone, i.e. the view
            // unmounted while the request was in flight. The completion
            // must then leave no observable trace.
            if tx.send(state).is_ok() {
                counters.published.fetch_add(1, Ordering::Relaxed);
            } else {
                counters.stale.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(%resource, "stale completion discarded");
            }
        });

        FetchHandle { resource, rx }
    }
}

/// One mounted view's observable fetch state.
///
/// Dropping the handle is the unmount: the in-flight request is not
/// aborted, but its completion becomes a no-op.
#[derive(Debug)]
pub struct FetchHandle {
    resource: Resource,
    rx: watch::Receiver<FetchState>,
}

impl FetchHandle {
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Snapshot of the current state. Never triggers I/O.
    pub fn state(&self) -> FetchState {
        self.rx.borrow().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.rx.borrow().status()
    }

    /// Wait until the fetch reaches its terminal state.
    pub async fn settled(&mut self) -> FetchState {
        loop {
            {
                let current = self.rx.borrow();
                if current.is_terminal() {
                    return current.clone();
                }
            }
            if self.rx.changed().await.is_err() {
                // Sender gone without a terminal publish (task panicked);
                // report whatever was last observed.
                return self.rx.borrow().clone();
            }
        }
    }
}
