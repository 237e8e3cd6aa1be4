//! Resource-bound view wrapper.

use crate::endpoint::Resource;

use super::controller::{FetchController, FetchHandle};
use super::state::FetchState;

/// One dashboard view bound to a resource.
///
/// Encodes the mount semantics the dashboard relies on: mounting fetches
/// once, reading state is free (a re-render never refetches), and only a
/// change of the bound resource starts a fresh Loading cycle.
#[derive(Debug)]
pub struct CollectionView {
    controller: FetchController,
    handle: FetchHandle,
}

impl CollectionView {
    /// Mount a view, starting its single fetch attempt.
    pub fn mount(controller: &FetchController, resource: Resource) -> Self {
        Self {
            controller: controller.clone(),
            handle: controller.load(resource),
        }
    }

    pub fn resource(&self) -> Resource {
        self.handle.resource()
    }

    /// Snapshot read for rendering. Never triggers I/O.
    pub fn state(&self) -> FetchState {
        self.handle.state()
    }

    /// Rebind the view. Binding the same resource is a no-op; a different
    /// resource discards the old handle and starts a fresh Loading cycle.
    pub fn bind(&mut self, resource: Resource) {
        if resource != self.handle.resource() {
            self.handle = self.controller.load(resource);
        }
    }

    /// Wait until the current fetch reaches its terminal state.
    pub async fn settled(&mut self) -> FetchState {
        self.handle.settled().await
    }
}
