//! Remote-Collection Fetch Lifecycle
//!
//! Every dashboard view goes through the same cycle: mount, issue one GET,
//! show a loading indicator, then either the fetched records or an error
//! banner. This module is that cycle as a single reusable component:
//!
//! - [`FetchState`]: the tri-state value a renderer consumes
//! - [`FetchController`]: issues fetches and publishes results
//! - [`FetchHandle`]: one mounted view's observable state
//! - [`CollectionView`]: resource binding with re-fetch-on-change semantics

mod controller;
mod state;
mod view;

pub use controller::{FetchController, FetchHandle, FetchStats};
pub use state::{FetchState, FetchStatus};
pub use view::CollectionView;
