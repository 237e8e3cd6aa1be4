//! # OctoFit Dashboard Core
//!
//! The client-side core of the OctoFit fitness dashboard: fetches the five
//! resource collections (activities, leaderboard, teams, users, workouts)
//! from the OctoFit API and exposes each as an observable tri-state value
//! (Loading / Ready / Failed) that a renderer consumes.
//!
//! ## Modules
//!
//! - [`endpoint`]: resource names and API URL resolution
//! - [`normalize`]: pagination-envelope tolerant payload normalization
//! - [`fetch`]: the per-view fetch lifecycle (controller, state, view)
//! - [`client`]: the HTTP client behind the controller
//! - [`present`]: record-to-display-row mapping with fallback defaults
//! - [`config`]: file/environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::{ApiClient, ClientConfig, CollectionView, Config, EndpointResolver,
//!     FetchController, FetchStatus, Resource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load_default();
//!     let resolver = EndpointResolver::new(&config.deployment);
//!     let client = ApiClient::new(resolver, config.client.clone());
//!     let controller = FetchController::new(client);
//!
//!     // Mount a view: one fetch, observable state.
//!     let mut view = CollectionView::mount(&controller, Resource::Activities);
//!     let state = view.settled().await;
//!
//!     match state.status() {
//!         FetchStatus::Ready => println!("{} activities", state.records().len()),
//!         FetchStatus::Failed => eprintln!("{}", state.error_message().unwrap_or_default()),
//!         FetchStatus::Loading => unreachable!("settled() waits for a terminal state"),
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod fetch;
pub mod normalize;
pub mod present;
pub mod record;

// Re-export top-level types for convenience
pub use client::{ApiClient, ClientConfig, FetchError};
pub use config::{Config, ConfigError, LoggingConfig};
pub use endpoint::{DeploymentConfig, EndpointResolver, Resource, UnknownResource};
pub use fetch::{CollectionView, FetchController, FetchHandle, FetchState, FetchStats, FetchStatus};
pub use normalize::normalize;
pub use record::ResourceRecord;
