//! Fetch lifecycle state.

use crate::record::ResourceRecord;

/// Coarse status of a fetch, for consumers that only branch on phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Ready,
    Failed,
}

impl FetchStatus {
    /// Ready and Failed are terminal: no further transition occurs for
    /// this fetch attempt.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchStatus::Loading)
    }
}

/// The state one mounted view observes.
///
/// Exactly one of the record list and the error message is authoritative
/// at any time; the enum makes that hold by construction. Starts at
/// `Loading`, transitions exactly once to `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(Vec<ResourceRecord>),
    Failed(String),
}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Ready(_) => FetchStatus::Ready,
            FetchState::Failed(_) => FetchStatus::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// The fetched records; empty unless Ready.
    pub fn records(&self) -> &[ResourceRecord] {
        match self {
            FetchState::Ready(records) => records,
            _ => &[],
        }
    }

    /// The failure description; None unless Failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        FetchState::Loading
    }
}
