//! Fetch status of the search session.
//!
//! The status summarizes the outcome of the most recent search request. It
//! moves `Idle → Loading` when a fetch is issued and `Loading → Succeeded` or
//! `Loading → Failed` when the latest fetch completes. A failed refetch keeps
//! the previously displayed results.
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::FetchStatus;
//!
//! let status = FetchStatus::default();
//! assert_eq!(status, FetchStatus::Idle);
//! assert_eq!(FetchStatus::Failed.label(), "failed");
//! ```

use serde::{Deserialize, Serialize};

/// Outcome of the last search attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No search has been issued yet.
    #[default]
    Idle,

    /// A search request is in flight.
    Loading,

    /// The latest search returned a result list.
    Succeeded,

    /// The latest search failed (HTTP status, network or malformed body).
    Failed,
}

impl FetchStatus {
    /// Lowercase name shown in the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}
