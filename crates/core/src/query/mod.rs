//! Observable view-model states for the hero list and hero detail screens.
//!
//! Each query owns a `tokio::sync::watch` channel carrying a snapshot of its
//! state. Consumers call `subscribe()` and re-render on change. Fetch errors
//! never escape a query: they become [`LoadState::Errored`] with the error's
//! display text.

mod detail;
mod list;
pub mod search;

pub use detail::{HeroDetailQuery, HeroDetailState};
pub use list::{HeroListQuery, HeroListState};

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Load status shared by both queries.
///
/// `Idle -> Loading -> (Loaded | Errored)`; a retry goes back to `Loading`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    /// The message to show in the error view, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Errored(_) => "errored",
        }
    }
}

/// Stamps fetches so that only the most recently issued one may write state.
#[derive(Debug, Default)]
pub(crate) struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    /// Issue a new stamp; every earlier stamp becomes stale.
    pub(crate) fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }
}
