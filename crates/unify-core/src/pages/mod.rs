//! View-state for the front-end pages
//!
//! Each page owns its own local state; there is no global store. Three
//! shapes cover the whole front-end:
//! - `fetch`: fetch-on-mount pages (show list, show detail)
//! - `search`: search-as-you-type with last-request-wins sequencing
//! - `add`: the guarded add-show action with redirect-after-add

pub mod add;
pub mod fetch;
pub mod search;

// Re-export the page types
pub use add::AddShowAction;
pub use fetch::{ShowDetailPage, ShowListPage};
pub use search::{SearchPage, SearchTicket};

use serde::Serialize;

/// Lifecycle of a fetch-on-mount page.
///
/// A page starts `Idle`, enters `Loading` when activated, and lands in
/// `Loaded` or `Failed`. Failure is a terminal state of the attempt, not
/// an indefinite spinner: every error path leaves `Loading`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum PageState<T> {
    /// Not activated yet
    Idle,
    /// Request in flight
    Loading,
    /// Response received and decoded
    Loaded(T),
    /// Request or decoding failed; holds the display message
    Failed(String),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Idle
    }
}

impl<T> PageState<T> {
    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    /// The loaded payload, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            PageState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    /// The failure message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
