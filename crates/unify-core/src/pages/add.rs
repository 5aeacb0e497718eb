//! The add-show action: guarded write with redirect-after-add
//!
//! Adding a show POSTs the provider ID and, on success, navigates to the
//! created show's detail page. A `waiting` guard makes a second trigger
//! a no-op while one request is in flight; failures clear the guard and
//! surface an error instead of hanging.

use crate::error::Result;
use crate::route::Route;
use crate::types::AddedShow;

/// State of one add-show trigger.
#[derive(Debug, Default)]
pub struct AddShowAction {
    /// A request is in flight
    waiting: bool,
    /// Error of the last attempt, if it failed
    error: Option<String>,
}

impl AddShowAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start an add request.
    ///
    /// Returns `false` while a previous request is still in flight — the
    /// trigger is a no-op and no network call must be made. Otherwise
    /// arms the guard, clears any stale error, and returns `true`.
    pub fn begin(&mut self) -> bool {
        if self.waiting {
            return false;
        }
        self.waiting = true;
        self.error = None;
        true
    }

    /// Resolve the in-flight request.
    ///
    /// Clears the guard either way. On success returns the route to
    /// redirect to (the created show's detail page); on failure records
    /// the error and returns `None`.
    pub fn finish(&mut self, outcome: Result<AddedShow>) -> Option<Route> {
        self.waiting = false;
        match outcome {
            Ok(added) => Some(Route::ShowDetail(added.id)),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Whether a request is in flight.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Error of the last attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
