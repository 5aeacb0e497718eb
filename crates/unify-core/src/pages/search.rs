//! Search-as-you-type page with last-request-wins sequencing
//!
//! Every keystroke issues a new search request, and responses may
//! complete out of order. Each request gets a monotonically increasing
//! ticket; a response is applied only while its ticket is still the
//! latest one issued, so a slow reply to an old query can never
//! overwrite the results of a newer one.

use crate::error::Result;
use crate::types::SearchResult;

/// Handle identifying one issued search request.
///
/// Obtained from [`SearchPage::begin`] and handed back to
/// [`SearchPage::finish`] together with the request's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
}

/// State of the search page.
#[derive(Debug, Default)]
pub struct SearchPage {
    /// Whether the latest issued request is still unresolved
    searching: bool,
    /// Results currently displayed
    results: Vec<SearchResult>,
    /// Error of the latest resolved request, if it failed
    error: Option<String>,
    /// Sequence number of the latest issued request
    latest: u64,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new keystroke's request and return its ticket.
    ///
    /// Marks the page as searching; any request issued earlier becomes
    /// stale from this point on.
    pub fn begin(&mut self) -> SearchTicket {
        self.latest += 1;
        self.searching = true;
        SearchTicket { seq: self.latest }
    }

    /// Resolve a request.
    ///
    /// Applies the outcome and returns `true` only when `ticket` is the
    /// latest issued request; a stale response is discarded and the page
    /// keeps waiting for the newest one.
    pub fn finish(&mut self, ticket: SearchTicket, outcome: Result<Vec<SearchResult>>) -> bool {
        if ticket.seq != self.latest {
            tracing::debug!(stale = ticket.seq, latest = self.latest, "discarding stale search response");
            return false;
        }

        self.searching = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Whether the latest request is still in flight.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Results currently displayed.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Error of the latest resolved request, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
