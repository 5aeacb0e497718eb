//! Fetch-on-mount pages: show list and show detail
//!
//! Contract: on activation the page enters `Loading`, issues exactly one
//! GET for its resource, and transitions to `Loaded` with the payload in
//! display order, or to `Failed` with the error message.

use super::PageState;
use crate::ordering;
use crate::tracker::UnifyTracker;
use crate::types::Show;

/// The home page: the list of tracked shows, sorted by name.
#[derive(Debug, Default)]
pub struct ShowListPage {
    state: PageState<Vec<Show>>,
}

impl ShowListPage {
    pub fn new() -> Self {
        Self {
            state: PageState::Idle,
        }
    }

    /// Current page state.
    pub fn state(&self) -> &PageState<Vec<Show>> {
        &self.state
    }

    /// Activate the page: fetch the show list and sort it for display.
    ///
    /// Issues one GET; re-invoking re-fetches (mount-again semantics).
    pub async fn load(&mut self, tracker: &UnifyTracker) -> &PageState<Vec<Show>> {
        self.state = PageState::Loading;

        self.state = match tracker.list_shows().await {
            Ok(mut shows) => {
                ordering::sort_shows(&mut shows);
                PageState::Loaded(shows)
            }
            Err(e) => PageState::Failed(e.to_string()),
        };

        &self.state
    }
}

/// The per-show detail page: one show with seasons and episodes.
#[derive(Debug, Default)]
pub struct ShowDetailPage {
    state: PageState<Show>,
}

impl ShowDetailPage {
    pub fn new() -> Self {
        Self {
            state: PageState::Idle,
        }
    }

    /// Current page state.
    pub fn state(&self) -> &PageState<Show> {
        &self.state
    }

    /// Activate the page for a show: fetch it and sort seasons/episodes
    /// for display.
    pub async fn load(&mut self, tracker: &UnifyTracker, id: u32) -> &PageState<Show> {
        self.state = PageState::Loading;

        self.state = match tracker.get_show(id).await {
            Ok(mut show) => {
                ordering::sort_show_contents(&mut show);
                PageState::Loaded(show)
            }
            Err(e) => PageState::Failed(e.to_string()),
        };

        &self.state
    }
}
