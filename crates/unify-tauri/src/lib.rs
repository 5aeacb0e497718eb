//! Unify Tauri Integration
//!
//! This crate provides Tauri commands for embedding the Unify TV show
//! tracker front-end into Tauri 2.0 applications. Each page of the
//! front-end maps to one command; page state lives in managed state, one
//! mutex per page so the pages stay independent of each other.
//!
//! # Usage
//!
//! ```rust,ignore
//! use unify_tauri::TrackerState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(TrackerState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             unify_tauri::commands::load_shows,
//!             unify_tauri::commands::load_show,
//!             unify_tauri::commands::search_shows,
//!             unify_tauri::commands::add_show,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `load_shows` - Load the home page (tracked shows, sorted by name)
//! - `load_show` - Load one show's detail page (seasons and episodes sorted)
//! - `search_shows` - Search-as-you-type with last-request-wins sequencing
//! - `add_show` - Guarded add-by-provider-id, returns the redirect path

pub mod commands;

use tokio::sync::Mutex;

use unify_core::{
    AddShowAction, ApiConfig, SearchPage, ShowDetailPage, ShowListPage, UnifyTracker,
};

/// Managed state for the Unify front-end.
///
/// The tracker itself is shared immutably; each page's view state sits
/// behind its own mutex, matching the pages' independence: no page ever
/// touches another page's state.
pub struct TrackerState {
    tracker: UnifyTracker,
    shows_page: Mutex<ShowListPage>,
    detail_page: Mutex<ShowDetailPage>,
    search_page: Mutex<SearchPage>,
    add_action: Mutex<AddShowAction>,
}

impl TrackerState {
    /// Create state against the default API configuration.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new() -> Result<Self, String> {
        let tracker = UnifyTracker::new().map_err(|e| e.to_string())?;
        Ok(Self::with_tracker(tracker))
    }

    /// Create state against a specific API configuration.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn with_config(config: ApiConfig) -> Result<Self, String> {
        let tracker = UnifyTracker::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self::with_tracker(tracker))
    }

    /// Create state around an existing tracker.
    pub fn with_tracker(tracker: UnifyTracker) -> Self {
        Self {
            tracker,
            shows_page: Mutex::new(ShowListPage::new()),
            detail_page: Mutex::new(ShowDetailPage::new()),
            search_page: Mutex::new(SearchPage::new()),
            add_action: Mutex::new(AddShowAction::new()),
        }
    }

    /// The shared API tracker.
    pub fn tracker(&self) -> &UnifyTracker {
        &self.tracker
    }

    /// The home page's view state.
    pub fn shows_page(&self) -> &Mutex<ShowListPage> {
        &self.shows_page
    }

    /// The detail page's view state.
    pub fn detail_page(&self) -> &Mutex<ShowDetailPage> {
        &self.detail_page
    }

    /// The search page's view state.
    pub fn search_page(&self) -> &Mutex<SearchPage> {
        &self.search_page
    }

    /// The add action's state.
    pub fn add_action(&self) -> &Mutex<AddShowAction> {
        &self.add_action
    }
}
