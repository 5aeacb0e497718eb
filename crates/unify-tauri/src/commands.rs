//! Tauri commands for Unify
//!
//! This module contains all Tauri commands that can be invoked from the
//! frontend. Each command drives one page's lifecycle and returns either
//! the page's payload or its error message.

use tauri::State;

use crate::TrackerState;
use unify_core::{SearchResult, Show};

/// Load the home page: all tracked shows, sorted by name.
///
/// # Returns
/// * `Ok(Vec<Show>)` in display order
/// * `Err(String)` with the page's error message if the fetch fails
#[tauri::command]
pub async fn load_shows(state: State<'_, TrackerState>) -> Result<Vec<Show>, String> {
    let mut page = state.shows_page().lock().await;
    let outcome = page.load(state.tracker()).await;

    match outcome.loaded() {
        Some(shows) => Ok(shows.clone()),
        None => Err(outcome
            .error()
            .unwrap_or("show list did not resolve")
            .to_string()),
    }
}

/// Load one show's detail page with seasons and episodes in display order.
///
/// # Arguments
/// * `id` - Unify ID of the show
///
/// # Returns
/// * `Ok(Show)` with sorted seasons and episodes
/// * `Err(String)` with the page's error message if the fetch fails
#[tauri::command]
pub async fn load_show(state: State<'_, TrackerState>, id: u32) -> Result<Show, String> {
    let mut page = state.detail_page().lock().await;
    let outcome = page.load(state.tracker(), id).await;

    match outcome.loaded() {
        Some(show) => Ok(show.clone()),
        None => Err(outcome
            .error()
            .unwrap_or("show detail did not resolve")
            .to_string()),
    }
}

/// Search for shows matching the current input.
///
/// Invoked on every keystroke. The sequencing ticket is issued under the
/// page lock, but the request runs without it, so keystrokes overlap and
/// resolve last-request-wins: the reply is always what the page displays
/// after discarding stale responses.
///
/// # Arguments
/// * `query` - Current content of the search input
///
/// # Returns
/// * `Ok(Vec<SearchResult>)` the results the page displays
/// * `Err(String)` if the latest search failed
#[tauri::command]
pub async fn search_shows(
    state: State<'_, TrackerState>,
    query: String,
) -> Result<Vec<SearchResult>, String> {
    let ticket = state.search_page().lock().await.begin();
    let outcome = state.tracker().search(&query).await;

    let mut page = state.search_page().lock().await;
    page.finish(ticket, outcome);
    match page.error() {
        Some(e) => Err(e.to_string()),
        None => Ok(page.results().to_vec()),
    }
}

/// Add a show by provider ID and return the redirect path.
///
/// Guarded: while one add request is in flight, further triggers are
/// no-ops that perform no network call.
///
/// # Arguments
/// * `provider_id` - Provider-specific identifier from a search result
///
/// # Returns
/// * `Ok(Some(path))` detail-page path of the created show
/// * `Ok(None)` when the trigger was suppressed by the in-flight guard
/// * `Err(String)` if the add request failed
#[tauri::command]
pub async fn add_show(
    state: State<'_, TrackerState>,
    provider_id: String,
) -> Result<Option<String>, String> {
    if !state.add_action().lock().await.begin() {
        return Ok(None);
    }

    let outcome = state.tracker().add_show(&provider_id).await;

    let mut action = state.add_action().lock().await;
    match action.finish(outcome) {
        Some(route) => Ok(Some(route.path())),
        None => Err(action.error().unwrap_or("add failed").to_string()),
    }
}
