//! High-level Unify API operations
//!
//! This module provides the operations the pages are built from: listing
//! tracked shows, fetching one show with its seasons and episodes,
//! searching the metadata provider, and adding a show by provider ID.

use crate::client::{ApiConfig, UnifyClient};
use crate::error::{Result, UnifyError};
use crate::types::{AddedShow, SearchResult, Show};

/// Typed facade over the Unify REST API
///
/// All operations are asynchronous and go through a single configured
/// [`UnifyClient`].
///
/// # Example
/// ```no_run
/// use unify_core::UnifyTracker;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let tracker = UnifyTracker::new()?;
///
///     let shows = tracker.list_shows().await?;
///     println!("Tracking {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct UnifyTracker {
    client: UnifyClient,
}

impl UnifyTracker {
    /// Create a new tracker with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: UnifyClient::new()?,
        })
    }

    /// Create a new tracker against a specific API configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            client: UnifyClient::with_config(config)?,
        })
    }

    /// Create a new tracker with a pre-configured client.
    ///
    /// Useful for testing or when the client needs custom configuration.
    pub fn with_client(client: UnifyClient) -> Self {
        Self { client }
    }

    /// List all tracked shows.
    ///
    /// `GET /api/shows`. Order of the response is unspecified; display
    /// ordering is applied by the pages via [`crate::ordering`].
    pub async fn list_shows(&self) -> Result<Vec<Show>> {
        self.client.get_json("/api/shows").await
    }

    /// Get a single show with its nested seasons and episodes.
    ///
    /// `GET /api/shows/{id}`.
    ///
    /// # Arguments
    /// * `id` - Unify ID of the show
    ///
    /// # Returns
    /// * `Ok(Show)` with seasons and episodes populated
    /// * `Err(UnifyError::InvalidId)` if `id` is 0
    /// * `Err(UnifyError::NotFound)` if the show doesn't exist
    pub async fn get_show(&self, id: u32) -> Result<Show> {
        if id == 0 {
            return Err(UnifyError::InvalidId(id));
        }

        let path = format!("/api/shows/{id}");
        self.client.get_json(&path).await
    }

    /// Search the metadata provider for shows matching a query.
    ///
    /// `GET /api/search?q={query}`. The query is passed through verbatim:
    /// the search page fires one request per keystroke, empty input
    /// included, and the server decides what an empty query means.
    ///
    /// # Arguments
    /// * `query` - Search query string
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let path = format!("/api/search?q={}", urlencoding::encode(query));
        self.client.get_json(&path).await
    }

    /// Add a show to the tracker by its provider-specific ID.
    ///
    /// `POST /api/shows` with form-encoded body `id={provider_id}` — the
    /// one body shape the server deserializes. The server resolves the
    /// provider ID, stores the show with all seasons and episodes, and
    /// replies with the created record.
    ///
    /// # Arguments
    /// * `provider_id` - Provider-specific identifier of the show
    ///
    /// # Returns
    /// * `Ok(AddedShow)` carrying the new show's Unify ID
    /// * `Err(UnifyError::InvalidProviderId)` if `provider_id` is empty or
    ///   whitespace-only
    pub async fn add_show(&self, provider_id: &str) -> Result<AddedShow> {
        let trimmed = provider_id.trim();
        if trimmed.is_empty() {
            return Err(UnifyError::InvalidProviderId(provider_id.to_string()));
        }

        self.client.post_form("/api/shows", &[("id", trimmed)]).await
    }
}
