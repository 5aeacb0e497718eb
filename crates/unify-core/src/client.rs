//! HTTP client for the Unify REST API
//!
//! The original front-end scattered hard-coded hosts and ports across its
//! call sites; this module is the single configurable client that replaces
//! them. One base URL, one timeout, one error mapping.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Result, UnifyError};

/// Default base URL of the Unify API server
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Unify HTTP client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API server (default: `http://localhost:8080`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Configuration pointing at the given base URL, default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the Unify API
///
/// Wraps a `reqwest::Client` rooted at a configurable base URL and maps
/// responses into the library's error taxonomy: network failures, non-2xx
/// statuses, and malformed JSON are all distinct errors rather than
/// silently ignored.
pub struct UnifyClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl UnifyClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ApiConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client is rooted at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON resource from an API path.
    ///
    /// # Arguments
    /// * `path` - Relative path on the API server (e.g. "/api/shows")
    ///
    /// # Errors
    /// - `UnifyError::Http` - Network failure or timeout
    /// - `UnifyError::NotFound` - Server returned 404
    /// - `UnifyError::Status` - Any other non-success status
    /// - `UnifyError::Decode` - Response body was not the expected JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        self.decode(path, response).await
    }

    /// POST a form-encoded body to an API path and decode the JSON response.
    ///
    /// # Arguments
    /// * `path` - Relative path on the API server
    /// * `form` - Key/value pairs for the `application/x-www-form-urlencoded` body
    ///
    /// # Errors
    /// Same taxonomy as [`UnifyClient::get_json`].
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).form(form).send().await?;
        self.decode(path, response).await
    }

    /// Map status and body of a response into the error taxonomy.
    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!(%path, "resource not found");
            return Err(UnifyError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            tracing::warn!(%path, status = status.as_u16(), "non-success status");
            return Err(UnifyError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%path, error = %e, "undecodable response body");
            UnifyError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> UnifyClient {
        UnifyClient::with_config(ApiConfig::with_base_url(server.uri())).unwrap()
    }

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client =
            UnifyClient::with_config(ApiConfig::with_base_url("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_creation() {
        assert!(UnifyClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shows"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Dark"}])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let shows: Vec<crate::types::Show> = client.get_json("/api/shows").await.unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].name, "Dark");
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shows/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<crate::types::Show> = client.get_json("/api/shows/99").await;
        match result {
            Err(UnifyError::NotFound(p)) => assert_eq!(p, "/api/shows/99"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_json_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shows"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Vec<crate::types::Show>> = client.get_json("/api/shows").await;
        match result {
            Err(UnifyError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shows"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Vec<crate::types::Show>> = client.get_json("/api/shows").await;
        assert!(matches!(result, Err(UnifyError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_get_json_connection_refused() {
        // Port 9 (discard) is not listening
        let client =
            UnifyClient::with_config(ApiConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        let result: Result<Vec<crate::types::Show>> = client.get_json("/api/shows").await;
        assert!(matches!(result, Err(UnifyError::Http(_))));
    }

    #[tokio::test]
    async fn test_post_form_sends_urlencoded_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/shows"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("id=tt0903747"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let added: crate::types::AddedShow = client
            .post_form("/api/shows", &[("id", "tt0903747")])
            .await
            .unwrap();
        assert_eq!(added.id, 42);
    }
}
