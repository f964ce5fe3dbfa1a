//! HTTP submission of calculator form records.

use ll97_core::FormRecord;
use reqwest::{Client, Response};
use thiserror::Error;
use tracing::debug;

/// Base URL baked in at compile time. There is no discovery and no
/// per-environment override; tests construct the client against a local
/// stub with [`SubmissionClient::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Path the record is POSTed to, relative to the base URL.
pub const SUBMIT_PATH: &str = "/api/submit";

/// Error surfaced by [`SubmissionClient::submit`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Network failure or non-success HTTP status, carried unchanged from
    /// the underlying client.
    #[error("submission transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin wrapper around one pooled HTTP client.
///
/// Each call is a single best-effort POST: no timeout, no retry, no
/// authentication, no idempotency key.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: Client,
    base_url: String,
}

impl Default for SubmissionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionClient {
    /// Client pointed at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Submits one record as a JSON body to `<base-url>/api/submit`.
    ///
    /// Resolves with the raw response on a success status; a network
    /// failure or non-success status is an error either way.
    pub async fn submit(
        &self,
        record: &FormRecord,
    ) -> Result<Response, SubmitError> {
        let url = format!("{}{SUBMIT_PATH}", self.base_url);
        debug!(%url, "posting form record");

        let response = self.http.post(&url).json(record).send().await?;
        Ok(response.error_for_status()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_base_url_strips_trailing_slashes() {
        let client = SubmissionClient::with_base_url("http://127.0.0.1:8080///");
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn default_client_targets_compiled_in_base_url() {
        let client = SubmissionClient::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
