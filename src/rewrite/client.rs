//! Generation endpoint client

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{GENERIC_REMOTE_ERROR, UNREACHABLE_ERROR};

/// How one rewrite attempt failed. Both variants are recoverable and carry
/// the message shown to the user verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The endpoint answered with a non-2xx status.
    #[error("{0}")]
    Remote(String),
    /// The endpoint was unreachable, timed out, or returned a body the
    /// client could not interpret.
    #[error("{0}")]
    Unreachable(String),
}

impl GenerationError {
    pub fn message(&self) -> &str {
        match self {
            Self::Remote(msg) | Self::Unreachable(msg) => msg,
        }
    }
}

/// HTTP client for the text-generation endpoint
#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// Response body, decoded defensively: both fields optional so an
/// unexpected shape maps to an error variant instead of a decode panic.
#[derive(Deserialize)]
struct GenerateResponse {
    text: Option<String>,
    error: Option<String>,
}

impl GenerationClient {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        // Client::builder only fails on TLS backend misconfiguration;
        // fall back to the default client rather than refusing to start.
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client, endpoint }
    }

    /// Send the prompt and interpret the response.
    ///
    /// Success is HTTP 2xx with a `text` field, passed through byte-for-byte
    /// (leading/trailing whitespace preserved). No retries: a failed attempt
    /// is resolved here and the user re-triggers the workflow.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Generation request failed to send: {}", e);
                GenerationError::Unreachable(UNREACHABLE_ERROR.to_string())
            })?;

        let status = response.status();
        // A body that does not parse as JSON is a malformed response, no
        // matter the status; only a parsed body lacking a usable error
        // field falls back to the generic remote message.
        let body: GenerateResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Generation response body unreadable ({}): {}", status, e);
                return Err(GenerationError::Unreachable(UNREACHABLE_ERROR.to_string()));
            }
        };

        if status.is_success() {
            // A 2xx without a text field is a malformed response, not a
            // remote-reported error.
            body.text
                .ok_or_else(|| GenerationError::Unreachable(UNREACHABLE_ERROR.to_string()))
        } else {
            let message = body
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string());
            Err(GenerationError::Remote(message))
        }
    }
}
