//! # Transport
//!
//! Sends a [`ContactSubmission`] to the contact endpoint and classifies
//! what came back. No retries: a failed submission is resubmitted by hand.

use agence_core::{
    messages,
    models::{contact::ContactSubmission, response::ApiResponse},
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SubmitError {
    /// No response reached the form: connection refused, DNS, TLS...
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// The server answered with a non-success status.
    #[error("Server responded with {status}")]
    Server { status: u16, message: Option<String> },
}

impl SubmitError {
    /// Text the form shows for this failure.
    ///
    /// A server-provided message is shown verbatim; otherwise a fixed
    /// fallback distinguishes "no answer" from "answered with an error".
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Unreachable(_) => messages::SERVER_UNREACHABLE,
            SubmitError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.as_str(),
            SubmitError::Server { .. } => messages::GENERIC_SUBMIT_FAILURE,
        }
    }
}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post_contact(&self, payload: &ContactSubmission) -> Result<ApiResponse, SubmitError>;
}

/// JSON-over-HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn post_contact(&self, payload: &ContactSubmission) -> Result<ApiResponse, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                warn!("Contact endpoint unreachable: {}", err);
                SubmitError::Unreachable(err.to_string())
            })?;

        let status = response.status();
        // A body that cannot be read is treated like an empty one.
        let body = response.text().await.unwrap_or_default();
        debug!("Contact endpoint answered {}: {}", status, body);

        if status.is_success() {
            return serde_json::from_str::<ApiResponse>(&body).map_err(|_| SubmitError::Server {
                status: status.as_u16(),
                message: None,
            });
        }

        Err(SubmitError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Pulls `message` out of an error body, whatever else it carries.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
