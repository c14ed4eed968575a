//! REST client for the listings service.
//!
//! [`PropertiesApi`] turns a [`PropertyDraft`] into a single
//! `POST /properties` request using [`reqwest`]. Its
//! [`SubmissionClient`] implementation folds every failure into a
//! [`SubmissionOutcome`] so callers never see a raw transport error.

use std::future::Future;
use std::time::Duration;

use listing_core::draft::PropertyDraft;
use reqwest::header::CONTENT_TYPE;

use crate::config::ClientConfig;
use crate::outcome::{CreatedProperty, FailureReason, SubmissionOutcome};

/// Anything that can turn a draft into a create-request.
///
/// Receives an owned snapshot of the draft; the form's own copy is never
/// touched by the client.
pub trait SubmissionClient: Send + Sync {
    /// Issue exactly one create-request for `draft`.
    fn create_property(
        &self,
        draft: PropertyDraft,
    ) -> impl Future<Output = SubmissionOutcome> + Send;
}

/// HTTP client for the listings service.
pub struct PropertiesApi {
    client: reqwest::Client,
    properties_url: String,
}

/// Errors from the listings REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Listings API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A success response whose body is not JSON.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ApiError> for FailureReason {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Request(e) => FailureReason::Transport(e.to_string()),
            ApiError::Status { status, body } => FailureReason::Status { status, body },
            ApiError::Decode(e) => FailureReason::MalformedBody(e.to_string()),
        }
    }
}

impl PropertiesApi {
    /// Create a client for the service described by `config`, applying
    /// its request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            properties_url: config.properties_url(),
        }
    }

    /// Endpoint this client posts to.
    pub fn properties_url(&self) -> &str {
        &self.properties_url
    }

    /// Create a property listing.
    ///
    /// Sends `POST /properties` with the draft as a JSON body. An empty
    /// success body is accepted.
    pub async fn post_property(&self, draft: &PropertyDraft) -> Result<CreatedProperty, ApiError> {
        let response = self
            .client
            .post(&self.properties_url)
            .header(CONTENT_TYPE, "application/json")
            .json(draft)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Return the response unchanged on a success status, or an
    /// [`ApiError::Status`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a success body, treating an empty body as "no payload".
    async fn parse_response(response: reqwest::Response) -> Result<CreatedProperty, ApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(CreatedProperty::empty());
        }
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(CreatedProperty::from_body(body))
    }
}

impl SubmissionClient for PropertiesApi {
    async fn create_property(&self, draft: PropertyDraft) -> SubmissionOutcome {
        tracing::debug!(url = %self.properties_url, "Submitting property");

        match self.post_property(&draft).await {
            Ok(created) => {
                tracing::info!(
                    url = %self.properties_url,
                    id = created.id.as_deref().unwrap_or("-"),
                    "Property created",
                );
                SubmissionOutcome::Success(created)
            }
            Err(err) => {
                match &err {
                    ApiError::Request(e) => {
                        tracing::error!(url = %self.properties_url, error = %e, "Property request failed");
                    }
                    ApiError::Status { status, .. } => {
                        tracing::warn!(url = %self.properties_url, status, "Property request rejected");
                    }
                    ApiError::Decode(e) => {
                        tracing::warn!(url = %self.properties_url, error = %e, "Unreadable property response");
                    }
                }
                SubmissionOutcome::Failure(err.into())
            }
        }
    }
}
