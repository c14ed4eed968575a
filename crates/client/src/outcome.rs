//! Tagged result of a create-property request.
//!
//! [`SubmissionOutcome`] is what the form controller consumes: every
//! transport, status and decoding problem has already been folded into
//! [`FailureReason`] by the time it leaves the client.

use std::fmt;

/// What the service returned for a successful create.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProperty {
    /// Server-assigned identifier, when the response carried one.
    pub id: Option<String>,
    /// Decoded response body, or `Null` when the body was empty.
    pub body: serde_json::Value,
}

impl CreatedProperty {
    /// A success that came back without a body.
    pub fn empty() -> Self {
        Self {
            id: None,
            body: serde_json::Value::Null,
        }
    }

    /// Wrap a decoded body, lifting a top-level `id` (string or number).
    pub fn from_body(body: serde_json::Value) -> Self {
        let id = match body.get("id") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self { id, body }
    }
}

/// Why a submission did not create a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The request never got a response (refused, DNS, TLS, timeout).
    Transport(String),
    /// The service answered with a non-2xx status.
    Status { status: u16, body: String },
    /// A 2xx response whose body was not valid JSON.
    MalformedBody(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Could not reach the listings service: {msg}"),
            Self::Status { status, .. } => {
                write!(f, "The listings service rejected the property (HTTP {status})")
            }
            Self::MalformedBody(msg) => {
                write!(f, "The listings service sent an unreadable response: {msg}")
            }
        }
    }
}

/// Result of one create-property request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success(CreatedProperty),
    Failure(FailureReason),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
