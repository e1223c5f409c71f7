use serde_json::Value;

/// Message used when a failed upstream call carries no readable error payload.
pub const FALLBACK_MESSAGE: &str = "Unreachable server error";

/// The one error callers of [`crate::MusicApi`] ever see.
///
/// Transport failures, non-success statuses and upstream error payloads all
/// collapse into this type, carrying a message meant to be shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UpstreamError {
    message: String,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_MESSAGE)
    }

    pub(crate) fn malformed(service: &str) -> Self {
        Self::new(format!("Malformed response from {}", service))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Raw failure shape produced by an [`crate::ports::http::UpstreamHttp`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportFailure {
    /// No usable response: DNS, connect, timeout or an unreadable body.
    Unreachable(String),
    /// The upstream answered with a non-success status.
    Status { status: u16, body: Option<Value> },
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportFailure::Unreachable(reason) => write!(f, "unreachable: {}", reason),
            TransportFailure::Status { status, body } => match body {
                Some(body) => write!(f, "status {}: {}", status, body),
                None => write!(f, "status {}", status),
            },
        }
    }
}

/// Pull `errors[0].details` out of an upstream error payload.
pub fn error_details(body: &Value) -> Option<&str> {
    body.get("errors")?.get(0)?.get("details")?.as_str()
}

/// Whether a successful response body is actually an upstream error payload.
pub(crate) fn is_error_payload(body: &Value) -> bool {
    body.get("errors")
        .and_then(Value::as_array)
        .is_some_and(|errors| !errors.is_empty())
}

/// Collapse any raw failure into an [`UpstreamError`].
pub fn normalize(failure: TransportFailure) -> UpstreamError {
    match failure {
        TransportFailure::Unreachable(_) => UpstreamError::fallback(),
        TransportFailure::Status { body, .. } => body
            .as_ref()
            .and_then(error_details)
            .map(UpstreamError::new)
            .unwrap_or_else(UpstreamError::fallback),
    }
}
