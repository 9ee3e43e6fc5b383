//! Error types for the Zendesk client.
//!
//! This module defines `ZendeskError`, the unified error type used throughout
//! the crate for consistent error handling and propagation.
//!
//! # Security
//!
//! Credentials must never appear in logs or error messages. Use
//! `sanitize_message()` when constructing error text from external sources.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// A single field-level detail inside an API error envelope.
///
/// Zendesk reports validation failures as a map of field name to a list of
/// these details.
#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Machine-readable error kind for this field.
    #[serde(rename = "error", default)]
    pub kind: Option<String>,

    /// Human-readable description for this field.
    #[serde(default)]
    pub description: Option<String>,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.description) {
            (Some(kind), Some(desc)) => write!(f, "{}: {}", kind, desc),
            (Some(kind), None) => write!(f, "{}", kind),
            (None, Some(desc)) => write!(f, "{}", desc),
            (None, None) => Ok(()),
        }
    }
}

/// Unified error type for all Zendesk client operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking credentials.
#[derive(Error, Debug)]
pub enum ZendeskError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission (connection, DNS, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// The API returned a non-success status with an error envelope.
    #[error("{}", format_api_error(method, url, *status, kind, description, details))]
    Api {
        /// HTTP method of the failed request.
        method: String,
        /// Fully resolved URL of the failed request.
        url: String,
        /// HTTP status code returned.
        status: u16,
        /// Machine-readable error type from the envelope, if present.
        kind: Option<String>,
        /// Human-readable description from the envelope, if present.
        description: Option<String>,
        /// Per-field validation details, if present.
        details: Option<HashMap<String, Vec<ErrorDetail>>>,
    },

    /// Response body failed to decode as the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// JSON serialization of a request body failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A success response was missing the payload the call expected.
    #[error("response did not contain the expected {0} payload")]
    MissingPayload(&'static str),

    /// The server rate-limited us but sent an unusable Retry-After value.
    #[error("rate limited at {url} with malformed Retry-After value {value:?}")]
    MalformedRetryAfter {
        /// URL of the rate-limited request.
        url: String,
        /// The raw header value that failed to parse.
        value: String,
    },

    /// A retrieval call was cancelled via its cancellation token.
    #[error("operation cancelled")]
    Cancelled,

    /// URL parsing failed.
    #[error("invalid URL: {0}")]
    Url(#[source] url::ParseError),
}

fn format_api_error(
    method: &str,
    url: &str,
    status: u16,
    kind: &Option<String>,
    description: &Option<String>,
    details: &Option<HashMap<String, Vec<ErrorDetail>>>,
) -> String {
    let mut msg = format!("{} {}: {}", method, url, status);

    if let Some(kind) = kind {
        msg = format!("{} {}", msg, kind);
    }

    if let Some(description) = description {
        msg = format!("{}: {}", msg, description);
    }

    if let Some(details) = details {
        let mut fields: Vec<&String> = details.keys().collect();
        fields.sort();
        let rendered: Vec<String> = fields
            .into_iter()
            .map(|field| {
                let items: Vec<String> = details[field].iter().map(|d| d.to_string()).collect();
                format!("{}: [{}]", field, items.join(", "))
            })
            .collect();
        msg = format!("{}: {{{}}}", msg, rendered.join(", "));
    }

    msg
}

impl ZendeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        ZendeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZendeskError::Config(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        ZendeskError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Returns the HTTP status of an API error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ZendeskError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this is an API error with a 404 status.
    ///
    /// Not-found is an expected gap during per-identifier scans and is
    /// absorbed by the one-by-one walker rather than surfaced.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if this error came from server-side rate limiting.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ZendeskError::MalformedRetryAfter { .. }) || self.status() == Some(429)
    }

    /// Sanitizes a message to remove any occurrence of a credential.
    ///
    /// Critical for security - passwords and API tokens must never appear in
    /// logs, error messages, or responses.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(
        status: u16,
        kind: Option<&str>,
        description: Option<&str>,
        details: Option<HashMap<String, Vec<ErrorDetail>>>,
    ) -> ZendeskError {
        ZendeskError::Api {
            method: "GET".to_string(),
            url: "https://example.zendesk.com/api/v2/tickets/1.json".to_string(),
            status,
            kind: kind.map(String::from),
            description: description.map(String::from),
            details,
        }
    }

    #[test]
    fn test_missing_env_error() {
        let err = ZendeskError::missing_env("ZENDESK_DOMAIN");
        assert!(err.to_string().contains("ZENDESK_DOMAIN"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_api_error_display_bare() {
        let err = api_error(500, None, None, None);
        assert_eq!(
            err.to_string(),
            "GET https://example.zendesk.com/api/v2/tickets/1.json: 500"
        );
    }

    #[test]
    fn test_api_error_display_with_kind_and_description() {
        let err = api_error(
            422,
            Some("RecordInvalid"),
            Some("Record validation errors"),
            None,
        );
        let msg = err.to_string();
        assert!(msg.contains("422 RecordInvalid: Record validation errors"));
    }

    #[test]
    fn test_api_error_display_with_details() {
        let mut details = HashMap::new();
        details.insert(
            "base".to_string(),
            vec![ErrorDetail {
                kind: Some("DuplicateValue".to_string()),
                description: Some("Email already taken".to_string()),
            }],
        );
        let err = api_error(422, Some("RecordInvalid"), None, Some(details));
        let msg = err.to_string();
        assert!(msg.contains("base"));
        assert!(msg.contains("DuplicateValue: Email already taken"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(api_error(404, None, None, None).is_not_found());
        assert!(!api_error(500, None, None, None).is_not_found());
        assert!(!ZendeskError::Cancelled.is_not_found());
    }

    #[test]
    fn test_is_rate_limit() {
        assert!(api_error(429, None, None, None).is_rate_limit());
        let err = ZendeskError::MalformedRetryAfter {
            url: "https://example.zendesk.com/api/v2/users.json".to_string(),
            value: "soon".to_string(),
        };
        assert!(err.is_rate_limit());
        assert!(!api_error(404, None, None, None).is_rate_limit());
    }

    #[test]
    fn test_sanitize_message_removes_secret() {
        let secret = "hunter2";
        let message = format!("basic auth with {} was rejected", secret);
        let sanitized = ZendeskError::sanitize_message(&message, secret);
        assert!(!sanitized.contains(secret));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "some error message";
        assert_eq!(ZendeskError::sanitize_message(message, ""), message);
    }
}
