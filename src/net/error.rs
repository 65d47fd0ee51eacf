//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API call resolves to exactly one value or one `ApiError`. Nothing is
//! retried; callers decide whether to log, show the message, or roll back.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{}", http_error_text(*status, message.as_deref()))]
    Http { status: u16, message: Option<String> },
    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// A 2xx response body did not match the expected schema.
    #[error("failed to decode response body: {0}")]
    Decode(String),
    /// The browser HTTP layer is not compiled into this build.
    #[error("http client not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build an HTTP error from a status code and raw response body.
    ///
    /// The body's `message` field is used when it is a string or a list of
    /// strings; anything else leaves the message empty.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Http { status, message: extract_error_message(body) }
    }

    /// HTTP status code, if the server responded.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, verbatim.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message: Some(message), .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text to show the user: the server message when present, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<ErrorMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        ErrorMessage::One(message) => message,
        ErrorMessage::Many(messages) => messages.join(", "),
    };
    if message.trim().is_empty() { None } else { Some(message) }
}

fn http_error_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("http {status}: {message}"),
        None => format!("http {status}"),
    }
}
