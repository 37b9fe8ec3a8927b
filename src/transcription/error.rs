//! Failure kinds for a single upload-and-wait transcription call.
//!
//! Every failure is recovered locally and reported as a value; the `Display` text of
//! each variant is the human-readable `error` string printed in the result block.

use std::error::Error as _;
use std::path::PathBuf;
use std::time::Duration;

/// Number of characters of a response body kept for diagnostics.
pub const RAW_RESPONSE_LIMIT: usize = 500;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranscriptionError {
    /// The audio file does not exist; no request was made.
    #[error("Audio file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// The call did not complete within the configured timeout.
    #[error("Request timeout ({seconds} seconds)")]
    Timeout { seconds: u64 },
    /// The server could not be reached (DNS, refused, unreachable).
    #[error("Connection error - check network and server availability")]
    Connection,
    /// Any other local or transport failure, message kept verbatim.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
    /// The server answered with a status other than 200.
    #[error("HTTP {status}: {reason}")]
    Http {
        status: u16,
        reason: String,
        raw_response: String,
    },
    /// Status 200 but the body could not be read as a JSON object.
    #[error("Invalid JSON response: {message}")]
    MalformedResponse {
        message: String,
        raw_response: String,
    },
    /// Valid reply whose application `code` is not 200.
    #[error("API Error: {message}")]
    Api { code: Option<i64>, message: String },
}

impl TranscriptionError {
    /// Classifies a reqwest failure. Timeouts win over connection errors so that a
    /// connect timeout is reported as a timeout.
    pub fn from_transport(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TranscriptionError::Timeout {
                seconds: timeout.as_secs(),
            }
        } else if err.is_connect() {
            TranscriptionError::Connection
        } else {
            TranscriptionError::Unexpected(error_chain(err))
        }
    }

    /// Application code reported by the server, if any.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            TranscriptionError::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// Truncated response body attached to HTTP and parse failures.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            TranscriptionError::Http { raw_response, .. }
            | TranscriptionError::MalformedResponse { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TranscriptionError {
    fn from(err: std::io::Error) -> Self {
        TranscriptionError::Unexpected(err.to_string())
    }
}

/// First `RAW_RESPONSE_LIMIT` characters of a body, split on char boundaries.
pub fn truncate_response(body: &str) -> String {
    body.chars().take(RAW_RESPONSE_LIMIT).collect()
}

/// Renders an error with its sources, e.g. "builder error: relative URL without a base".
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}
