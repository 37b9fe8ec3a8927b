//! Client configuration for the Qingpu dialect ASR service.
//!
//! There is no configuration file: the endpoint and timeout come from built-in
//! defaults, optionally overridden on the command line.

use std::time::Duration;

/// Transcribe-and-translate endpoint used when the caller does not supply one.
pub const DEFAULT_API_URL: &str = "http://47.115.207.128:10000/transcribe-and-translate";

/// Hard limit for the whole upload-and-wait call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a single transcription request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute HTTP(S) URL the audio is posted to
    pub api_url: String,
    /// Total time allowed for sending the upload and reading the reply
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given endpoint with the default timeout.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout in whole seconds, as reported in timeout errors.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
