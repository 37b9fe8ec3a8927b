//! Upload-and-wait client for the transcribe-and-translate endpoint.
//!
//! One call validates the local file, streams it as multipart form data under the
//! `audio_file` field, and interprets the reply. Every failure is returned as a
//! [`TranscriptionError`]; nothing is retried.

use std::path::Path;
use std::time::Instant;

use reqwest::multipart::{Form, Part};
use reqwest::{Body, StatusCode};
use tokio::io::AsyncReadExt;
use tokio_util::codec::{BytesCodec, FramedRead};

use super::audio_format::AudioFormat;
use super::error::{truncate_response, TranscriptionError};
use super::response::{self, TranscriptionResult};
use crate::config::ClientConfig;

/// Multipart field name the service reads the audio from.
pub const AUDIO_FIELD_NAME: &str = "audio_file";

/// Bytes of the file header logged for format diagnostics.
const HEADER_PREVIEW_LEN: usize = 12;

pub struct TranscriptionClient {
    config: ClientConfig,
}

impl TranscriptionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Transcribes and translates the audio file at `audio_path`.
    ///
    /// Prints progress lines (file name, size, target URL, elapsed time, status and the
    /// parsed reply) to stdout as it goes.
    pub async fn transcribe(&self, audio_path: &Path) -> TranscriptionResult {
        if !audio_path.exists() {
            return Err(TranscriptionError::FileNotFound(audio_path.to_path_buf()));
        }

        let metadata = tokio::fs::metadata(audio_path).await?;
        if !metadata.is_file() {
            return Err(TranscriptionError::Unexpected(format!(
                "Not a regular file: {}",
                audio_path.display()
            )));
        }
        let file_size = metadata.len();

        let file_name = audio_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        println!("Processing audio file: {file_name}");
        println!("File size: {file_size} bytes");
        log_file_header(audio_path).await;

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| self.transport_error(&e))?;

        let form = audio_form(audio_path, file_name, file_size).await?;

        println!("Sending request to: {}", self.config.api_url);
        tracing::debug!(
            "Transcription API Call:\n  URL: {}\n  Method: POST\n  Content-Type: multipart/form-data\n  Timeout: {}s",
            self.config.api_url,
            self.config.timeout_secs()
        );

        let started = Instant::now();
        let (status, body) = self.send(&client, form).await?;
        let request_time = started.elapsed().as_secs_f64();

        println!("Request completed in {request_time:.2} seconds");
        println!("Response status: {}", status.as_u16());

        if status != StatusCode::OK {
            tracing::debug!("Transcription service returned HTTP {status}");
            return Err(TranscriptionError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                raw_response: truncate_response(&body),
            });
        }

        let value = response::parse_body(&body)?;
        println!("API Response: {value}");

        response::interpret(value, request_time)
    }

    /// Sends the form and reads the whole body, so the elapsed time covers both.
    async fn send(
        &self,
        client: &reqwest::Client,
        form: Form,
    ) -> Result<(StatusCode, String), TranscriptionError> {
        let response = client
            .post(&self.config.api_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(&e))?;
        Ok((status, body))
    }

    fn transport_error(&self, err: &reqwest::Error) -> TranscriptionError {
        let error = TranscriptionError::from_transport(err, self.config.timeout);
        tracing::debug!("Transcription transport error: {err:?}");
        error
    }
}

/// Builds the single-part form. The open file is owned by the part's body stream and
/// closed when the request completes or fails.
async fn audio_form(
    audio_path: &Path,
    file_name: String,
    file_size: u64,
) -> Result<Form, TranscriptionError> {
    let format = AudioFormat::from_path(audio_path);
    tracing::debug!("Uploading {file_name} as {}", format.mime_type());

    let file = tokio::fs::File::open(audio_path).await?;
    let stream = FramedRead::new(file, BytesCodec::new());
    let part = Part::stream_with_length(Body::wrap_stream(stream), file_size)
        .file_name(file_name)
        .mime_str(format.mime_type())
        .map_err(|e| TranscriptionError::Unexpected(e.to_string()))?;

    Ok(Form::new().part(AUDIO_FIELD_NAME, part))
}

async fn log_file_header(audio_path: &Path) {
    let mut header = [0u8; HEADER_PREVIEW_LEN];
    let read = match tokio::fs::File::open(audio_path).await {
        Ok(mut file) => file.read(&mut header).await,
        Err(e) => Err(e),
    };
    match read {
        Ok(n) => {
            let hex: Vec<String> = header[..n].iter().map(|b| format!("{b:02x}")).collect();
            tracing::debug!("File header bytes ({n}): {}", hex.join(" "));
        }
        Err(e) => tracing::debug!("Failed to read file header: {e}"),
    }
}
