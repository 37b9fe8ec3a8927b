//! Machine-readable result printed at the end of every run.
//!
//! The calling process scans stdout for the RESULT delimiter and parses the JSON that
//! follows it, so the block is always the last thing written.

use serde::{Deserialize, Serialize};

use crate::transcription::TranscriptionResult;

/// Flat JSON shape of a transcription outcome. Fields that do not apply to the
/// outcome are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl From<&TranscriptionResult> for ResultRecord {
    fn from(outcome: &TranscriptionResult) -> Self {
        match outcome {
            Ok(transcript) => ResultRecord {
                success: true,
                transcription: Some(transcript.transcription.clone()),
                translation: Some(transcript.translation.clone()),
                request_time: Some(transcript.request_time),
                error: None,
                api_code: None,
                raw_response: None,
            },
            Err(err) => ResultRecord {
                success: false,
                transcription: None,
                translation: None,
                request_time: None,
                error: Some(err.to_string()),
                api_code: err.api_code(),
                raw_response: err.raw_response().map(str::to_string),
            },
        }
    }
}

/// Line that separates progress output from the JSON result.
pub fn result_delimiter() -> String {
    let rule = "=".repeat(20);
    format!("{rule} RESULT {rule}")
}

/// Renders the delimited block: a blank line, the delimiter, then pretty JSON
/// (two-space indent, non-ASCII kept literal).
pub fn render_result_block(outcome: &TranscriptionResult) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(&ResultRecord::from(outcome))?;
    Ok(format!("\n{}\n{json}\n", result_delimiter()))
}
