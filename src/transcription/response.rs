//! Interpretation of the service's JSON reply.
//!
//! The server wraps results in `{"code": 200, "msg": ..., "transcription": ...,
//! "translation": ...}`; a `code` other than 200 signals an application-level failure.

use serde::Deserialize;
use serde_json::Value;

use super::error::{truncate_response, TranscriptionError};

/// Application code the service uses for success.
pub const SUCCESS_CODE: i64 = 200;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Outcome of one transcription call.
pub type TranscriptionResult = Result<Transcript, TranscriptionError>;

/// Successful transcription of the Qingpu dialect audio plus its Mandarin translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub transcription: String,
    pub translation: String,
    /// Seconds spent on the network call
    pub request_time: f64,
}

/// Reply body as defined by the server. Every field is optional and loosely typed.
#[derive(Debug, Deserialize)]
pub struct ApiResponseBody {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub msg: Option<Value>,
    #[serde(default)]
    pub transcription: Option<Value>,
    #[serde(default)]
    pub translation: Option<Value>,
}

impl ApiResponseBody {
    /// Numeric equality with 200, so `200` and `200.0` both count.
    pub fn is_success(&self) -> bool {
        match &self.code {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(code) => code == SUCCESS_CODE,
                None => n.as_f64() == Some(SUCCESS_CODE as f64),
            },
            _ => false,
        }
    }

    /// The `code` field as an integer, when it is one that fits in an `i64`.
    pub fn api_code(&self) -> Option<i64> {
        match &self.code {
            Some(Value::Number(n)) if n.is_f64() => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64),
            Some(Value::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        text_or(&self.msg, UNKNOWN_ERROR)
    }

    /// Converts the reply into the final outcome.
    pub fn into_result(self, request_time: f64) -> TranscriptionResult {
        if self.is_success() {
            Ok(Transcript {
                transcription: text_or(&self.transcription, ""),
                translation: text_or(&self.translation, ""),
                request_time,
            })
        } else {
            Err(TranscriptionError::Api {
                code: self.api_code(),
                message: self.message(),
            })
        }
    }
}

/// Parses a 200-status body. Only text that is not JSON at all is malformed.
pub fn parse_body(body: &str) -> Result<Value, TranscriptionError> {
    serde_json::from_str(body).map_err(|e| TranscriptionError::MalformedResponse {
        message: e.to_string(),
        raw_response: truncate_response(body),
    })
}

/// Reads a parsed value as the server's reply envelope. Valid JSON that is not an
/// object cannot carry a `code` and is reported as an unexpected reply.
pub fn interpret(value: Value, request_time: f64) -> TranscriptionResult {
    if !value.is_object() {
        return Err(TranscriptionError::Unexpected(format!(
            "expected a JSON object, found {}",
            kind_of(&value)
        )));
    }
    let body: ApiResponseBody = serde_json::from_value(value)
        .map_err(|e| TranscriptionError::Unexpected(e.to_string()))?;
    body.into_result(request_time)
}

fn text_or(field: &Option<Value>, default: &str) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
