//! Audio container formats recognised from the file extension.
//!
//! The service does not require a content type on the upload part, but labelling it
//! helps proxies and server-side decoders. Unknown extensions fall back to
//! `application/octet-stream`.

use std::path::Path;

/// Represents an audio container the recorder may produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Wav,
    ThreeGpp,
    Mp3,
    Mp4,
    Aac,
    Ogg,
    Flac,
    Webm,
    Other,
}

impl AudioFormat {
    /// Guesses the format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| Self::from_extension(&ext.to_ascii_lowercase()))
            .unwrap_or(AudioFormat::Other)
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "wav" | "wave" => AudioFormat::Wav,
            "3gp" | "3gpp" => AudioFormat::ThreeGpp,
            "mp3" | "mpeg" | "mpga" => AudioFormat::Mp3,
            "m4a" | "mp4" => AudioFormat::Mp4,
            "aac" => AudioFormat::Aac,
            "ogg" | "oga" | "opus" => AudioFormat::Ogg,
            "flac" => AudioFormat::Flac,
            "webm" => AudioFormat::Webm,
            _ => AudioFormat::Other,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::ThreeGpp => "audio/3gpp",
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Mp4 => "audio/mp4",
            AudioFormat::Aac => "audio/aac",
            AudioFormat::Ogg => "audio/ogg",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Webm => "audio/webm",
            AudioFormat::Other => "application/octet-stream",
        }
    }
}
