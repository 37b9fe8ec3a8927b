//! Transcription service for the Qingpu dialect ASR endpoint.
//!
//! The client uploads one audio file, waits for the service to transcribe and translate
//! it, and returns either a [`response::Transcript`] or one of the
//! [`error::TranscriptionError`] kinds.

pub mod audio_format;
pub mod client;
pub mod error;
pub mod response;

#[cfg(test)]
mod mock_server;

pub use client::TranscriptionClient;
pub use response::TranscriptionResult;
