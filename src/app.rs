//! Application orchestration: argument parsing, banner, transcription and the result block.

use crate::config::{self, ClientConfig};
use crate::logging;
use crate::output;
use crate::transcription::TranscriptionClient;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

const BANNER_WIDTH: usize = 50;
const BANNER_TITLE: &str = "Qingpu Dialect ASR - Rust Client";

/// Upload a recording to the Qingpu dialect ASR service and print the transcription
/// and Mandarin translation as JSON
#[derive(Parser, Debug)]
#[command(name = "qingpu-asr")]
#[command(version)]
#[command(
    after_help = "OUTPUT:\n    Progress lines are followed by a '==================== RESULT ===================='\n    line and the JSON result. The exit code is 0 whenever a result is printed,\n    including failed transcriptions; 1 means the command line was wrong."
)]
struct Cli {
    /// Path to the audio file to transcribe
    #[arg(value_name = "AUDIO_FILE")]
    audio_file: PathBuf,

    /// Transcribe-and-translate endpoint to upload to
    #[arg(long, value_name = "URL", default_value = config::DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = config::DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone()).with_timeout(Duration::from_secs(self.timeout))
    }
}

fn usage() -> String {
    format!("Usage: {} <audio_file_path>", env!("CARGO_PKG_NAME"))
}

fn banner() -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{BANNER_TITLE}\n{rule}")
}

/// Runs one transcription and prints its result block.
///
/// # Exit Codes
/// - 0: A result was printed (successful or not)
/// - 1: Wrong command-line arguments
///
/// # Errors
/// - If stdout cannot be written
pub async fn run() -> Result<(), anyhow::Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            eprint!("{e}");
            println!("{}", usage());
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    println!("{}", banner());

    let client = TranscriptionClient::new(cli.client_config());
    tracing::info!(
        "Transcribing {} via {}",
        cli.audio_file.display(),
        client.config().api_url
    );

    let outcome = client.transcribe(&cli.audio_file).await;
    match &outcome {
        Ok(transcript) => tracing::info!(
            "Transcription succeeded in {:.2}s ({} characters)",
            transcript.request_time,
            transcript.transcription.chars().count()
        ),
        Err(e) => tracing::warn!("Transcription failed: {e}"),
    }

    let block = output::render_result_block(&outcome)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(block.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positional_uses_defaults() {
        let cli = Cli::try_parse_from(["qingpu-asr", "recording.wav"]).unwrap();
        assert_eq!(cli.audio_file, PathBuf::from("recording.wav"));
        assert_eq!(cli.client_config(), ClientConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "qingpu-asr",
            "recording.wav",
            "--api-url",
            "http://localhost:10000/transcribe-and-translate",
            "--timeout",
            "5",
        ])
        .unwrap();
        let config = cli.client_config();
        assert_eq!(config.api_url, "http://localhost:10000/transcribe-and-translate");
        assert_eq!(config.timeout_secs(), 5);
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(Cli::try_parse_from(["qingpu-asr"]).is_err());
        assert!(Cli::try_parse_from(["qingpu-asr", "a.wav", "b.wav"]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["qingpu-asr", "a.wav", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_usage_and_banner() {
        assert_eq!(usage(), "Usage: qingpu-asr <audio_file_path>");
        let banner = banner();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(50));
        assert_eq!(lines[1], BANNER_TITLE);
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
