//! qingpu-asr: uploads a recorded audio file to the Qingpu dialect ASR service and
//! prints the transcription and translation as a JSON block for the calling process.

mod app;
mod config;
mod logging;
mod output;
mod transcription;

#[tokio::main]
async fn main() {
    if let Err(e) = app::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
