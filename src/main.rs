//! Tubedesk - Desktop client for a yt-dlp download service
//!
//! Paste a YouTube URL, inspect the formats the backend reports, and trigger
//! a server-side download. The heavy lifting (extraction, transcoding, file
//! serving) happens on the backend; this client drives the two-step
//! analyze/download flow and opens the served file.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use tubedesk::gui::app::{AppFlags, TubedeskApp};

#[derive(Parser)]
struct Args {
    /// Base URL of the analyze/download backend
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = iced::Settings::with_flags(AppFlags {
        server_url: args.server,
    });
    settings.window.size = iced::Size::new(900.0, 640.0);
    settings.window.min_size = Some(iced::Size::new(700.0, 500.0));
    settings.antialiasing = true;

    TubedeskApp::run(settings)?;

    Ok(())
}
