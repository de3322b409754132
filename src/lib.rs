//! Tubedesk library

pub mod api;
pub mod gui;
pub mod utils;

// Re-export main types for easier use
pub use api::{ApiClient, DownloadReady, DownloadRequest, Format, FormatKind, VideoInfo};
pub use gui::{AppFlags, CompletedDownload, Message, Panel, TubedeskApp};
pub use utils::ApiError;
