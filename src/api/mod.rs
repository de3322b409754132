//! Backend API: wire models and the HTTP client

pub mod client;
pub mod models;

pub use client::{ApiClient, DownloadReady, DownloadRequest};
pub use models::{AnalyzeResponse, DownloadResponse, Format, FormatKind, VideoInfo};
