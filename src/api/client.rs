//! HTTP client for the analyze/download backend

use serde::Serialize;
use tracing::debug;

use crate::api::models::{AnalyzeResponse, DownloadResponse, FormatKind, VideoInfo};
use crate::utils::ApiError;

/// Body for `POST /download`.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadRequest {
    /// Canonical watch URL (see `VideoInfo::watch_url`).
    pub url: String,
    pub format_id: String,
    #[serde(rename = "type")]
    pub kind: FormatKind,
}

/// Successful `POST /download` outcome: the backend has finished the
/// server-side download and the file is ready to be served.
#[derive(Debug, Clone)]
pub struct DownloadReady {
    pub filename: String,
    pub kind: FormatKind,
}

/// Client for the two backend endpoints plus the file-serving link target.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /analyze` with `{url}`. One suspension point; no timeout, a
    /// slow backend simply keeps the caller waiting.
    pub async fn analyze(&self, url: &str) -> Result<VideoInfo, ApiError> {
        debug!(url, "requesting analysis");
        let response = self
            .http
            .post(format!("{}/analyze", self.base))
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await?;
        let ok = response.status().is_success();
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_analyze(ok, status, &body)
    }

    /// `POST /download` with `{url, format_id, type}`.
    pub async fn download(&self, request: &DownloadRequest) -> Result<DownloadReady, ApiError> {
        debug!(url = %request.url, format_id = %request.format_id, "requesting download");
        let response = self
            .http
            .post(format!("{}/download", self.base))
            .json(request)
            .send()
            .await?;
        let ok = response.status().is_success();
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_download(ok, status, &body)
    }

    /// Link target for the served file. The bytes are opened with the
    /// system handler, never consumed here.
    pub fn file_url(&self, filename: &str) -> String {
        format!("{}/download-file/{}", self.base, filename)
    }

    /// Best-effort fetch of the thumbnail bytes for native rendering.
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

/// Decodes an analyze reply from (status, body) alone so the mapping is
/// testable without a network. Non-2xx replies still carry the error
/// envelope when the backend produced them itself.
fn decode_analyze(ok: bool, status: u16, body: &[u8]) -> Result<VideoInfo, ApiError> {
    if !ok {
        if let Ok(envelope) = serde_json::from_slice::<AnalyzeResponse>(body) {
            if let Some(message) = envelope.error.filter(|m| !m.is_empty()) {
                return Err(ApiError::Backend(message));
            }
        }
        return Err(ApiError::Status(status));
    }

    let envelope: AnalyzeResponse = serde_json::from_slice(body)?;
    if !envelope.success {
        return match envelope.error.filter(|m| !m.is_empty()) {
            Some(message) => Err(ApiError::Backend(message)),
            None => Err(ApiError::BackendUnspecified),
        };
    }
    envelope.info.ok_or(ApiError::MissingPayload)
}

fn decode_download(ok: bool, status: u16, body: &[u8]) -> Result<DownloadReady, ApiError> {
    if !ok {
        if let Ok(envelope) = serde_json::from_slice::<DownloadResponse>(body) {
            if let Some(message) = envelope.error.filter(|m| !m.is_empty()) {
                return Err(ApiError::Backend(message));
            }
        }
        return Err(ApiError::Status(status));
    }

    let envelope: DownloadResponse = serde_json::from_slice(body)?;
    if !envelope.success {
        return match envelope.error.filter(|m| !m.is_empty()) {
            Some(message) => Err(ApiError::Backend(message)),
            None => Err(ApiError::BackendUnspecified),
        };
    }
    let filename = envelope.filename.ok_or(ApiError::MissingPayload)?;
    Ok(DownloadReady {
        filename,
        // An absent echo means a plain video download.
        kind: envelope.kind.unwrap_or(FormatKind::Video),
    })
}
