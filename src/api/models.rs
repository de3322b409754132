//! Data structures for the backend wire protocol

use serde::{Deserialize, Serialize};

/// Metadata bundle returned for a single analyzed video.
///
/// The controller holds at most one of these at a time; it is replaced
/// wholesale on each successful analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    /// Already rendered by the backend, e.g. "0:03:20".
    #[serde(default)]
    pub duration: Option<String>,
    pub uploader: Option<String>,
    /// 8-digit `YYYYMMDD`; the backend sends "" when unknown.
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

impl VideoInfo {
    /// Canonical watch URL derived from the backend-assigned id. Download
    /// requests always carry this form, never the user's typed input.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// Formats carrying a video stream, in their original order.
    pub fn video_formats(&self) -> Vec<&Format> {
        self.formats
            .iter()
            .filter(|f| f.kind() == Some(FormatKind::Video))
            .collect()
    }

    /// Audio-only formats, in their original order.
    pub fn audio_formats(&self) -> Vec<&Format> {
        self.formats
            .iter()
            .filter(|f| f.kind() == Some(FormatKind::Audio))
            .collect()
    }
}

/// One selectable encoding/container variant of a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    pub format_id: String,
    pub ext: String,
    pub resolution: Option<String>,
    #[serde(default)]
    pub fps: Option<u32>,
    /// The sentinel "none" (or absence) means "no video stream".
    pub vcodec: Option<String>,
    /// The sentinel "none" (or absence) means "no audio stream".
    pub acodec: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    pub format_note: Option<String>,
}

impl Format {
    pub fn has_video(&self) -> bool {
        matches!(self.vcodec.as_deref(), Some(c) if c != "none")
    }

    pub fn has_audio(&self) -> bool {
        matches!(self.acodec.as_deref(), Some(c) if c != "none")
    }

    /// Bucket this format belongs to. A format with neither stream is
    /// dropped from both lists, not surfaced as an error.
    pub fn kind(&self) -> Option<FormatKind> {
        if self.has_video() {
            Some(FormatKind::Video)
        } else if self.has_audio() {
            Some(FormatKind::Audio)
        } else {
            None
        }
    }

    /// Description cell text: the format note when present, otherwise the
    /// leading dot-free segment of the relevant codec, otherwise blank.
    /// Audio rows never show the note, only the codec family.
    pub fn descriptor(&self) -> String {
        match self.kind() {
            Some(FormatKind::Video) => self
                .format_note
                .clone()
                .filter(|n| !n.is_empty())
                .or_else(|| self.vcodec.as_deref().map(codec_family))
                .unwrap_or_default(),
            Some(FormatKind::Audio) => self.acodec.as_deref().map(codec_family).unwrap_or_default(),
            None => String::new(),
        }
    }
}

fn codec_family(codec: &str) -> String {
    codec.split('.').next().unwrap_or_default().to_string()
}

/// Whether a download request targets the video or the audio rendition.
/// Serialized in lowercase on the wire (`"video"` / `"audio"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Video,
    Audio,
}

impl FormatKind {
    /// Extension for the suggested save name of a completed download.
    pub fn file_ext(self) -> &'static str {
        match self {
            FormatKind::Video => "mp4",
            FormatKind::Audio => "mp3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatKind::Video => "Video",
            FormatKind::Audio => "Audio",
        }
    }
}

/// Envelope for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub info: Option<VideoInfo>,
    pub error: Option<String>,
}

/// Envelope for `POST /download`. The backend echoes the requested type;
/// extra fields (title, format_id) are ignored.
#[derive(Debug, Deserialize)]
pub struct DownloadResponse {
    pub success: bool,
    pub filename: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<FormatKind>,
    pub error: Option<String>,
}
