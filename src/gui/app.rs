//! Page controller: the analyze and download flows as an iced application
//!
//! Each flow is a small state machine driven by discrete messages: the user
//! action enters `Loading`, and the single network completion message decides
//! between the success and failure transitions. Rendering is a pure function
//! of the state below.

use std::sync::Arc;

use iced::widget::{image, text_input};
use iced::{Application, Command, Element, Theme};
use tracing::{info, warn};

use crate::api::{ApiClient, DownloadReady, DownloadRequest, FormatKind, VideoInfo};
use crate::gui::clipboard;
use crate::gui::views::main_view;
use crate::utils::error::ApiError;
use crate::utils::format::sanitize_title;
use crate::utils::validate::validate_url;

/// Startup flags: where the backend lives.
#[derive(Debug, Clone)]
pub struct AppFlags {
    pub server_url: String,
}

/// Which region of the window is showing. `Loading` hides everything but the
/// spinner area; the shared error slot is independent of this so a download
/// failure can show its message alongside the re-revealed format list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Idle,
    Loading,
    Video,
    DownloadReady,
}

/// A finished server-side download, ready to be fetched by the user.
#[derive(Debug, Clone)]
pub struct CompletedDownload {
    /// `GET {base}/download-file/<filename>` link target.
    pub file_url: String,
    /// Suggested save name: sanitized title plus the type's extension.
    pub save_as: String,
}

/// Application state. The "current video" is an explicit slot, replaced
/// wholesale on each successful analysis and cleared on reset.
pub struct TubedeskApp {
    api: Arc<ApiClient>,
    url_input: String,
    panel: Panel,
    error: Option<String>,
    current_video: Option<VideoInfo>,
    thumbnail: Option<image::Handle>,
    active_tab: FormatKind,
    completed: Option<CompletedDownload>,
    // At most one pending request across both flows.
    in_flight: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlChanged(String),
    PasteFromClipboard,
    ClearUrl,

    // Analysis flow
    AnalyzePressed,
    AnalyzeFinished(Result<VideoInfo, String>),
    ThumbnailLoaded(Option<image::Handle>),

    // Download flow
    TabSelected(FormatKind),
    DownloadPressed { format_id: String, kind: FormatKind },
    DownloadFinished(Result<DownloadReady, String>),
    OpenDownloadLink,

    // Reset
    StartOver,
}

/// Id of the URL field, shared with the view so reset can refocus it.
pub fn url_input_id() -> text_input::Id {
    text_input::Id::new("youtube-url")
}

impl Application for TubedeskApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let app = Self {
            api: Arc::new(ApiClient::new(&flags.server_url)),
            url_input: String::new(),
            panel: Panel::Idle,
            error: None,
            current_video: None,
            thumbnail: None,
            active_tab: FormatKind::Video,
            completed: None,
            in_flight: false,
        };

        (app, text_input::focus(url_input_id()))
    }

    fn title(&self) -> String {
        String::from("Tubedesk - YouTube Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlChanged(value) => {
                self.url_input = value;
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => self.url_input = content,
                    Err(e) => warn!(error = %e, "clipboard paste failed"),
                }
                Command::none()
            }

            Message::ClearUrl => {
                self.url_input.clear();
                Command::none()
            }

            // Analysis flow
            Message::AnalyzePressed => {
                if self.in_flight {
                    return Command::none();
                }

                let url = match validate_url(&self.url_input) {
                    Ok(url) => url,
                    Err(message) => {
                        // Local failure: no network call, no panel change.
                        self.error = Some(message.to_string());
                        return Command::none();
                    }
                };

                self.in_flight = true;
                self.panel = Panel::Loading;
                self.error = None;
                self.completed = None;

                info!(%url, "analyzing");
                let api = Arc::clone(&self.api);
                Command::perform(
                    async move {
                        api.analyze(&url)
                            .await
                            .map_err(|e| analyze_error_message(&e))
                    },
                    Message::AnalyzeFinished,
                )
            }

            Message::AnalyzeFinished(Ok(info)) => {
                self.in_flight = false;
                self.panel = Panel::Video;
                self.active_tab = FormatKind::Video;
                self.thumbnail = None;

                let thumbnail_url = info.thumbnail.clone();
                info!(id = %info.id, formats = info.formats.len(), "analysis complete");
                self.current_video = Some(info);

                match thumbnail_url {
                    Some(url) if !url.is_empty() => {
                        let api = Arc::clone(&self.api);
                        Command::perform(
                            async move { api.fetch_thumbnail(&url).await.ok() },
                            |bytes| {
                                Message::ThumbnailLoaded(bytes.map(image::Handle::from_memory))
                            },
                        )
                    }
                    _ => Command::none(),
                }
            }

            Message::AnalyzeFinished(Err(message)) => {
                self.in_flight = false;
                warn!(%message, "analysis failed");
                self.panel = Panel::Idle;
                self.error = Some(message);
                Command::none()
            }

            Message::ThumbnailLoaded(handle) => {
                // A late thumbnail for a cleared video is dropped.
                if self.current_video.is_some() {
                    self.thumbnail = handle;
                }
                Command::none()
            }

            // Download flow
            Message::TabSelected(kind) => {
                self.active_tab = kind;
                Command::none()
            }

            Message::DownloadPressed { format_id, kind } => {
                if self.in_flight {
                    return Command::none();
                }
                let Some(video) = &self.current_video else {
                    return Command::none();
                };

                self.in_flight = true;
                self.panel = Panel::Loading;
                self.error = None;
                // Drop any previous result before the new attempt.
                self.completed = None;

                // The backend always receives the canonical watch URL,
                // regardless of how the user typed the original link.
                let request = DownloadRequest {
                    url: video.watch_url(),
                    format_id,
                    kind,
                };

                info!(url = %request.url, format_id = %request.format_id, "downloading");
                let api = Arc::clone(&self.api);
                Command::perform(
                    async move {
                        api.download(&request)
                            .await
                            .map_err(|e| download_error_message(&e))
                    },
                    Message::DownloadFinished,
                )
            }

            Message::DownloadFinished(Ok(ready)) => {
                self.in_flight = false;

                let title = self
                    .current_video
                    .as_ref()
                    .map(|v| v.title.as_str())
                    .unwrap_or("download");
                self.completed = Some(CompletedDownload {
                    file_url: self.api.file_url(&ready.filename),
                    save_as: format!("{}.{}", sanitize_title(title), ready.kind.file_ext()),
                });
                self.panel = Panel::DownloadReady;
                Command::none()
            }

            Message::DownloadFinished(Err(message)) => {
                self.in_flight = false;
                warn!(%message, "download failed");
                self.error = Some(message);
                // Back to the format list so another format can be tried.
                self.panel = Panel::Video;
                Command::none()
            }

            Message::OpenDownloadLink => {
                if let Some(done) = &self.completed {
                    if let Err(e) = open::that(&done.file_url) {
                        warn!(error = %e, url = %done.file_url, "failed to open link");
                    }
                }
                Command::none()
            }

            // Reset
            Message::StartOver => {
                self.url_input.clear();
                self.error = None;
                self.completed = None;
                self.current_video = None;
                self.thumbnail = None;
                self.panel = Panel::Idle;
                text_input::focus(url_input_id())
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(
            &self.url_input,
            self.panel,
            self.error.as_deref(),
            self.current_video.as_ref(),
            self.thumbnail.as_ref(),
            self.active_tab,
            self.completed.as_ref(),
            self.in_flight,
        )
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

// State accessors, mainly for the flow tests.
impl TubedeskApp {
    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_video(&self) -> Option<&VideoInfo> {
        self.current_video.as_ref()
    }

    pub fn completed_download(&self) -> Option<&CompletedDownload> {
        self.completed.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn url_value(&self) -> &str {
        &self.url_input
    }

    pub fn active_tab(&self) -> FormatKind {
        self.active_tab
    }
}

/// User-facing message for an analysis failure: the backend's own message
/// when it gave one, otherwise a flow-specific fallback.
fn analyze_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Backend(message) => message.clone(),
        ApiError::BackendUnspecified => "An unknown error occurred".to_string(),
        _ => "Network error. Please try again.".to_string(),
    }
}

fn download_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Backend(message) => message.clone(),
        ApiError::BackendUnspecified => "Download failed".to_string(),
        _ => "Download failed. Please try again.".to_string(),
    }
}
