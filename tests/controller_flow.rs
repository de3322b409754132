//! Message-driven tests for the analyze and download flows, no network.

use iced::Application;
use tubedesk::api::{DownloadReady, Format, FormatKind, VideoInfo};
use tubedesk::gui::app::{AppFlags, Message, Panel, TubedeskApp};

fn sample_format(id: &str, vcodec: &str, acodec: &str) -> Format {
    Format {
        format_id: id.to_string(),
        ext: "mp4".to_string(),
        resolution: Some("1920x1080".to_string()),
        fps: Some(30),
        vcodec: Some(vcodec.to_string()),
        acodec: Some(acodec.to_string()),
        filesize: Some(52_428_800),
        format_note: Some("1080p".to_string()),
    }
}

fn sample_video(title: &str) -> VideoInfo {
    VideoInfo {
        id: "abc123".to_string(),
        title: title.to_string(),
        thumbnail: None,
        duration: Some("0:03:20".to_string()),
        uploader: Some("Channel".to_string()),
        upload_date: Some("20230115".to_string()),
        view_count: Some(1_234_567),
        like_count: None,
        description: None,
        formats: vec![
            sample_format("137", "h264", "aac"),
            sample_format("251", "none", "opus"),
            sample_format("sb0", "none", "none"),
        ],
    }
}

fn new_app() -> TubedeskApp {
    let (app, _) = TubedeskApp::new(AppFlags {
        server_url: "http://127.0.0.1:5000".to_string(),
    });
    app
}

fn analyzed_app(title: &str) -> TubedeskApp {
    let mut app = new_app();
    app.update(Message::UrlChanged(
        "https://youtu.be/abc123?t=10".to_string(),
    ));
    app.update(Message::AnalyzePressed);
    app.update(Message::AnalyzeFinished(Ok(sample_video(title))));
    app
}

#[test]
fn empty_url_is_rejected_locally() {
    let mut app = new_app();
    app.update(Message::UrlChanged("   ".to_string()));
    app.update(Message::AnalyzePressed);

    assert_eq!(app.panel(), Panel::Idle);
    assert!(!app.in_flight());
    assert_eq!(app.error_message(), Some("Please enter a YouTube URL"));
}

#[test]
fn malformed_url_is_rejected_locally() {
    let mut app = new_app();
    app.update(Message::UrlChanged("https://example.com/watch".to_string()));
    app.update(Message::AnalyzePressed);

    assert_eq!(app.panel(), Panel::Idle);
    assert!(!app.in_flight());
    assert_eq!(app.error_message(), Some("Please enter a valid YouTube URL"));
}

#[test]
fn valid_url_enters_loading() {
    let mut app = new_app();
    app.update(Message::UrlChanged(
        "https://www.youtube.com/watch?v=abc123".to_string(),
    ));
    app.update(Message::AnalyzePressed);

    assert_eq!(app.panel(), Panel::Loading);
    assert!(app.in_flight());
    assert_eq!(app.error_message(), None);
}

#[test]
fn analyze_success_reveals_video_panel_with_partitioned_formats() {
    let app = analyzed_app("Sample Video");

    assert_eq!(app.panel(), Panel::Video);
    assert_eq!(app.error_message(), None);
    assert!(!app.in_flight());
    assert_eq!(app.active_tab(), FormatKind::Video);

    let video = app.current_video().expect("current video stored");
    assert_eq!(video.video_formats().len(), 1);
    assert_eq!(video.audio_formats().len(), 1);
    // The streamless "sb0" entry lands in neither bucket.
    assert_eq!(video.formats.len(), 3);
}

#[test]
fn analyze_failure_shows_backend_message_and_keeps_video_hidden() {
    let mut app = new_app();
    app.update(Message::UrlChanged("https://youtu.be/abc123".to_string()));
    app.update(Message::AnalyzePressed);
    app.update(Message::AnalyzeFinished(Err("Video unavailable".to_string())));

    assert_eq!(app.panel(), Panel::Idle);
    assert_eq!(app.error_message(), Some("Video unavailable"));
    assert!(app.current_video().is_none());
}

#[test]
fn second_analyze_is_ignored_while_in_flight() {
    let mut app = new_app();
    app.update(Message::UrlChanged("https://youtu.be/abc123".to_string()));
    app.update(Message::AnalyzePressed);
    assert!(app.in_flight());

    app.update(Message::AnalyzePressed);
    assert_eq!(app.panel(), Panel::Loading);
    assert!(app.in_flight());
}

#[test]
fn download_sends_canonical_watch_url() {
    // The request body is built from the stored video id, so the canonical
    // form is observable through the stored video even though the typed URL
    // was the shortened one.
    let app = analyzed_app("Sample Video");
    let video = app.current_video().unwrap();
    assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=abc123");
}

#[test]
fn download_success_builds_link_and_suggested_name() {
    let mut app = analyzed_app("My Video!");

    app.update(Message::DownloadPressed {
        format_id: "137".to_string(),
        kind: FormatKind::Video,
    });
    assert_eq!(app.panel(), Panel::Loading);
    assert!(app.in_flight());

    app.update(Message::DownloadFinished(Ok(DownloadReady {
        filename: "abc123.mp4".to_string(),
        kind: FormatKind::Video,
    })));

    assert_eq!(app.panel(), Panel::DownloadReady);
    let done = app.completed_download().expect("completed download");
    assert_eq!(done.save_as, "My Video.mp4");
    assert_eq!(
        done.file_url,
        "http://127.0.0.1:5000/download-file/abc123.mp4"
    );
}

#[test]
fn audio_download_suggests_mp3_name() {
    let mut app = analyzed_app("My Video!");
    app.update(Message::DownloadPressed {
        format_id: "251".to_string(),
        kind: FormatKind::Audio,
    });
    app.update(Message::DownloadFinished(Ok(DownloadReady {
        filename: "abc123.mp3".to_string(),
        kind: FormatKind::Audio,
    })));

    assert_eq!(
        app.completed_download().unwrap().save_as,
        "My Video.mp3"
    );
}

#[test]
fn download_failure_returns_to_video_panel() {
    let mut app = analyzed_app("Sample Video");
    app.update(Message::DownloadPressed {
        format_id: "137".to_string(),
        kind: FormatKind::Video,
    });
    app.update(Message::DownloadFinished(Err("Download failed".to_string())));

    assert_eq!(app.panel(), Panel::Video);
    assert_eq!(app.error_message(), Some("Download failed"));
    assert!(app.current_video().is_some());
}

#[test]
fn new_download_attempt_drops_previous_result() {
    let mut app = analyzed_app("Sample Video");
    app.update(Message::DownloadPressed {
        format_id: "137".to_string(),
        kind: FormatKind::Video,
    });
    app.update(Message::DownloadFinished(Ok(DownloadReady {
        filename: "abc123.mp4".to_string(),
        kind: FormatKind::Video,
    })));
    assert!(app.completed_download().is_some());

    app.update(Message::DownloadPressed {
        format_id: "251".to_string(),
        kind: FormatKind::Audio,
    });
    assert_eq!(app.panel(), Panel::Loading);
    assert!(app.completed_download().is_none());
}

#[test]
fn download_without_current_video_is_a_no_op() {
    let mut app = new_app();
    app.update(Message::DownloadPressed {
        format_id: "137".to_string(),
        kind: FormatKind::Video,
    });

    assert_eq!(app.panel(), Panel::Idle);
    assert!(!app.in_flight());
}

#[test]
fn start_over_clears_everything() {
    let mut app = analyzed_app("Sample Video");
    app.update(Message::DownloadPressed {
        format_id: "137".to_string(),
        kind: FormatKind::Video,
    });
    app.update(Message::DownloadFinished(Ok(DownloadReady {
        filename: "abc123.mp4".to_string(),
        kind: FormatKind::Video,
    })));

    app.update(Message::StartOver);

    assert_eq!(app.panel(), Panel::Idle);
    assert_eq!(app.url_value(), "");
    assert_eq!(app.error_message(), None);
    assert!(app.current_video().is_none());
    assert!(app.completed_download().is_none());
}

#[test]
fn tab_selection_switches_bucket() {
    let mut app = analyzed_app("Sample Video");
    assert_eq!(app.active_tab(), FormatKind::Video);

    app.update(Message::TabSelected(FormatKind::Audio));
    assert_eq!(app.active_tab(), FormatKind::Audio);
}
