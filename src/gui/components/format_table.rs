//! Tabbed format lists with per-row download triggers

use iced::widget::{button, column, container, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::api::{Format, FormatKind, VideoInfo};
use crate::gui::app::Message;
use crate::gui::theme;
use crate::utils::format::format_file_size;

/// Video/audio tabs plus the rows of the active bucket. Each row carries its
/// own download trigger with the row's format id and type tag.
pub fn format_table(
    video: &VideoInfo,
    active_tab: FormatKind,
    in_flight: bool,
) -> Element<'static, Message> {
    let tabs = Row::with_children(
        [FormatKind::Video, FormatKind::Audio]
            .into_iter()
            .map(|kind| {
                let style = if kind == active_tab {
                    theme::TabButtonStyle::Active
                } else {
                    theme::TabButtonStyle::Inactive
                };
                button(text(kind.label()).size(14))
                    .padding([8, 20])
                    .style(iced::theme::Button::Custom(Box::new(style)))
                    .on_press(Message::TabSelected(kind))
                    .into()
            })
            .collect::<Vec<_>>(),
    )
    .spacing(8)
    .align_items(Alignment::Center);

    let formats = match active_tab {
        FormatKind::Video => video.video_formats(),
        FormatKind::Audio => video.audio_formats(),
    };

    let list: Element<'static, Message> = if formats.is_empty() {
        container(
            text(match active_tab {
                FormatKind::Video => "No video formats available",
                FormatKind::Audio => "No audio formats available",
            })
            .size(14)
            .style(iced::theme::Text::Color(theme::GRAY_500)),
        )
        .padding(20)
        .into()
    } else {
        let rows: Vec<Element<'static, Message>> = formats
            .iter()
            .map(|f| format_row(f, active_tab, in_flight))
            .collect();
        scrollable(Column::with_children(rows).spacing(8).padding(10))
            .height(Length::Fixed(250.0))
            .style(iced::theme::Scrollable::Custom(Box::new(
                theme::ScrollableStyle,
            )))
            .into()
    };

    container(column![tabs, list].spacing(12))
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::GlassContainer,
        )))
        .into()
}

fn format_row(format: &Format, kind: FormatKind, in_flight: bool) -> Element<'static, Message> {
    // Video rows lead with resolution (+fps), audio rows with the container.
    let primary = match kind {
        FormatKind::Video => {
            let resolution = format
                .resolution
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            match format.fps {
                Some(fps) => format!("{resolution} {fps}fps"),
                None => resolution,
            }
        }
        FormatKind::Audio => format.ext.to_uppercase(),
    };

    let descriptor = match kind {
        FormatKind::Video => format!("{} • {}", format.ext.to_uppercase(), format.descriptor()),
        FormatKind::Audio => format.descriptor(),
    };

    let download = button(text("Download").size(13))
        .padding([6, 16])
        .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)))
        .on_press_maybe((!in_flight).then(|| Message::DownloadPressed {
            format_id: format.format_id.clone(),
            kind,
        }));

    row![
        text(primary)
            .size(14)
            .width(Length::FillPortion(3))
            .style(iced::theme::Text::Color(theme::GRAY_800)),
        text(descriptor)
            .size(13)
            .width(Length::FillPortion(3))
            .style(iced::theme::Text::Color(theme::GRAY_600)),
        text(format_file_size(format.filesize))
            .size(13)
            .width(Length::FillPortion(2))
            .style(iced::theme::Text::Color(theme::GRAY_600)),
        download,
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
