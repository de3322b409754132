//! Video summary card: thumbnail plus the analyzed metadata

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::api::VideoInfo;
use crate::gui::app::Message;
use crate::gui::theme;
use crate::utils::format::{format_date, format_number};

pub fn video_summary(
    video: &VideoInfo,
    thumbnail: Option<&iced::widget::image::Handle>,
) -> Element<'static, Message> {
    let preview: Element<'static, Message> = match thumbnail {
        Some(handle) => iced::widget::image(handle.clone())
            .width(Length::Fixed(240.0))
            .into(),
        None => container(
            text("No preview")
                .size(12)
                .style(iced::theme::Text::Color(theme::GRAY_400)),
        )
        .width(Length::Fixed(240.0))
        .height(Length::Fixed(135.0))
        .center_x()
        .center_y()
        .into(),
    };

    let uploader = video
        .uploader
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());
    let duration = video
        .duration
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());

    let details = column![
        text(video.title.clone())
            .size(20)
            .style(iced::theme::Text::Color(theme::GRAY_800)),
        text(format!("by {uploader}"))
            .size(14)
            .style(iced::theme::Text::Color(theme::GRAY_600)),
        row![
            detail("Uploaded", format_date(video.upload_date.as_deref())),
            detail("Views", format_number(video.view_count.unwrap_or(0))),
            detail("Duration", duration),
        ]
        .spacing(24),
    ]
    .spacing(10);

    container(
        row![preview, details]
            .spacing(20)
            .align_items(Alignment::Start),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )))
    .into()
}

fn detail(label: &'static str, value: String) -> Element<'static, Message> {
    column![
        text(label)
            .size(11)
            .style(iced::theme::Text::Color(theme::GRAY_500)),
        text(value)
            .size(14)
            .style(iced::theme::Text::Color(theme::GRAY_800)),
    ]
    .spacing(2)
    .into()
}
