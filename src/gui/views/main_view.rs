//! Main view: hero input plus the region selected by the controller state

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::api::{FormatKind, VideoInfo};
use crate::gui::app::{CompletedDownload, Message, Panel};
use crate::gui::components::{download_result, format_table, url_input, video_summary};
use crate::gui::theme;

#[allow(clippy::too_many_arguments)]
pub fn main_view(
    url_value: &str,
    panel: Panel,
    error: Option<&str>,
    video: Option<&VideoInfo>,
    thumbnail: Option<&iced::widget::image::Handle>,
    active_tab: FormatKind,
    completed: Option<&CompletedDownload>,
    in_flight: bool,
) -> Element<'static, Message> {
    // Hero input section
    let hero = container(
        column![
            text("Download Video")
                .size(30)
                .style(iced::theme::Text::Color(theme::GRAY_800)),
            url_input(url_value, error.is_some() && panel == Panel::Idle),
            row![
                Space::with_width(Length::Fill),
                button(
                    text(if in_flight { "Working..." } else { "Analyze" }).size(16)
                )
                .on_press_maybe((!in_flight).then_some(Message::AnalyzePressed))
                .padding([14, 32])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            ],
        ]
        .spacing(20),
    )
    .padding(32)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )));

    let mut page = column![hero].spacing(24);

    // Single shared error area
    if let Some(message) = error {
        page = page.push(
            container(text(message).size(14))
                .padding([12, 16])
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(
                    theme::ErrorContainer,
                ))),
        );
    }

    let content: Element<'static, Message> = match panel {
        Panel::Idle => placeholder("Paste a YouTube link to get started"),
        Panel::Loading => placeholder("Talking to the server..."),
        Panel::Video => match video {
            Some(video) => column![
                video_summary(video, thumbnail),
                format_table(video, active_tab, in_flight),
            ]
            .spacing(24)
            .into(),
            None => placeholder("Nothing analyzed yet"),
        },
        Panel::DownloadReady => match completed {
            Some(done) => download_result(done),
            None => placeholder("Nothing downloaded yet"),
        },
    };
    page = page.push(content);

    container(
        column![page]
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(32),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::MainGradientContainer,
    )))
    .into()
}

fn placeholder(message: &'static str) -> Element<'static, Message> {
    container(
        column![text(message)
            .size(16)
            .style(iced::theme::Text::Color(theme::GRAY_500))]
        .align_items(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .into()
}
