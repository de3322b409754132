//! Completed-download panel

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::gui::app::{CompletedDownload, Message};
use crate::gui::theme;

pub fn download_result(done: &CompletedDownload) -> Element<'static, Message> {
    container(
        column![
            text("Download ready")
                .size(24)
                .style(iced::theme::Text::Color(theme::SUCCESS)),
            text(format!("Save as: {}", done.save_as))
                .size(14)
                .style(iced::theme::Text::Color(theme::GRAY_600)),
            row![
                button(text("Open in browser").size(16))
                    .on_press(Message::OpenDownloadLink)
                    .padding([12, 24])
                    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
                button(text("Start over").size(16))
                    .on_press(Message::StartOver)
                    .padding([12, 24])
                    .style(iced::theme::Button::Custom(Box::new(
                        theme::SecondaryButton
                    ))),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .align_items(Alignment::Center),
    )
    .padding(32)
    .width(Length::Fill)
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )))
    .into()
}
