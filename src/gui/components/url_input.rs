//! URL input component

use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

use crate::gui::app::{url_input_id, Message};
use crate::gui::theme;

/// URL field with paste and clear buttons. Enter submits like the analyze
/// button; the error flag only switches the border styling, the message
/// itself lives in the shared error area.
pub fn url_input(value: &str, has_error: bool) -> Element<'static, Message> {
    row![
        text_input("Paste a YouTube URL here...", value)
            .id(url_input_id())
            .on_input(Message::UrlChanged)
            .on_submit(Message::AnalyzePressed)
            .padding(15)
            .width(Length::Fill)
            .style(if has_error {
                iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
            } else {
                iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
            }),
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrl)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
