//! Input view for Session Information
//!
//! Displays fields for Analyst and Title.

use iced::widget::{button, column, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use stat_core::session::SessionMetadata;

use crate::Message;

/// Render the session info editor
pub fn view(meta: &SessionMetadata) -> Column<'_, Message> {
    column![
        text("Session Information").size(14),
        Space::new().height(8),
        labeled_input("Analyst:", &meta.analyst, Message::AnalystChanged),
        labeled_input("Title:", &meta.title, Message::TitleChanged),
        Space::new().height(20),
        text("Select a dataset from the left panel,").size(11).color([0.5, 0.5, 0.5]),
        text("or return to data entry to type new values.").size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(8),
        button(text("Back to Data Entry").size(11))
            .on_press(Message::SelectDataEntry)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
    ]
    .spacing(6)
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(80.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
