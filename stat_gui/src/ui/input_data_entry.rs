//! Input view for the data entry form
//!
//! Displays:
//! - Dataset label field
//! - Comma-separated data entry
//! - CALCULATE and RESET buttons
//! - The three statistic labels (mean, median, mode)
//!
//! The labels switch to "Invalid input" whenever the last calculation
//! failed to parse.

use iced::widget::{button, column, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Render the data entry form
pub fn view(app: &App) -> Column<'_, Message> {
    let editing_label = if app.loaded_dataset.is_some() {
        "Edit Dataset"
    } else {
        "Data Entry"
    };

    let data_input = text_input("Input data (comma-separated)", &app.input_value)
        .on_input(Message::InputChanged)
        .on_submit(Message::Calculate)
        .padding(8)
        .size(14);

    let calculate_btn = button(text("CALCULATE").size(14).width(Length::Fill).center())
        .on_press(Message::Calculate)
        .padding(Padding::from([8, 0]))
        .width(Length::Fill)
        .style(button::success);

    let reset_btn = button(text("RESET").size(14).width(Length::Fill).center())
        .on_press(Message::Reset)
        .padding(Padding::from([8, 0]))
        .width(Length::Fill)
        .style(button::danger);

    let (mean_label, median_label, mode_label) = app.stat_labels();

    let labels = column![
        text(mean_label).size(14),
        text(median_label).size(14),
        text(mode_label).size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    // Only show Delete for datasets stored in the session
    let action_buttons = if app.loaded_dataset.is_some() {
        row![
            button("Delete Dataset")
                .on_press(Message::DeleteSelectedDataset)
                .padding(Padding::from([6, 12])),
        ]
        .spacing(6)
    } else {
        row![].spacing(6)
    };

    column![
        text(editing_label).size(14),
        Space::new().height(8),
        labeled_input("Label:", &app.dataset_label, Message::DatasetLabelChanged),
        Space::new().height(6),
        data_input,
        Space::new().height(8),
        calculate_btn,
        Space::new().height(4),
        reset_btn,
        Space::new().height(14),
        labels,
        Space::new().height(15),
        action_buttons,
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
