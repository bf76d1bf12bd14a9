//! Items Panel (Left Sidebar)
//!
//! Displays session navigation with:
//! - Session Info section (clickable to edit)
//! - Datasets section with [+] button to store the current input

use std::collections::HashSet;

use iced::widget::{button, column, container, row, rule, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};
use uuid::Uuid;

use stat_core::session::Session;

use crate::{EditorSelection, ItemSection, Message};

/// Render the items panel (left sidebar)
pub fn view_items_panel<'a>(
    session: &'a Session,
    collapsed_sections: &'a HashSet<ItemSection>,
    selection: &'a EditorSelection,
    loaded_dataset: Option<Uuid>,
    width: f32,
) -> Element<'a, Message> {
    let mut panel_content: Column<'_, Message> = column![].spacing(2);

    // ===== Session Info Section =====
    let info_expanded = !collapsed_sections.contains(&ItemSection::SessionInfo);
    let info_selected = matches!(selection, EditorSelection::SessionInfo);
    panel_content =
        panel_content.push(view_section_header("Session Info", ItemSection::SessionInfo, info_expanded));

    if info_expanded {
        let info_content = column![
            text(format!("Analyst: {}", session.meta.analyst)).size(10),
            text(format!("Title: {}", session.meta.title)).size(10),
        ]
        .spacing(2);

        let info_btn_style = if info_selected {
            button::primary
        } else {
            button::secondary
        };
        let info_btn = button(info_content)
            .on_press(Message::SelectSessionInfo)
            .padding(Padding::from([4, 16]))
            .style(info_btn_style)
            .width(Length::Fill);

        panel_content = panel_content.push(info_btn);
    }

    panel_content = panel_content.push(rule::horizontal(1));

    // ===== Datasets Section =====
    let datasets_expanded = !collapsed_sections.contains(&ItemSection::Datasets);
    let dataset_count = session.dataset_count();

    let datasets_indicator = if datasets_expanded { "▼" } else { "▶" };
    let datasets_header_btn = button(
        row![
            text(datasets_indicator).size(10),
            Space::new().width(4),
            text(format!("Datasets ({})", dataset_count)).size(11),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleSection(ItemSection::Datasets))
    .padding(Padding::from([4, 6]))
    .style(button::text)
    .width(Length::Fill);

    let datasets_header = row![
        datasets_header_btn,
        button(text("+").size(11))
            .on_press(Message::StoreDataset)
            .padding(Padding::from([2, 6]))
            .style(button::secondary),
    ]
    .spacing(2);
    panel_content = panel_content.push(datasets_header);

    if datasets_expanded {
        let mut dataset_list: Column<'_, Message> =
            column![].spacing(2).padding(Padding::from([4, 8]));

        for (id, dataset) in session.datasets_sorted() {
            let is_loaded = loaded_dataset == Some(id);
            let style = if is_loaded {
                button::primary
            } else {
                button::secondary
            };
            let btn = button(text(&dataset.label).size(10))
                .on_press(Message::SelectDataset(id))
                .padding(Padding::from([3, 6]))
                .style(style)
                .width(Length::Fill);
            dataset_list = dataset_list.push(btn);
        }

        if dataset_count == 0 {
            dataset_list = dataset_list.push(text("(none)").size(10).color([0.5, 0.5, 0.5]));
        }

        panel_content = panel_content.push(dataset_list);
    }

    let panel = container(scrollable(panel_content.padding(4)))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4);

    panel.into()
}

/// Create a collapsible section header with expand/collapse indicator
fn view_section_header<'a>(
    title: &'a str,
    section: ItemSection,
    expanded: bool,
) -> Element<'a, Message> {
    let indicator = if expanded { "▼" } else { "▶" };

    button(
        row![
            text(indicator).size(10),
            Space::new().width(4),
            text(title).size(11),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleSection(section))
    .padding(Padding::from([4, 6]))
    .style(button::text)
    .width(Length::Fill)
    .into()
}
