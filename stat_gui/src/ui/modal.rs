//! Modal dialog component
//!
//! Provides a reusable modal overlay for the unsaved-changes prompt and
//! the update-available notice.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Types of modal dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalType {
    /// Prompt to save unsaved changes before an action
    UnsavedChanges {
        /// The action that triggered this modal (for display)
        action: PendingAction,
    },
    /// A newer release is available on GitHub
    UpdateAvailable {
        version: String,
        download_url: String,
        html_url: String,
    },
}

/// Actions that can be pending while a modal is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// User wants to create a new session
    NewSession,
    /// User wants to open an existing session
    OpenSession,
}

impl std::fmt::Display for PendingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PendingAction::NewSession => write!(f, "create a new session"),
            PendingAction::OpenSession => write!(f, "open another session"),
        }
    }
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::ModalCancel)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render a modal dialog based on its type
pub fn view_modal(modal_type: &ModalType) -> Element<'_, Message> {
    match modal_type {
        ModalType::UnsavedChanges { action } => view_unsaved_changes_modal(*action),
        ModalType::UpdateAvailable { version, .. } => view_update_available_modal(version),
    }
}

/// Render the "Save current progress?" modal
fn view_unsaved_changes_modal(action: PendingAction) -> Element<'static, Message> {
    let title = text("Save Changes?").size(18);

    let description = text(format!(
        "You have unsaved changes. Would you like to save before you {}?",
        action
    ))
    .size(12);

    let buttons = row![
        button(text("Don't Save").size(11))
            .on_press(Message::ModalDontSave)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(8),
        button(text("Cancel").size(11))
            .on_press(Message::ModalCancel)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(8),
        button(text("Save").size(11))
            .on_press(Message::ModalSave)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    modal_box(column![
        title,
        Space::new().height(12),
        description,
        Space::new().height(20),
        buttons,
    ])
}

/// Render the "Update available" modal
fn view_update_available_modal(version: &str) -> Element<'static, Message> {
    let title = text("Update Available").size(18);

    let description = text(format!(
        "Centrum {} is available. You are running {}.",
        version,
        crate::update::CURRENT_VERSION
    ))
    .size(12);

    let buttons = row![
        button(text("Later").size(11))
            .on_press(Message::ModalCancel)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(8),
        button(text("View Release").size(11))
            .on_press(Message::ModalOpenRelease)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(8),
        button(text("Download").size(11))
            .on_press(Message::ModalDownloadUpdate)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    modal_box(column![
        title,
        Space::new().height(12),
        description,
        Space::new().height(20),
        buttons,
    ])
}

/// Wrap modal content in a centered bordered box
fn modal_box(content: iced::widget::Column<'static, Message>) -> Element<'static, Message> {
    let boxed = container(content.width(Length::Fixed(400.0)))
        .padding(20)
        .style(container::bordered_box);

    container(boxed)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
