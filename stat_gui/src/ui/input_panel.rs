//! Input Panel (Center)
//!
//! Dispatches to the appropriate editor based on EditorSelection:
//! - SessionInfo -> input_session_info
//! - DataEntry -> input_data_entry

use iced::widget::{container, scrollable, Column};
use iced::{Element, Length};

use crate::{App, EditorSelection, Message};
use super::{input_data_entry, input_session_info};

/// Render the input panel based on current selection
///
/// The `ratio` parameter determines the relative size of this panel vs the
/// results panel. A ratio of 0.5 means equal sizes.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match app.selection {
        EditorSelection::SessionInfo => input_session_info::view(&app.session.meta),
        EditorSelection::DataEntry => input_data_entry::view(app),
    };

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
