//! Results Panel (Right Side)
//!
//! Shows the chart-type selector, then one of:
//! - Parse error detail (the statistic labels show "Invalid input")
//! - The chart canvas and descriptive summary for the last calculation
//! - A hint when nothing has been calculated yet

use iced::widget::{column, container, pick_list, row, scrollable, text, Canvas, Column, Space};
use iced::{Alignment, Element, Length};

use stat_core::charts::ChartKind;
use stat_core::descriptive::Summary;

use crate::{Analysis, App, Message};
use super::shared::charts::StatChart;

/// Render the results panel
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let selector = row![
        text("Chart:").size(11),
        Space::new().width(6),
        pick_list(
            &ChartKind::ALL[..],
            Some(app.chart_kind),
            Message::ChartKindSelected
        )
        .width(Length::Fixed(110.0))
        .text_size(11),
    ]
    .align_y(Alignment::Center);

    let body: Column<'_, Message> = if let Some(ref error) = app.parse_error {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error.to_string()).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(ref analysis) = app.analysis {
        view_analysis(analysis)
    } else {
        column![
            text("Enter data and press CALCULATE").size(14).color([0.5, 0.5, 0.5]),
        ]
    };

    let content = column![selector, Space::new().height(8), body];

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the chart canvas and the summary block
fn view_analysis(analysis: &Analysis) -> Column<'_, Message> {
    let canvas_widget: Element<'_, Message> =
        Canvas::new(StatChart::new(analysis.chart.clone()))
            .width(Length::Fill)
            .height(Length::Fixed(340.0))
            .into();

    let summary = &analysis.summary;

    column![
        canvas_widget,
        Space::new().height(12),
        text("Central Tendency").size(12),
        text(summary.mean_label()).size(11),
        text(summary.median_label()).size(11),
        text(summary.mode_label()).size(11),
        Space::new().height(12),
        view_spread(summary),
    ]
}

/// Render the spread figures under the chart
fn view_spread(summary: &Summary) -> Element<'_, Message> {
    let spread_value = |value: Option<f64>| match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    };

    column![
        text("Spread").size(12),
        text(format!("Count: {}", summary.count)).size(11),
        text(format!("Min: {}  Max: {}  Range: {}", summary.min, summary.max, summary.range))
            .size(11),
        text(format!("Variance: {}", spread_value(summary.variance))).size(11),
        text(format!("Std Dev: {}", spread_value(summary.std_dev))).size(11),
    ]
    .spacing(2)
    .into()
}
