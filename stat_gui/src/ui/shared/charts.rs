//! Canvas drawing for statistics charts
//!
//! Renders histograms, bar graphs, and box plots from pre-computed chart
//! geometry, with dashed marker lines for mean, median, and mode and a
//! small legend identifying them.

use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use stat_core::charts::{BarGraphChart, BoxPlotChart, ChartModel, HistogramChart, Markers};

use crate::Message;

/// Canvas program that draws one chart model
pub struct StatChart {
    model: ChartModel,
}

impl StatChart {
    pub fn new(model: ChartModel) -> Self {
        Self { model }
    }
}

// Marker colors follow the traditional mean/median/mode scheme
const MEAN_COLOR: Color = Color::from_rgb(0.8, 0.2, 0.2);
const MEDIAN_COLOR: Color = Color::from_rgb(0.2, 0.6, 0.2);
const MODE_COLOR: Color = Color::from_rgb(0.2, 0.4, 0.8);

const FILL_COLOR: Color = Color::from_rgb(0.35, 0.55, 0.8);
const EDGE_COLOR: Color = Color::from_rgb(0.15, 0.25, 0.4);
const AXIS_COLOR: Color = Color::from_rgb(0.5, 0.5, 0.5);
const LABEL_COLOR: Color = Color::from_rgb(0.35, 0.35, 0.35);

/// Plot rectangle inside the chart margins
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn from_bounds(bounds: &Rectangle) -> Self {
        let margin_left = 48.0;
        let margin_right = 16.0;
        let margin_top = 34.0;
        let margin_bottom = 34.0;
        PlotArea {
            x: margin_left,
            y: margin_top,
            width: (bounds.width - margin_left - margin_right).max(1.0),
            height: (bounds.height - margin_top - margin_bottom).max(1.0),
        }
    }

    fn bottom(&self) -> f32 {
        self.y + self.height
    }

    fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Dashed stroke used for all statistic markers
fn marker_stroke(color: Color) -> Stroke<'static> {
    Stroke {
        line_dash: LineDash {
            segments: &[6.0, 4.0],
            offset: 0,
        },
        ..Stroke::default().with_color(color).with_width(2.0)
    }
}

/// The markers to draw, paired with their colors and legend names
fn marker_entries(markers: &Markers) -> Vec<(f64, Color, &'static str)> {
    let mut entries = vec![
        (markers.mean, MEAN_COLOR, "Mean"),
        (markers.median, MEDIAN_COLOR, "Median"),
    ];
    if let Some(mode) = markers.mode {
        entries.push((mode, MODE_COLOR, "Mode"));
    }
    entries
}

fn fmt_tick(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn title_text(content: &str, bounds: &Rectangle) -> Text {
    Text {
        content: content.to_string(),
        position: Point::new(bounds.width / 2.0, 8.0),
        color: LABEL_COLOR,
        size: iced::Pixels(13.0),
        align_x: iced::alignment::Horizontal::Center.into(),
        ..Text::default()
    }
}

fn axis_label(content: &str, position: Point) -> Text {
    Text {
        content: content.to_string(),
        position,
        color: LABEL_COLOR,
        size: iced::Pixels(9.0),
        align_x: iced::alignment::Horizontal::Center.into(),
        ..Text::default()
    }
}

fn tick_label(content: String, position: Point) -> Text {
    Text {
        content,
        position,
        color: AXIS_COLOR,
        size: iced::Pixels(8.0),
        ..Text::default()
    }
}

/// Draw the x and y axis lines along the plot edges
fn draw_axes(frame: &mut Frame, area: &PlotArea) {
    let x_axis = Path::line(
        Point::new(area.x, area.bottom()),
        Point::new(area.right(), area.bottom()),
    );
    frame.stroke(&x_axis, Stroke::default().with_color(AXIS_COLOR).with_width(1.0));

    let y_axis = Path::line(Point::new(area.x, area.y), Point::new(area.x, area.bottom()));
    frame.stroke(&y_axis, Stroke::default().with_color(AXIS_COLOR).with_width(1.0));
}

/// Draw the legend in the top-right corner of the plot area
fn draw_legend(frame: &mut Frame, area: &PlotArea, markers: &Markers) {
    let entries = marker_entries(markers);
    let line_len = 16.0;
    let row_height = 12.0;
    let legend_x = area.right() - 70.0;
    let legend_y = area.y + 4.0;

    for (i, (_, color, name)) in entries.iter().enumerate() {
        let y = legend_y + i as f32 * row_height;
        let dash = Path::line(
            Point::new(legend_x, y + 4.0),
            Point::new(legend_x + line_len, y + 4.0),
        );
        frame.stroke(&dash, marker_stroke(*color));

        let label = Text {
            content: name.to_string(),
            position: Point::new(legend_x + line_len + 4.0, y),
            color: *color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(label);
    }
}

/// Vertical dashed marker lines (value axis is horizontal)
fn draw_vertical_markers(
    frame: &mut Frame,
    area: &PlotArea,
    markers: &Markers,
    lo: f64,
    hi: f64,
) {
    let span = hi - lo;
    for (value, color, _) in marker_entries(markers) {
        if value < lo || value > hi || span <= 0.0 {
            continue;
        }
        let px = area.x + ((value - lo) / span) as f32 * area.width;
        let line = Path::line(Point::new(px, area.y), Point::new(px, area.bottom()));
        frame.stroke(&line, marker_stroke(color));
    }
}

/// Horizontal dashed marker lines (value axis is vertical)
fn draw_horizontal_markers(
    frame: &mut Frame,
    area: &PlotArea,
    markers: &Markers,
    lo: f64,
    hi: f64,
) {
    let span = hi - lo;
    for (value, color, _) in marker_entries(markers) {
        if value < lo || value > hi || span <= 0.0 {
            continue;
        }
        let py = area.bottom() - ((value - lo) / span) as f32 * area.height;
        let line = Path::line(Point::new(area.x, py), Point::new(area.right(), py));
        frame.stroke(&line, marker_stroke(color));
    }
}

fn draw_histogram(frame: &mut Frame, bounds: &Rectangle, chart: &HistogramChart) {
    let area = PlotArea::from_bounds(bounds);
    let (lo, hi) = chart.value_range();
    let span = hi - lo;
    let max_count = chart.max_count.max(1) as f32;

    draw_axes(frame, &area);

    // Bars between consecutive edges
    for (i, &count) in chart.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let x0 = area.x + ((chart.edges[i] - lo) / span) as f32 * area.width;
        let x1 = area.x + ((chart.edges[i + 1] - lo) / span) as f32 * area.width;
        let height = (count as f32 / max_count) * area.height;

        let bar = Path::rectangle(
            Point::new(x0, area.bottom() - height),
            Size::new(x1 - x0, height),
        );
        frame.fill(&bar, FILL_COLOR);
        frame.stroke(&bar, Stroke::default().with_color(EDGE_COLOR).with_width(1.0));
    }

    draw_vertical_markers(frame, &area, &chart.markers, lo, hi);
    draw_legend(frame, &area, &chart.markers);

    frame.fill_text(title_text("Histogram", bounds));
    frame.fill_text(axis_label(
        "Values",
        Point::new(area.x + area.width / 2.0, area.bottom() + 18.0),
    ));
    frame.fill_text(axis_label("Frequency", Point::new(area.x, area.y - 14.0)));

    // Value-axis extent and tallest-bin count
    frame.fill_text(tick_label(
        fmt_tick(lo),
        Point::new(area.x, area.bottom() + 4.0),
    ));
    frame.fill_text(tick_label(
        fmt_tick(hi),
        Point::new(area.right() - 24.0, area.bottom() + 4.0),
    ));
    frame.fill_text(tick_label(
        format!("{}", chart.max_count),
        Point::new(area.x - 14.0, area.y),
    ));
}

fn draw_bar_graph(frame: &mut Frame, bounds: &Rectangle, chart: &BarGraphChart) {
    let area = PlotArea::from_bounds(bounds);
    let lo = chart.value_min;
    let hi = chart.value_max;
    // A flat all-zero sample still needs a non-degenerate axis
    let span = if hi > lo { hi - lo } else { 1.0 };

    let y_of = |value: f64| -> f32 { area.bottom() - ((value - lo) / span) as f32 * area.height };

    draw_axes(frame, &area);

    // Zero baseline
    let baseline_y = y_of(0.0);
    let baseline = Path::line(
        Point::new(area.x, baseline_y),
        Point::new(area.right(), baseline_y),
    );
    frame.stroke(&baseline, Stroke::default().with_color(AXIS_COLOR).with_width(1.0));

    // One bar per value, rising (or hanging) from the baseline
    let n = chart.bar_count().max(1);
    let slot = area.width / n as f32;
    let inset = slot * 0.1;

    for (i, &value) in chart.values.iter().enumerate() {
        let x = area.x + i as f32 * slot + inset;
        let y = y_of(value);
        let (top, height) = if y <= baseline_y {
            (y, baseline_y - y)
        } else {
            (baseline_y, y - baseline_y)
        };

        let bar = Path::rectangle(Point::new(x, top), Size::new(slot - 2.0 * inset, height));
        frame.fill(&bar, FILL_COLOR);
        frame.stroke(&bar, Stroke::default().with_color(EDGE_COLOR).with_width(1.0));
    }

    draw_horizontal_markers(frame, &area, &chart.markers, lo, hi);
    draw_legend(frame, &area, &chart.markers);

    frame.fill_text(title_text("Bar Graph", bounds));
    frame.fill_text(axis_label(
        "Index",
        Point::new(area.x + area.width / 2.0, area.bottom() + 18.0),
    ));
    frame.fill_text(axis_label("Values", Point::new(area.x, area.y - 14.0)));

    // Index-axis extent
    frame.fill_text(tick_label(
        "0".to_string(),
        Point::new(area.x + slot / 2.0, area.bottom() + 4.0),
    ));
    if n > 1 {
        frame.fill_text(tick_label(
            format!("{}", n - 1),
            Point::new(area.right() - slot / 2.0 - 4.0, area.bottom() + 4.0),
        ));
    }
    frame.fill_text(tick_label(
        fmt_tick(hi),
        Point::new(area.x - 24.0, y_of(hi)),
    ));
    frame.fill_text(tick_label(
        fmt_tick(lo),
        Point::new(area.x - 24.0, y_of(lo) - 8.0),
    ));
}

fn draw_box_plot(frame: &mut Frame, bounds: &Rectangle, chart: &BoxPlotChart) {
    let area = PlotArea::from_bounds(bounds);
    let (range_lo, range_hi) = chart.value_range();
    let pad = if range_hi > range_lo {
        (range_hi - range_lo) * 0.08
    } else {
        1.0
    };
    let lo = range_lo - pad;
    let hi = range_hi + pad;
    let span = hi - lo;

    let y_of = |value: f64| -> f32 { area.bottom() - ((value - lo) / span) as f32 * area.height };

    draw_axes(frame, &area);

    let center_x = area.x + area.width / 2.0;
    let box_half = (area.width * 0.15).min(60.0);
    let cap_half = box_half * 0.6;

    // Whisker stems
    let lower_stem = Path::line(
        Point::new(center_x, y_of(chart.whisker_low)),
        Point::new(center_x, y_of(chart.q1)),
    );
    frame.stroke(&lower_stem, Stroke::default().with_color(EDGE_COLOR).with_width(1.5));

    let upper_stem = Path::line(
        Point::new(center_x, y_of(chart.q3)),
        Point::new(center_x, y_of(chart.whisker_high)),
    );
    frame.stroke(&upper_stem, Stroke::default().with_color(EDGE_COLOR).with_width(1.5));

    // Whisker caps
    for value in [chart.whisker_low, chart.whisker_high] {
        let cap = Path::line(
            Point::new(center_x - cap_half, y_of(value)),
            Point::new(center_x + cap_half, y_of(value)),
        );
        frame.stroke(&cap, Stroke::default().with_color(EDGE_COLOR).with_width(1.5));
    }

    // Interquartile box
    let box_top = y_of(chart.q3);
    let box_bottom = y_of(chart.q1);
    let iqr_box = Path::rectangle(
        Point::new(center_x - box_half, box_top),
        Size::new(box_half * 2.0, (box_bottom - box_top).max(1.0)),
    );
    frame.fill(&iqr_box, Color { a: 0.35, ..FILL_COLOR });
    frame.stroke(&iqr_box, Stroke::default().with_color(EDGE_COLOR).with_width(1.5));

    // Median line inside the box
    let median_line = Path::line(
        Point::new(center_x - box_half, y_of(chart.median)),
        Point::new(center_x + box_half, y_of(chart.median)),
    );
    frame.stroke(&median_line, Stroke::default().with_color(EDGE_COLOR).with_width(2.0));

    // Outliers as open circles
    for &value in &chart.outliers {
        let circle = Path::circle(Point::new(center_x, y_of(value)), 3.0);
        frame.stroke(&circle, Stroke::default().with_color(EDGE_COLOR).with_width(1.5));
    }

    draw_horizontal_markers(frame, &area, &chart.markers, lo, hi);
    draw_legend(frame, &area, &chart.markers);

    frame.fill_text(title_text("Box Plot", bounds));
    frame.fill_text(axis_label("Values", Point::new(area.x, area.y - 14.0)));

    // Quartile annotations to the right of the box
    let annotate_x = center_x + box_half + 8.0;
    for (value, name) in [
        (chart.q3, "Q3"),
        (chart.median, "Med"),
        (chart.q1, "Q1"),
    ] {
        frame.fill_text(tick_label(
            format!("{} = {}", name, fmt_tick(value)),
            Point::new(annotate_x, y_of(value) - 4.0),
        ));
    }
}

impl canvas::Program<Message> for StatChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        match &self.model {
            ChartModel::Histogram(chart) => draw_histogram(&mut frame, &bounds, chart),
            ChartModel::BarGraph(chart) => draw_bar_graph(&mut frame, &bounds, chart),
            ChartModel::BoxPlot(chart) => draw_box_plot(&mut frame, &bounds, chart),
        }

        vec![frame.into_geometry()]
    }
}
