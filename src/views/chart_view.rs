//! Chart construction for the career visualization panels.
//!
//! Each chart is an ECharts configuration built with `charming`. The option
//! JSON is what gets embedded in the exported html page, while the terminal
//! shows the same points as a short listing.

use std::fmt::Write;

use charming::{
    component::{Axis, Grid, Title},
    datatype::CompositeValue,
    element::{AxisType, JsFunction, Tooltip, Trigger},
    series::{Bar, Line},
    Chart,
};

use crate::model::chart_point::{BoxOfficePoint, RatingPoint};
use crate::panels::chart_panel::ChartHandle;
use crate::views::format::{format_currency, or_na};

pub const RATING_CHART_TITLE: &str = "Rating Progression Over Time";
pub const BOX_OFFICE_CHART_TITLE: &str = "Top Movies by Box Office";

pub const RATING_CHART_ID: &str = "rating-chart";
pub const BOX_OFFICE_CHART_ID: &str = "box-office-chart";

const RATING_MIN: f64 = 0.0;
const RATING_MAX: f64 = 10.0;

/// A drawn chart: its ECharts configuration plus the terminal listing.
#[derive(Debug)]
pub struct ActorChart {
    id: &'static str,
    title: &'static str,
    chart: Option<Chart>,
    rows: Vec<String>,
}

impl ActorChart {
    /// Line chart of rating per year, y axis fixed to 0-10.
    pub fn rating_progression(series: &[RatingPoint]) -> Self {
        let years: Vec<String> = series.iter().map(|point| or_na(point.year)).collect();
        // ECharts leaves a gap for "-"
        let ratings: Vec<CompositeValue> = series
            .iter()
            .map(|point| match point.rating {
                Some(rating) => CompositeValue::from(rating),
                None => CompositeValue::from("-"),
            })
            .collect();
        let titles: Vec<&str> = series.iter().map(|point| point.title.as_str()).collect();

        let chart = Chart::new()
            .title(Title::new().text(RATING_CHART_TITLE))
            .tooltip(
                Tooltip::new()
                    .trigger(Trigger::Item)
                    .formatter(indexed_tooltip(&titles, "'Movie: ' + titles[params.dataIndex]")),
            )
            .grid(
                Grid::new()
                    .left("3%")
                    .right("4%")
                    .bottom("3%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .name("Year")
                    .data(years),
            )
            .y_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .name("Rating (0-10)")
                    .min(RATING_MIN)
                    .max(RATING_MAX),
            )
            .series(Line::new().name("Movie Ratings").data(ratings));

        let rows = series
            .iter()
            .map(|point| {
                format!(
                    "{:>4}  {:<7} Movie: {}",
                    or_na(point.year),
                    rating_text(point.rating),
                    point.title
                )
            })
            .collect();

        Self::new(RATING_CHART_ID, RATING_CHART_TITLE, chart, rows)
    }

    /// Bar chart of the ranking. The axis shows the short labels; the tooltip
    /// carries the full title, year and rating.
    pub fn box_office_ranking(series: &[BoxOfficePoint]) -> Self {
        let labels: Vec<String> = series.iter().map(|point| point.label.clone()).collect();
        let values: Vec<f64> = series.iter().map(|point| point.box_office).collect();
        let tooltips: Vec<String> = series
            .iter()
            .map(|point| {
                format!(
                    "{}<br/>Year: {}<br/>Rating: {}",
                    point.title,
                    or_na(point.year),
                    rating_text(point.rating)
                )
            })
            .collect();
        let tooltip_refs: Vec<&str> = tooltips.iter().map(|t| t.as_str()).collect();

        let chart = Chart::new()
            .title(Title::new().text(BOX_OFFICE_CHART_TITLE))
            .tooltip(
                Tooltip::new()
                    .trigger(Trigger::Item)
                    .formatter(indexed_tooltip(&tooltip_refs, "titles[params.dataIndex]")),
            )
            .grid(
                Grid::new()
                    .left("3%")
                    .right("4%")
                    .bottom("3%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .name("Movies")
                    .data(labels),
            )
            .y_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .name("Box Office ($M)")
                    .min(0.0),
            )
            .series(Bar::new().name("Box Office ($M)").data(values));

        let rows = series
            .iter()
            .map(|point| {
                let mut row = format!(
                    "{:<18} ${:>8}  Year: {}, Rating: {}",
                    point.label,
                    format_currency(point.box_office),
                    or_na(point.year),
                    rating_text(point.rating)
                );
                if point.label != point.title {
                    let _ = write!(row, " ({})", point.title);
                }
                row
            })
            .collect();

        Self::new(BOX_OFFICE_CHART_ID, BOX_OFFICE_CHART_TITLE, chart, rows)
    }

    fn new(id: &'static str, title: &'static str, chart: Chart, rows: Vec<String>) -> Self {
        Self {
            id,
            title,
            chart: Some(chart),
            rows,
        }
    }

    /// Element id the chart is mounted on in the html page.
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn is_disposed(&self) -> bool {
        self.chart.is_none()
    }
}

impl ChartHandle for ActorChart {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        for row in &self.rows {
            let _ = writeln!(out, "  {}", row);
        }
        out
    }

    fn options(&self) -> Option<String> {
        self.chart.as_ref().map(|chart| chart.to_string())
    }

    fn dispose(&mut self) {
        log::debug!("Disposing chart {}", self.id);
        self.chart = None;
        self.rows.clear();
    }
}

fn rating_text(rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{}/10", rating),
        None => "N/A".to_string(),
    }
}

/// Tooltip that looks the text up by data index in an embedded list.
fn indexed_tooltip(entries: &[&str], expression: &str) -> JsFunction {
    // A list of strings always serializes
    let titles = serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string());
    JsFunction::new_with_args(
        "params",
        &format!("const titles = {}; return {};", titles, expression),
    )
}
