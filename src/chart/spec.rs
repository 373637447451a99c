//! Per-location chart bindings.
//!
//! A [`ChartBinding`] exposes the pure functions the renderer needs (point
//! color, point label, tooltip text) and materializes them into a
//! [`ChartSpec`], the JSON-friendly configuration the external charting
//! library consumes. Nulls stay null so the renderer draws gaps, not
//! zeros, and axis bounds come from the shared global extrema so every
//! chart of a widget is visually comparable.

use crate::color::{ColorScale, GradientStop, css_hex};
use crate::constants::{
    CHART_HEIGHT, COLOR_LINE, WIDGET_CLASS, X_AXIS_PAD_LEFT, X_AXIS_PAD_RIGHT, Y_AXIS_PAD_BOTTOM,
    Y_AXIS_PAD_TOP,
};
use crate::types::{AggregateMeta, LocationSeries, TrackerKind};
use peniko::Color;
use serde::Serialize;

/// Axis configuration shared by all charts of a widget
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisSpec {
    /// Shared y bounds `[min, max]`; `None` when no location has data
    pub y_domain: Option<[f64; 2]>,
    pub y_pad_top: f32,
    pub y_pad_bottom: f32,
    pub x_pad_left: f32,
    pub x_pad_right: f32,
    /// Category labels for the time axis
    pub categories: Vec<String>,
}

/// Everything the external charting library needs for one location.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    /// DOM anchor id the chart binds to
    pub anchor: String,
    /// Series display label, e.g. "Gust"
    pub series_label: String,
    /// Curve style hint
    pub chart_type: String,
    pub height: f32,
    /// Readings in time order, `null` preserved as a gap
    pub values: Vec<Option<f64>>,
    /// CSS color per point, scale-derived or neutral for gaps
    pub point_colors: Vec<String>,
    /// Label per point; empty everywhere except the latest known reading
    pub labels: Vec<String>,
    /// Value unit for tooltips and labels
    pub unit: String,
    pub axis: AxisSpec,
    pub show_legend: bool,
    /// Cosmetic two-stop fill swatch
    pub gradient: [GradientStop; 2],
}

/// Pure view of one location against the shared metadata and scale.
pub struct ChartBinding<'a> {
    kind: &'a TrackerKind,
    place: &'a LocationSeries,
    meta: &'a AggregateMeta,
    scale: &'a ColorScale,
}

impl<'a> ChartBinding<'a> {
    pub fn new(
        kind: &'a TrackerKind,
        place: &'a LocationSeries,
        meta: &'a AggregateMeta,
        scale: &'a ColorScale,
    ) -> Self {
        Self {
            kind,
            place,
            meta,
            scale,
        }
    }

    /// Anchor id of the form `<widget>-<kind>-<slug>`
    pub fn anchor(&self) -> String {
        anchor_id(self.kind, &self.place.slug)
    }

    /// Point color: neutral for a gap, scale-derived otherwise
    pub fn point_color(&self, value: Option<f64>) -> Color {
        match value {
            Some(v) => self.scale.color_at(v),
            None => COLOR_LINE,
        }
    }

    /// Label rendered at one point: the value with its unit at the latest
    /// known reading, empty everywhere else
    pub fn point_label(&self, index: usize) -> String {
        if self.place.latest_known != Some(index) {
            return String::new();
        }
        match self.place.series.get(index).and_then(|o| o.value) {
            Some(v) => format!("{} {}", format_value(v), self.kind.unit),
            None => String::new(),
        }
    }

    /// Tooltip title: the time label for a point index
    pub fn tooltip_title(&self, index: usize) -> String {
        self.meta
            .time_axis
            .get(index)
            .cloned()
            .unwrap_or_default()
    }

    /// Tooltip value line, e.g. "87 kph"
    pub fn tooltip_value(&self, value: f64) -> String {
        format!("{} {}", format_value(value), self.kind.unit)
    }

    /// Materialize the binding into the renderer's configuration
    pub fn spec(&self) -> ChartSpec {
        let values: Vec<Option<f64>> = self.place.series.iter().map(|o| o.value).collect();
        let point_colors = values
            .iter()
            .map(|v| css_hex(self.point_color(*v)))
            .collect();
        let labels = (0..values.len()).map(|i| self.point_label(i)).collect();

        ChartSpec {
            anchor: self.anchor(),
            series_label: series_label(self.kind.kind),
            chart_type: "spline".to_string(),
            height: CHART_HEIGHT,
            values,
            point_colors,
            labels,
            unit: self.kind.unit.to_string(),
            axis: AxisSpec {
                y_domain: self
                    .meta
                    .global_primary
                    .domain()
                    .map(|(min, max)| [min, max]),
                y_pad_top: Y_AXIS_PAD_TOP,
                y_pad_bottom: Y_AXIS_PAD_BOTTOM,
                x_pad_left: X_AXIS_PAD_LEFT,
                x_pad_right: X_AXIS_PAD_RIGHT,
                categories: self.meta.time_axis.clone(),
            },
            show_legend: false,
            gradient: self.scale.gradient_stops(),
        }
    }
}

/// DOM anchor id for one location's chart
pub fn anchor_id(kind: &TrackerKind, slug: &str) -> String {
    format!("{}-{}-{}", WIDGET_CLASS, kind.kind, slug)
}

/// Format a reading for display: no trailing zeros for whole numbers
pub fn format_value(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn series_label(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
