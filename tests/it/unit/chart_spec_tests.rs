//! Tests for the serialized chart configuration the renderer consumes.

use serde_json::Value;
use stormtrack::chart::ChartBinding;
use stormtrack::color::ColorScale;
use stormtrack::data::{aggregate, parse_series};
use stormtrack::types::{GUST, HeaderAxis};

use crate::helpers::grid;

fn spec_json() -> Value {
    let g = grid(&[
        &["", "Bowen", "Mackay"],
        &["6am", "87", "61"],
        &["9am", "-", "65"],
        &["12pm", "94.5", "-"],
    ]);
    let places = parse_series(&g, HeaderAxis::Row).unwrap();
    let meta = aggregate(&places).unwrap();
    let scale = ColorScale::from_extrema(&meta.global_primary, GUST.palette);
    let spec = ChartBinding::new(&GUST, &places[0], &meta, &scale).spec();
    serde_json::to_value(&spec).unwrap()
}

#[test]
fn test_gaps_serialize_as_nulls() {
    let v = spec_json();
    let values = v["values"].as_array().unwrap();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], serde_json::json!(87.0));
    assert!(values[1].is_null());
}

#[test]
fn test_anchor_and_identity_fields() {
    let v = spec_json();
    assert_eq!(v["anchor"], "StormTracker-gust-bowen");
    assert_eq!(v["series_label"], "Gust");
    assert_eq!(v["chart_type"], "spline");
    assert_eq!(v["unit"], "kph");
    assert_eq!(v["show_legend"], false);
}

#[test]
fn test_axis_block_carries_shared_bounds_and_categories() {
    let v = spec_json();
    let axis = &v["axis"];
    assert_eq!(axis["y_domain"], serde_json::json!([61.0, 94.5]));
    assert_eq!(axis["categories"], serde_json::json!(["6am", "9am", "12pm"]));
    assert!(axis["y_pad_top"].as_f64().unwrap() > axis["y_pad_bottom"].as_f64().unwrap());
}

#[test]
fn test_point_colors_align_with_values() {
    let v = spec_json();
    let colors = v["point_colors"].as_array().unwrap();
    assert_eq!(colors.len(), 3);
    // Gap points get the neutral line color
    assert_eq!(colors[1], "#999999");
    assert_ne!(colors[0], "#999999");
}

#[test]
fn test_gradient_has_two_ordered_stops() {
    let v = spec_json();
    let stops = v["gradient"].as_array().unwrap();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0]["offset"], serde_json::json!(0.0));
    assert_eq!(stops[1]["offset"], serde_json::json!(1.0));
    assert!(stops[0]["color"].as_str().unwrap().starts_with('#'));
}

#[test]
fn test_labels_only_mark_latest_reading() {
    let v = spec_json();
    // Bowen's latest known reading is the 12pm row
    assert_eq!(v["labels"], serde_json::json!(["", "", "94.5 kph"]));
}
