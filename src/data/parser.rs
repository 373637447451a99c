//! Table parsing: a validated grid in, per-location records out.
//!
//! One pass over the series table creates the location records and folds
//! extrema and the latest-known index as each cell is consumed. A second,
//! optional pass merges the summary table's per-location totals.
//!
//! Numeric conversion never fails: non-numeric text and the "no data"
//! placeholder become `None`.

use crate::constants::NO_DATA_MARKER;
use crate::data::error::{TrackerError, TrackerResult};
use crate::data::grid::TableGrid;
use crate::types::{HeaderAxis, LocationSeries};
use std::collections::HashMap;
use tracing::debug;

/// Parse the time-series grid into one record per declared location.
///
/// `axis` selects where the location names live; the orthogonal axis
/// carries the time labels. Cell (0, 0) is the unused corner.
pub fn parse_series(grid: &TableGrid, axis: HeaderAxis) -> TrackerResult<Vec<LocationSeries>> {
    let names = header_names(grid, axis);
    if names.is_empty() || names.iter().all(|n| n.trim().is_empty()) {
        return Err(TrackerError::MalformedTable(
            "header yields zero location names".to_string(),
        ));
    }

    let mut places = new_places(&names);

    // (time slots, locations) regardless of orientation
    let (time_count, place_count) = match axis {
        HeaderAxis::Row => (grid.row_count() - 1, grid.col_count() - 1),
        HeaderAxis::Column => (grid.col_count() - 1, grid.row_count() - 1),
    };

    for t in 0..time_count {
        let time = match axis {
            HeaderAxis::Row => grid.cell(t + 1, 0),
            HeaderAxis::Column => grid.cell(0, t + 1),
        };
        for p in 0..place_count {
            let text = match axis {
                HeaderAxis::Row => grid.cell(t + 1, p + 1),
                HeaderAxis::Column => grid.cell(p + 1, t + 1),
            };
            places[p].observe(time.to_string(), parse_value(text));
        }
    }

    debug!(
        locations = places.len(),
        time_slots = time_count,
        "parsed series table"
    );

    Ok(places)
}

/// Merge the summary table (names in row 0, totals in row 1) into the
/// already-parsed records, positionally.
pub fn apply_summary(grid: &TableGrid, places: &mut [LocationSeries]) -> TrackerResult<()> {
    if grid.col_count() != places.len() {
        return Err(TrackerError::MalformedTable(format!(
            "summary table has {} columns for {} locations",
            grid.col_count(),
            places.len()
        )));
    }

    for (i, place) in places.iter_mut().enumerate() {
        let value = parse_value(grid.cell(1, i));
        if let Some(v) = value {
            if v < 0.0 {
                return Err(TrackerError::MalformedTable(format!(
                    "negative summary value {} for {}",
                    v, place.name
                )));
            }
        }
        place.secondary = value;
    }

    Ok(())
}

/// Convert cell text to a reading. Trims whitespace; the placeholder
/// marker and anything that is not a finite number become `None`.
pub fn parse_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == NO_DATA_MARKER {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Derive the DOM-anchor key from a display name: lowercased, whitespace
/// runs collapsed to single dashes.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn header_names(grid: &TableGrid, axis: HeaderAxis) -> Vec<String> {
    match axis {
        HeaderAxis::Row => grid.row(0)[1..].to_vec(),
        HeaderAxis::Column => (1..grid.row_count())
            .map(|r| grid.cell(r, 0).to_string())
            .collect(),
    }
}

/// Create the empty records, disambiguating colliding slugs with a
/// deterministic numeric suffix in encounter order.
fn new_places(names: &[String]) -> Vec<LocationSeries> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    names
        .iter()
        .map(|name| {
            let base = slugify(name);
            let n = seen.entry(base.clone()).or_insert(0);
            *n += 1;
            let slug = if *n == 1 {
                base
            } else {
                format!("{}-{}", base, n)
            };
            LocationSeries::new(name.clone(), slug)
        })
        .collect()
}
