//! Core types for the tracker data model.
//!
//! This module defines the fundamental data structures produced by the
//! extraction pipeline: per-location time series, running extrema, the
//! cross-location aggregate metadata, and the compile-time variant
//! configuration that distinguishes the gust and rainfall trackers.

use crate::constants::{
    GUST_COLOR_MAX, GUST_COLOR_MIN, RAINFALL_COLOR_MAX, RAINFALL_COLOR_MIN,
};
use once_cell::sync::Lazy;
use peniko::Color;
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// Observations & Extrema
// ============================================================================

/// A single (time, value) reading for one location.
///
/// `value` is `None` for a missing or non-numeric cell; downstream
/// components treat that as a first-class "no data" case, never an error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Observation {
    /// Time label, taken verbatim from the axis-bearing row or column
    pub time: String,
    /// Parsed reading, `None` when the source cell held no number
    pub value: Option<f64>,
}

/// Running minimum/maximum over the non-null values seen so far.
///
/// Starts at infinity sentinels; a sentinel can never win a comparison
/// against real data, so folding an empty extrema into a populated one is
/// a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    /// Sentinel extrema meaning "no data seen yet"
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Fold one value into the running extrema
    pub fn observe(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Fold another extrema into this one
    pub fn merge(&mut self, other: &Extrema) {
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
    }

    /// Whether at least one real value has been observed
    pub fn has_data(&self) -> bool {
        self.min <= self.max
    }

    /// The (min, max) domain, or `None` while still at sentinels
    pub fn domain(&self) -> Option<(f64, f64)> {
        self.has_data().then_some((self.min, self.max))
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Location Series
// ============================================================================

/// The normalized record for one location column/row of the source table.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationSeries {
    /// Display label, verbatim from the header cell
    pub name: String,
    /// Lowercased dash identifier used as the DOM-anchor key
    pub slug: String,
    /// Ordered readings, one per time slot in source order
    pub series: Vec<Observation>,
    /// Running max/min over this location's non-null readings
    pub primary_extrema: Extrema,
    /// Auxiliary single value (e.g. a daily total), `None` if absent
    pub secondary: Option<f64>,
    /// Index of the last entry with a non-null value
    pub latest_known: Option<usize>,
}

impl LocationSeries {
    /// Create an empty record for a newly encountered location
    pub fn new(name: String, slug: String) -> Self {
        Self {
            name,
            slug,
            series: Vec::new(),
            primary_extrema: Extrema::new(),
            secondary: None,
            latest_known: None,
        }
    }

    /// Append one reading, updating extrema and the latest-known index
    pub fn observe(&mut self, time: String, value: Option<f64>) {
        if let Some(v) = value {
            self.primary_extrema.observe(v);
            self.latest_known = Some(self.series.len());
        }
        self.series.push(Observation { time, value });
    }

    /// Number of time slots recorded for this location
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether no time slots have been recorded
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ============================================================================
// Aggregate Metadata
// ============================================================================

/// Cross-location metadata derived from all [`LocationSeries`] in one fold.
///
/// The color scales that share these domains are built separately so the
/// aggregation stays a pure reduction.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateMeta {
    /// Canonical time labels, taken from the first location processed
    pub time_axis: Vec<String>,
    /// Max/min of all per-location primary extrema
    pub global_primary: Extrema,
    /// Max/min of all non-null secondary values
    pub global_secondary: Extrema,
}

// ============================================================================
// Variant Configuration
// ============================================================================

/// Which axis of the source table carries the location names.
///
/// The two known table shapes transpose this: the orthogonal axis always
/// carries the time labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAxis {
    /// Names in row 0, time labels down column 0
    Row,
    /// Names down column 0, time labels in row 0
    Column,
}

/// Static description of the per-location auxiliary metric
#[derive(Clone, Copy, Debug)]
pub struct SecondarySpec {
    /// Display unit, e.g. "mm"
    pub unit: &'static str,
    /// Caption shown under the value, e.g. "rainfall since midnight"
    pub context: &'static str,
}

/// Compile-time configuration of one tracker variant.
///
/// Both variants run the same pipeline; only the header orientation, value
/// semantics, palette and label formatting differ.
#[derive(Clone, Copy, Debug)]
pub struct TrackerKind {
    /// Variant key used in anchor ids, e.g. "gust"
    pub kind: &'static str,
    /// Which table axis carries the location names
    pub header_axis: HeaderAxis,
    /// Display unit for the primary series, e.g. "kph"
    pub unit: &'static str,
    /// Boundary colors of this variant's shared scales (low, high)
    pub palette: (Color, Color),
    /// Auxiliary metric configuration, `None` for variants without one
    pub secondary: Option<SecondarySpec>,
}

/// Wind-gust tracker: names across the header row, a rainfall total per
/// location in the companion summary table.
pub static GUST: TrackerKind = TrackerKind {
    kind: "gust",
    header_axis: HeaderAxis::Row,
    unit: "kph",
    palette: (GUST_COLOR_MIN, GUST_COLOR_MAX),
    secondary: Some(SecondarySpec {
        unit: "mm",
        context: "rainfall since midnight",
    }),
};

/// Rainfall tracker: names down the header column, no auxiliary metric.
pub static RAINFALL: TrackerKind = TrackerKind {
    kind: "rainfall",
    header_axis: HeaderAxis::Column,
    unit: "mm",
    palette: (RAINFALL_COLOR_MIN, RAINFALL_COLOR_MAX),
    secondary: None,
};

static KINDS: Lazy<HashMap<&'static str, &'static TrackerKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(GUST.kind, &GUST);
    m.insert(RAINFALL.kind, &RAINFALL);
    m
});

impl TrackerKind {
    /// Look up a variant by its key ("gust" or "rainfall")
    pub fn by_name(kind: &str) -> Option<&'static TrackerKind> {
        KINDS.get(kind).copied()
    }
}
