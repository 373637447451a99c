//! Stormtrack: per-location weather mini charts from an embedded table.
//!
//! The crate takes an already-located grid of cell text (wind gusts or
//! rainfall by location and time), normalizes it into per-location time
//! series with derived statistics, and drives one mini chart per location
//! through an injected charting capability, with a shared
//! value-proportional color encoding and a periodic visual refresh.
//!
//! Module map:
//! - [`data`]: grid validation, table parsing, cross-location aggregation
//! - [`color`]: shared two-stop perceptual color scales
//! - [`chart`]: per-location chart specs, collaborator traits, visual sync
//! - [`widget`]: the builder that wires the pipeline together
//! - [`types`]: the core data model
//! - [`constants`]: palettes, layout and timing values

pub mod chart;
pub mod color;
pub mod constants;
pub mod data;
pub mod types;
pub mod widget;

pub use data::{TrackerError, TrackerResult};
pub use types::{GUST, RAINFALL, TrackerKind};
pub use widget::{Tracker, TrackerBuilder};
