//! Cross-location aggregation.
//!
//! A single reduction over the per-location records: the canonical time
//! axis comes from the first location, and the global extrema are folded
//! from aggregates the parser already computed, so this pass is
//! O(locations), not O(locations x time).

use crate::data::error::{TrackerError, TrackerResult};
use crate::types::{AggregateMeta, Extrema, LocationSeries};
use tracing::debug;

/// Fold all location records into the shared metadata.
///
/// All-null locations contribute sentinel extrema, which can never win a
/// comparison; if every location is all-null the global extrema stay at
/// sentinels and the color scales degrade to their no-data constant.
pub fn aggregate(places: &[LocationSeries]) -> TrackerResult<AggregateMeta> {
    let first = places
        .first()
        .ok_or_else(|| TrackerError::MalformedTable("no locations to aggregate".to_string()))?;

    let time_axis: Vec<String> = first.series.iter().map(|o| o.time.clone()).collect();

    let mut global_primary = Extrema::new();
    let mut global_secondary = Extrema::new();

    for place in places {
        global_primary.merge(&place.primary_extrema);
        if let Some(v) = place.secondary {
            global_secondary.observe(v);
        }
    }

    debug!(
        primary = ?global_primary.domain(),
        secondary = ?global_secondary.domain(),
        time_slots = time_axis.len(),
        "aggregated location records"
    );

    Ok(AggregateMeta {
        time_axis,
        global_primary,
        global_secondary,
    })
}
