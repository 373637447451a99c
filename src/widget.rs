//! Widget assembly: the one place the pipeline stages meet.
//!
//! `TrackerBuilder::build` runs parse, aggregate and scale construction
//! synchronously to completion, then mounts the widget model, binds one
//! chart per location and starts the sync loops. Everything before the
//! mount is pure: a structural failure aborts with the page untouched.

use crate::chart::{
    ChartBinding, SharedHost, SharedRenderer, SyncRunner, anchor_id, decorations, format_value,
};
use crate::color::ColorScale;
use crate::constants::{
    MARKER_END_PCT, MARKER_MIDDLE_PCT, MARKER_START_PCT, SYNC_INTERVAL_MS, WIDGET_CLASS,
};
use crate::data::{
    TrackerError, TrackerResult, TrackerSource, aggregate, apply_summary, parse_series,
};
use crate::types::{AggregateMeta, LocationSeries, TrackerKind};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// ============================================================================
// Widget Model
// ============================================================================

/// One time-label marker on the rail above the charts
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerModel {
    /// Horizontal position as a percentage along the time axis
    pub left_pct: f32,
    pub label: String,
}

/// The auxiliary metric block shown in a location header
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SecondaryModel {
    pub value: f64,
    /// Formatted value, e.g. "243"
    pub display: String,
    /// Scale-derived CSS color for the value
    pub color: String,
    pub unit: String,
    /// Caption, e.g. "rainfall since midnight"
    pub context: String,
}

/// One location's header block and chart anchor
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlaceModel {
    pub name: String,
    pub anchor: String,
    /// Absent when the variant has no auxiliary metric or the source
    /// held no value for this location
    pub secondary: Option<SecondaryModel>,
}

/// Everything the external templater needs to build the widget markup.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WidgetModel {
    /// Root CSS class
    pub class: String,
    /// Variant key, e.g. "gust"
    pub kind: String,
    pub markers: Vec<MarkerModel>,
    pub places: Vec<PlaceModel>,
}

// ============================================================================
// Builder
// ============================================================================

/// Collects the variant and the injected capabilities, then builds the
/// widget in one synchronous pass.
pub struct TrackerBuilder {
    kind: &'static TrackerKind,
    renderer: Option<SharedRenderer>,
    host: Option<SharedHost>,
    sync_interval: Duration,
}

impl TrackerBuilder {
    pub fn new(kind: &'static TrackerKind) -> Self {
        Self {
            kind,
            renderer: None,
            host: None,
            sync_interval: Duration::from_millis(SYNC_INTERVAL_MS),
        }
    }

    /// Inject the charting capability
    pub fn renderer(mut self, renderer: SharedRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Inject the page/templating capability
    pub fn host(mut self, host: SharedHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Override the re-decoration cadence
    pub fn sync_interval(mut self, interval: Duration) -> Self {
        self.sync_interval = interval;
        self
    }

    /// Run the full pipeline and hand the results to the collaborators.
    ///
    /// Capability checks and all parsing/aggregation happen before the
    /// first host call; on any error the source markup is left untouched.
    pub fn build(self, source: &TrackerSource) -> TrackerResult<Tracker> {
        let renderer = self
            .renderer
            .ok_or(TrackerError::DependencyUnavailable("chart renderer"))?;
        let host = self
            .host
            .ok_or(TrackerError::DependencyUnavailable("widget host"))?;

        let mut places = parse_series(&source.series, self.kind.header_axis)?;
        if let Some(summary) = &source.summary {
            apply_summary(summary, &mut places)?;
        }
        let meta = aggregate(&places)?;

        let primary_scale = ColorScale::from_extrema(&meta.global_primary, self.kind.palette);
        let secondary_scale = ColorScale::from_extrema(&meta.global_secondary, self.kind.palette);

        let model = build_model(self.kind, &places, &meta, &secondary_scale);

        // First side effect; replace-in-place happens inside the host
        host.lock().mount(&model)?;

        let mut runners = Vec::with_capacity(places.len());
        for place in &places {
            let binding = ChartBinding::new(self.kind, place, &meta, &primary_scale);
            let spec = binding.spec();
            renderer.lock().bind(&spec)?;
            runners.push(SyncRunner::spawn(
                spec.anchor.clone(),
                decorations(place.len(), place.latest_known),
                Arc::clone(&renderer),
                self.sync_interval,
            ));
        }

        info!(
            kind = self.kind.kind,
            locations = places.len(),
            "tracker widget built"
        );

        Ok(Tracker {
            model,
            places,
            meta,
            runners,
        })
    }
}

// ============================================================================
// Tracker
// ============================================================================

/// A built widget: the immutable data model plus the running sync tasks.
///
/// Dropping the tracker stops every sync loop, so timers cannot outlive
/// the view that owns them.
#[derive(Debug)]
pub struct Tracker {
    model: WidgetModel,
    places: Vec<LocationSeries>,
    meta: AggregateMeta,
    runners: Vec<SyncRunner>,
}

impl Tracker {
    pub fn model(&self) -> &WidgetModel {
        &self.model
    }

    pub fn places(&self) -> &[LocationSeries] {
        &self.places
    }

    pub fn meta(&self) -> &AggregateMeta {
        &self.meta
    }

    /// Number of sync loops currently running
    pub fn running_syncs(&self) -> usize {
        self.runners.len()
    }

    /// Stop the sync loop for one chart. Returns false if no loop is
    /// running for that anchor.
    pub fn stop_chart(&mut self, anchor: &str) -> bool {
        match self.runners.iter().position(|r| r.anchor() == anchor) {
            Some(i) => {
                let mut runner = self.runners.remove(i);
                runner.stop();
                true
            }
            None => false,
        }
    }

    /// Stop every sync loop. Idempotent.
    pub fn dispose(&mut self) {
        for runner in &mut self.runners {
            runner.stop();
        }
        self.runners.clear();
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.dispose();
    }
}

// ============================================================================
// Model construction
// ============================================================================

fn build_model(
    kind: &TrackerKind,
    places: &[LocationSeries],
    meta: &AggregateMeta,
    secondary_scale: &ColorScale,
) -> WidgetModel {
    let place_models = places
        .iter()
        .map(|place| PlaceModel {
            name: place.name.clone(),
            anchor: anchor_id(kind, &place.slug),
            secondary: match (kind.secondary, place.secondary) {
                (Some(spec), Some(value)) => Some(SecondaryModel {
                    value,
                    display: format_value(value),
                    color: secondary_scale.css(value),
                    unit: spec.unit.to_string(),
                    context: spec.context.to_string(),
                }),
                _ => None,
            },
        })
        .collect();

    WidgetModel {
        class: WIDGET_CLASS.to_string(),
        kind: kind.kind.to_string(),
        markers: marker_rail(&meta.time_axis),
        places: place_models,
    }
}

/// Three markers carrying the first, middle and last time labels
fn marker_rail(axis: &[String]) -> Vec<MarkerModel> {
    vec![
        MarkerModel {
            left_pct: MARKER_START_PCT,
            label: axis.first().cloned().unwrap_or_default(),
        },
        MarkerModel {
            left_pct: MARKER_MIDDLE_PCT,
            label: axis.get(axis.len() / 2).cloned().unwrap_or_default(),
        },
        MarkerModel {
            left_pct: MARKER_END_PCT,
            label: axis.last().cloned().unwrap_or_default(),
        },
    ]
}
