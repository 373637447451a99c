//! Test helpers and builders for reducing boilerplate in tests.
//!
//! Provides grid/source fixtures plus recording doubles for the two
//! collaborator boundaries, so tests can assert exactly what the external
//! charting library and page host would have received.

use parking_lot::Mutex;
use std::sync::Arc;
use stormtrack::chart::{ChartRenderer, ChartSpec, Decoration, WidgetHost};
use stormtrack::data::{TableGrid, TrackerResult, TrackerSource};
use stormtrack::widget::WidgetModel;

// ============================================================================
// Grid fixtures
// ============================================================================

/// Build a validated grid from string literals; panics on invalid shape.
pub fn grid(cells: &[&[&str]]) -> TableGrid {
    TableGrid::from_rows(
        cells
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
    .expect("fixture grid must be well-formed")
}

/// Standard four-location gust fixture with gaps and a trailing null row.
pub fn gust_series() -> TableGrid {
    grid(&[
        &["", "Bowen", "Mackay", "Proserpine Airport", "Hamilton Island"],
        &["6am", "87", "61", "-", "120"],
        &["9am", "94", "65", "72", "131"],
        &["12pm", "102", "-", "80", "154"],
        &["3pm", "-", "-", "-", "-"],
    ])
}

/// Companion summary table for [`gust_series`].
pub fn gust_summary() -> TableGrid {
    grid(&[
        &["Bowen", "Mackay", "Proserpine Airport", "Hamilton Island"],
        &["44", "243", "-", "178"],
    ])
}

/// The standard gust source with its summary attached.
pub fn gust_source() -> TrackerSource {
    TrackerSource::located(Some(gust_series()))
        .expect("series grid is present")
        .with_summary(gust_summary())
}

// ============================================================================
// Recording collaborators
// ============================================================================

/// Renderer double that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingRenderer {
    pub bound: Vec<ChartSpec>,
    pub decorations: Vec<(String, Decoration)>,
}

impl RecordingRenderer {
    /// Number of decoration ticks recorded for one anchor
    pub fn ticks_for(&self, anchor: &str) -> usize {
        self.decorations.iter().filter(|(a, _)| a == anchor).count()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn bind(&mut self, spec: &ChartSpec) -> TrackerResult<()> {
        self.bound.push(spec.clone());
        Ok(())
    }

    fn decorate(&mut self, anchor: &str, decoration: &Decoration) -> TrackerResult<()> {
        self.decorations.push((anchor.to_string(), decoration.clone()));
        Ok(())
    }
}

/// Host double that records mounted widget models.
#[derive(Default)]
pub struct RecordingHost {
    pub mounted: Vec<WidgetModel>,
}

impl WidgetHost for RecordingHost {
    fn mount(&mut self, model: &WidgetModel) -> TrackerResult<()> {
        self.mounted.push(model.clone());
        Ok(())
    }
}

/// Wrap a collaborator in the shared handle the builder expects
pub fn shared<T>(value: T) -> Arc<Mutex<T>> {
    Arc::new(Mutex::new(value))
}
