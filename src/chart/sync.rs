//! Periodic visual-state synchronization.
//!
//! The external charting library regenerates its internal plot elements on
//! its own schedule, and those regenerations lose any one-time attribute
//! adjustments. Each chart therefore gets a recurring task that re-applies
//! a decoration recomputed from the immutable series data: only the latest
//! known reading stays visible and emphasized, and clip paths are
//! suppressed so the emphasized point is not cut off at the plot edge.
//!
//! The decoration itself is a pure function, testable without any timer;
//! the runner only replays it on a fixed cadence.

use crate::chart::renderer::SharedRenderer;
use crate::constants::{POINT_RADIUS, POINT_RADIUS_LATEST};
use serde::Serialize;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Transient attributes of one rendered point
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointDecoration {
    pub opacity: f32,
    pub radius: f32,
}

/// The full per-chart decoration re-applied on every tick
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Decoration {
    /// One entry per rendered point, in series order
    pub points: Vec<PointDecoration>,
    /// Remove clip paths so the emphasized point can overflow the plot area
    pub suppress_clip: bool,
}

/// Compute the decoration for a series: the point at `latest_known` is
/// visible and emphasized, every other point is hidden. Stateless; the
/// same inputs always produce the same decoration.
pub fn decorations(len: usize, latest_known: Option<usize>) -> Decoration {
    let points = (0..len)
        .map(|i| {
            if latest_known == Some(i) {
                PointDecoration {
                    opacity: 1.0,
                    radius: POINT_RADIUS_LATEST,
                }
            } else {
                PointDecoration {
                    opacity: 0.0,
                    radius: POINT_RADIUS,
                }
            }
        })
        .collect();

    Decoration {
        points,
        suppress_clip: true,
    }
}

/// A recurring re-decoration task for one chart.
///
/// Runners share no mutable state with each other; each owns its
/// decoration and talks to the renderer through the shared handle.
/// Dropping a runner stops it.
#[derive(Debug)]
pub struct SyncRunner {
    anchor: String,
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl SyncRunner {
    /// Start re-applying `decoration` to `anchor` every `interval`.
    ///
    /// The first tick fires immediately so a freshly bound chart is never
    /// left undecorated for a full interval.
    pub fn spawn(
        anchor: String,
        decoration: Decoration,
        renderer: SharedRenderer,
        interval: Duration,
    ) -> Self {
        let (shutdown, ticks) = mpsc::channel::<()>();
        let thread_anchor = anchor.clone();

        let handle = thread::spawn(move || {
            debug!(anchor = %thread_anchor, "visual sync started");
            loop {
                if let Err(e) = renderer.lock().decorate(&thread_anchor, &decoration) {
                    warn!(anchor = %thread_anchor, error = %e, "re-decoration failed");
                }
                match ticks.recv_timeout(interval) {
                    // Sender gone or poked: the runner is being stopped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }
            }
            debug!(anchor = %thread_anchor, "visual sync stopped");
        });

        Self {
            anchor,
            shutdown: Some(shutdown),
            handle: Some(handle),
        }
    }

    /// Anchor this runner decorates
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Stop the task and wait for its final tick to finish.
    /// Safe to call more than once.
    pub fn stop(&mut self) {
        drop(self.shutdown.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SyncRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
