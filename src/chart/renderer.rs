//! External collaborator boundaries.
//!
//! The pipeline never owns chart lifecycle or page markup: it hands a
//! serializable spec to an injected renderer and a widget model to an
//! injected host. Both capabilities are supplied at build time; their
//! absence is a constructor-time error, not an ambient global check.

use crate::chart::spec::ChartSpec;
use crate::chart::sync::Decoration;
use crate::data::TrackerResult;
use crate::widget::WidgetModel;
use parking_lot::Mutex;
use std::sync::Arc;

/// The charting library boundary. Owns everything beneath an anchor.
pub trait ChartRenderer: Send {
    /// Create (or recreate) the chart bound to `spec.anchor`
    fn bind(&mut self, spec: &ChartSpec) -> TrackerResult<()>;

    /// Re-apply transient point decoration to an already-bound chart.
    /// Called repeatedly; must be cheap and idempotent.
    fn decorate(&mut self, anchor: &str, decoration: &Decoration) -> TrackerResult<()>;
}

/// The page/templating boundary. Performs the replace-in-place swap of
/// the source element exactly once, after the pipeline has succeeded.
pub trait WidgetHost: Send {
    fn mount(&mut self, model: &WidgetModel) -> TrackerResult<()>;
}

/// Renderer handle shared between the build step and the sync loops
pub type SharedRenderer = Arc<Mutex<dyn ChartRenderer>>;

/// Host handle kept by the caller for inspection after mounting
pub type SharedHost = Arc<Mutex<dyn WidgetHost>>;
