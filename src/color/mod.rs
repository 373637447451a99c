//! Color scale construction shared across all charts of a widget.

mod scale;

pub use scale::*;
