//! Chart bindings and the collaborator boundaries they feed.
//!
//! The core never renders: it builds per-location specs, hands them to the
//! injected renderer, and keeps the rendered output decorated through the
//! sync loops.

mod renderer;
mod spec;
mod sync;

pub use renderer::*;
pub use spec::*;
pub use sync::*;
