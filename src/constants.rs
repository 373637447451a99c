//! Widget-wide constants.
//!
//! Centralizes magic numbers, palette colors and layout values so the two
//! tracker variants stay in sync.

use peniko::Color;

// ============================================================================
// Identity
// ============================================================================

/// Root CSS class of the generated widget; also the anchor id prefix
pub const WIDGET_CLASS: &str = "StormTracker";

// ============================================================================
// Palette
// ============================================================================

/// Line/point color for missing readings, and the no-data scale fallback
pub const COLOR_LINE: Color = Color::from_rgb8(0x99, 0x99, 0x99);

/// Gust scale, low end of the domain (teal)
pub const GUST_COLOR_MIN: Color = Color::from_rgb8(0x00, 0x75, 0x79);

/// Gust scale, high end of the domain (magenta)
pub const GUST_COLOR_MAX: Color = Color::from_rgb8(0xdf, 0x00, 0x5d);

/// Rainfall scale, low end of the domain (cyan)
pub const RAINFALL_COLOR_MIN: Color = Color::from_rgb8(0x0b, 0x72, 0x85);

/// Rainfall scale, high end of the domain (indigo)
pub const RAINFALL_COLOR_MAX: Color = Color::from_rgb8(0x42, 0x63, 0xeb);

// ============================================================================
// Chart Layout
// ============================================================================

/// Height of each per-location mini chart in pixels
pub const CHART_HEIGHT: f32 = 65.0;

/// Headroom above the curve so the latest-value label is not clipped
pub const Y_AXIS_PAD_TOP: f32 = 35.0;

/// Padding below the curve
pub const Y_AXIS_PAD_BOTTOM: f32 = 5.0;

/// Category-axis padding before the first point
pub const X_AXIS_PAD_LEFT: f32 = 1.5;

/// Category-axis padding after the last point
pub const X_AXIS_PAD_RIGHT: f32 = 2.0;

// ============================================================================
// Marker Rail
// ============================================================================

/// Horizontal position of the first time-label marker (% along the axis)
pub const MARKER_START_PCT: f32 = 6.0;

/// Horizontal position of the middle time-label marker
pub const MARKER_MIDDLE_PCT: f32 = 49.25;

/// Horizontal position of the last time-label marker
pub const MARKER_END_PCT: f32 = 92.75;

// ============================================================================
// Point Decoration
// ============================================================================

/// Radius of the emphasized latest-observation point
pub const POINT_RADIUS_LATEST: f32 = 4.0;

/// Radius of all other (hidden) points
pub const POINT_RADIUS: f32 = 2.5;

// ============================================================================
// Timing
// ============================================================================

/// Cadence of the visual re-decoration loop in milliseconds.
/// Must outrun the charting library's own re-render cadence.
pub const SYNC_INTERVAL_MS: u64 = 250;

// ============================================================================
// Parsing
// ============================================================================

/// Literal cell text denoting a missing reading
pub const NO_DATA_MARKER: &str = "-";

/// Minimum rows a source table must have (header plus one data row)
pub const MIN_GRID_ROWS: usize = 2;

/// Minimum columns a source table must have
pub const MIN_GRID_COLS: usize = 2;
