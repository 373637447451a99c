//! Continuous two-stop color scales.
//!
//! A scale linearly positions a value within its numeric domain, then
//! interpolates between the boundary colors in Oklch so intermediate hues
//! keep their saturation instead of graying out through raw RGB lerp.
//! One scale instance is shared by every chart of a widget.

use crate::constants::COLOR_LINE;
use crate::types::Extrema;
use peniko::Color;
use peniko::color::{HueDirection, Oklch, Srgb};
use serde::Serialize;
use tracing::warn;

/// One stop of the cosmetic gradient swatch
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the swatch, 0.0 at the domain minimum
    pub offset: f32,
    /// CSS hex color at this stop
    pub color: String,
}

/// Deterministic mapping from a numeric domain to interpolated colors.
#[derive(Clone, Debug)]
pub struct ColorScale {
    lo: f64,
    hi: f64,
    color_lo: Color,
    color_hi: Color,
    neutral: Color,
}

impl ColorScale {
    /// Build a scale over `domain` with the given boundary colors.
    pub fn new(domain: (f64, f64), color_lo: Color, color_hi: Color) -> Self {
        Self {
            lo: domain.0,
            hi: domain.1,
            color_lo,
            color_hi,
            neutral: COLOR_LINE,
        }
    }

    /// Build a scale from folded extrema. Sentinel extrema (no data at
    /// all) produce a constant scale yielding the neutral color.
    pub fn from_extrema(extrema: &Extrema, palette: (Color, Color)) -> Self {
        if !extrema.has_data() {
            warn!("color scale over empty extrema, degrading to neutral constant");
        }
        Self::new((extrema.min, extrema.max), palette.0, palette.1)
    }

    /// Map a value to its color.
    ///
    /// Values outside the domain clamp to the nearest boundary color. A
    /// degenerate domain (`lo == hi`) yields the low color; a no-data
    /// domain yields the neutral color. Never divides by zero.
    pub fn color_at(&self, value: f64) -> Color {
        if self.lo > self.hi || !self.lo.is_finite() || !self.hi.is_finite() {
            return self.neutral;
        }
        if !value.is_finite() {
            return self.neutral;
        }
        if self.lo == self.hi {
            return self.color_lo;
        }
        let t = ((value - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0);
        mix(self.color_lo, self.color_hi, t as f32)
    }

    /// Map a value to a CSS hex string
    pub fn css(&self, value: f64) -> String {
        css_hex(self.color_at(value))
    }

    /// Two explicit stops at the domain ends, for a vertical gradient fill
    /// under a curve. Degrades with the same rules as [`Self::color_at`].
    pub fn gradient_stops(&self) -> [GradientStop; 2] {
        let (lo, hi) = if self.lo > self.hi || !self.lo.is_finite() {
            (self.neutral, self.neutral)
        } else if self.lo == self.hi {
            (self.color_lo, self.color_lo)
        } else {
            (self.color_lo, self.color_hi)
        };
        [
            GradientStop {
                offset: 0.0,
                color: css_hex(lo),
            },
            GradientStop {
                offset: 1.0,
                color: css_hex(hi),
            },
        ]
    }
}

/// Interpolate between two sRGB colors through Oklch
fn mix(lo: Color, hi: Color, t: f32) -> Color {
    let a = lo.convert::<Oklch>();
    let b = hi.convert::<Oklch>();
    a.lerp(b, t, HueDirection::Shorter).convert::<Srgb>()
}

/// Format a color as a CSS hex string (alpha dropped; the widget never
/// produces translucent scale colors)
pub fn css_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}
