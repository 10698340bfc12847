//! Glycemic Load classification and gauge layout math.

use crate::model::Zone;
use serde::{Deserialize, Serialize};

/// Maps a GL rating tag to its [`Zone`].
///
/// The tag is trimmed and lowercased before matching `low`, `med` or
/// `high`. Everything else, including a missing tag, is `Unknown`; this
/// never fails.
pub fn classify_zone(rating: Option<&str>) -> Zone {
    let normalized = rating.map(|r| r.trim().to_lowercase());
    match normalized.as_deref() {
        Some("low") => Zone::Low,
        Some("med") => Zone::Medium,
        Some("high") => Zone::High,
        _ => Zone::Unknown,
    }
}

/// Position of `gl_value` on a bounded scale as a fraction in `[0, 1]`.
///
/// The value is clamped to `[scale_min, scale_max]` first, so anything out of
/// range sits on the nearest end of the scale. NaN values and degenerate
/// scales (`scale_max <= scale_min`) yield `0.0`.
pub fn gauge_position(gl_value: f64, scale_min: f64, scale_max: f64) -> f64 {
    let span = scale_max - scale_min;
    if gl_value.is_nan() || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    (gl_value.clamp(scale_min, scale_max) - scale_min) / span
}

/// A bounded scale for drawing a GL value, `0..30` by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeScale {
    pub min: f64,
    pub max: f64,
}

impl GaugeScale {
    pub const fn new(min: f64, max: f64) -> Self {
        GaugeScale { min, max }
    }

    pub fn position(&self, gl_value: f64) -> f64 {
        gauge_position(gl_value, self.min, self.max)
    }
}

impl Default for GaugeScale {
    fn default() -> Self {
        GaugeScale::new(0.0, 30.0)
    }
}

/// The nominal GL bands drawn as segments of the gauge.
///
/// Low is 0-10, Medium 10-20 and High 20-30. These only describe the
/// picture; a food's zone always comes from its rating tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlBand {
    Low,
    Medium,
    High,
}

impl GlBand {
    pub const ALL: [GlBand; 3] = [GlBand::Low, GlBand::Medium, GlBand::High];

    /// Lower and upper GL bound of the band.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            GlBand::Low => (0.0, 10.0),
            GlBand::Medium => (10.0, 20.0),
            GlBand::High => (20.0, 30.0),
        }
    }

    pub fn zone(self) -> Zone {
        match self {
            GlBand::Low => Zone::Low,
            GlBand::Medium => Zone::Medium,
            GlBand::High => Zone::High,
        }
    }

    /// The band a point on the default scale falls into; the upper edge
    /// belongs to the band above, except 30 which is still High.
    pub fn at(gl_value: f64) -> GlBand {
        if gl_value < 10.0 {
            GlBand::Low
        } else if gl_value < 20.0 {
            GlBand::Medium
        } else {
            GlBand::High
        }
    }
}
