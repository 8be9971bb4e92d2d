//! HSV conversion and inclusive color ranges.
//!
//! All HSV values use the OpenCV 8-bit scaling: hue in `0..180` (degrees
//! halved), saturation and value in `0..=255`. The tuned cone ranges below
//! were calibrated against recorded track footage and are expressed in the
//! same scale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One HSV pixel in OpenCV 8-bit scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert one RGB pixel to HSV.
///
/// Standard max/min formula: value is the channel maximum, saturation is
/// `delta / max` (zero for black), hue is the six-piece formula folded into
/// `0..360` degrees and halved into `0..180`.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> Hsv {
    let r = rgb[0] as f32 / 255.0;
    let g = rgb[1] as f32 / 255.0;
    let b = rgb[2] as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: (h_deg / 2.0).round().min(179.0) as u8,
        s: (s * 255.0).round() as u8,
        v: (max * 255.0).round() as u8,
    }
}

/// Error raised when a [`ColorRange`] has `lower > upper` on any channel.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("color range channel {channel} is inverted (lower={lower} > upper={upper})")]
pub struct ColorRangeError {
    pub channel: &'static str,
    pub lower: u8,
    pub upper: u8,
}

/// Inclusive per-channel HSV bounds, `[h, s, v]` in OpenCV scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

/// Tuned bounds for the yellow track cones.
pub const YELLOW_CONES: ColorRange = ColorRange {
    lower: [15, 62, 139],
    upper: [40, 255, 255],
};

/// Tuned bounds for the blue track cones.
pub const BLUE_CONES: ColorRange = ColorRange {
    lower: [110, 91, 45],
    upper: [134, 194, 96],
};

impl ColorRange {
    /// Reject ranges where any channel has `lower > upper`.
    pub fn validate(&self) -> Result<(), ColorRangeError> {
        const CHANNELS: [&str; 3] = ["hue", "saturation", "value"];
        for (i, name) in CHANNELS.iter().enumerate() {
            if self.lower[i] > self.upper[i] {
                return Err(ColorRangeError {
                    channel: name,
                    lower: self.lower[i],
                    upper: self.upper[i],
                });
            }
        }
        Ok(())
    }

    /// Inclusive in-range test on all three channels.
    #[inline]
    pub fn contains(&self, px: Hsv) -> bool {
        px.h >= self.lower[0]
            && px.h <= self.upper[0]
            && px.s >= self.lower[1]
            && px.s <= self.upper[1]
            && px.v >= self.lower[2]
            && px.v <= self.upper[2]
    }
}
