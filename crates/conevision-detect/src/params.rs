use serde::{Deserialize, Serialize};

use conevision_core::{ColorRange, YELLOW_CONES};

/// Parameters for one cone-detection pass.
///
/// One detector instance handles one color; run two instances (or two
/// passes) to detect yellow and blue cones on the same frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConeDetectParams {
    /// Inclusive HSV bounds selecting the cone color.
    #[serde(default = "default_color_range")]
    pub color_range: ColorRange,

    /// Keep only regions whose contour area strictly exceeds this.
    ///
    /// 5.0 is the track-tested default; 35.0 is a known stricter tuning
    /// that suppresses distant cones and tape fragments.
    #[serde(default = "default_min_contour_area")]
    pub min_contour_area: f64,

    /// Grayscale intensities strictly above this become foreground.
    ///
    /// The source pipeline binarizes at 0, so after color filtering any
    /// non-black pixel survives. Kept adjustable but defaulting to the
    /// observed behavior.
    #[serde(default)]
    pub binary_threshold: u8,

    /// Radius of the elliptical structuring element used for the opening.
    /// Radius 2 gives the 5x5 footprint the pipeline was tuned with.
    #[serde(default = "default_opening_radius")]
    pub opening_radius: u32,
}

fn default_color_range() -> ColorRange {
    YELLOW_CONES
}

fn default_min_contour_area() -> f64 {
    5.0
}

fn default_opening_radius() -> u32 {
    2
}

impl Default for ConeDetectParams {
    fn default() -> Self {
        Self {
            color_range: default_color_range(),
            min_contour_area: default_min_contour_area(),
            binary_threshold: 0,
            opening_radius: default_opening_radius(),
        }
    }
}
