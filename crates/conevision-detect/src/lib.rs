//! Cone detector built on top of `conevision-core`.
//!
//! ## Quickstart
//!
//! ```
//! use conevision_detect::{ConeDetector, ConeDetectParams};
//! use conevision_core::{RgbFrame, YELLOW_CONES};
//!
//! let mut params = ConeDetectParams::default();
//! params.color_range = YELLOW_CONES;
//! let detector = ConeDetector::new(params);
//!
//! let frame = RgbFrame::black(640, 480);
//! let boxes = detector.detect(&frame.as_view()).unwrap();
//! assert!(boxes.is_empty());
//! ```
//!
//! Pipeline (each stage pure, no state kept between calls):
//! 1. Keep pixels whose HSV value falls inside the configured color range,
//!    zero the rest (out-of-place).
//! 2. Collapse to grayscale intensity, binarize at `> binary_threshold`
//!    (default 0, so any surviving pixel is foreground).
//! 3. Morphological opening with an elliptical structuring element to drop
//!    isolated noise pixels.
//! 4. Trace the outer boundary of every 8-connected foreground region.
//! 5. Score each boundary with the shoelace polygon area and drop regions
//!    at or below `min_contour_area`.
//! 6. Emit one axis-aligned bounding box per surviving region, in trace
//!    order.

mod annotate;
mod contour;
mod detector;
mod filter;
mod mask_ops;
mod params;
mod steering;

pub use annotate::{draw_centers, draw_dot, draw_filled_rect, draw_line, draw_rect};
pub use contour::{find_contours, Contour};
pub use detector::{ConeDetectError, ConeDetector};
pub use filter::{color_mask, filter_color};
pub use mask_ops::{binarize, dilate, erode, open, to_gray, StructuringElement};
pub use params::ConeDetectParams;
pub use steering::{
    within_tolerance, AngularVelocityLinear, SteeringEstimator, SteeringInput, SteeringReport,
    VoltageSigmoid, ZeroSteering,
};
