//! Core types for cone detection.
//!
//! This crate is intentionally small and free of image-codec dependencies.
//! It defines the pixel-buffer views the detection pipeline operates on,
//! the HSV color machinery used for cone-color selection, and the
//! bounding-box value type every downstream consumer shares.

mod bbox;
mod color;
mod frame;
mod logger;

pub use bbox::BoundingBox;
pub use color::{rgb_to_hsv, ColorRange, ColorRangeError, Hsv, BLUE_CONES, YELLOW_CONES};
pub use frame::{FrameError, Mask, RgbFrame, RgbFrameView};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
