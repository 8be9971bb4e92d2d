//! High-level facade crate for the `conevision-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the core types and the detection pipeline
//! - (feature-gated) end-to-end helpers that run the cone detector
//!   directly on `image::RgbImage` buffers
//! - (feature-gated) the `conevision` CLI binary.
//!
//! ## Quickstart
//!
//! ```no_run
//! use conevision::detect;
//! use conevision::TrackConeParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("frame.png")?.decode()?.to_rgb8();
//! let cones = detect::detect_both(&img, &TrackConeParams::default())?;
//! println!("yellow: {}, blue: {}", cones.yellow.len(), cones.blue.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `conevision::core`: frames, masks, HSV color ranges, bounding boxes.
//! - `conevision::cones`: the filter + contour pipeline, overlay drawing,
//!   and the steering-heuristic strategies.
//! - `conevision::detect` (feature `image`): end-to-end helpers from
//!   `image::RgbImage`.

pub use conevision_core as core;
pub use conevision_detect as cones;

pub use conevision_core::{
    BoundingBox, ColorRange, RgbFrame, RgbFrameView, BLUE_CONES, YELLOW_CONES,
};
pub use conevision_detect::{ConeDetectParams, ConeDetector};

#[cfg(feature = "image")]
pub mod detect;

#[cfg(feature = "image")]
pub use detect::{DetectError, TrackConeParams, TrackCones};
