//! End-to-end helpers from `image` buffers.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use conevision_core::{BoundingBox, RgbFrame, RgbFrameView, BLUE_CONES, YELLOW_CONES};
use conevision_detect::{draw_rect, ConeDetectError, ConeDetectParams, ConeDetector};

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid RGB image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Cone(#[from] ConeDetectError),
}

/// Borrow an `image::RgbImage` as the lightweight pipeline view type.
pub fn rgb_view(img: &::image::RgbImage) -> RgbFrameView<'_> {
    RgbFrameView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Copy an RGBA buffer into an owned RGB frame, discarding alpha.
pub fn frame_from_rgba(img: &::image::RgbaImage) -> RgbFrame {
    let mut frame = RgbFrame::black(img.width() as usize, img.height() as usize);
    for (x, y, px) in img.enumerate_pixels() {
        frame.put_pixel(x as usize, y as usize, [px[0], px[1], px[2]]);
    }
    frame
}

/// Convert an owned frame back into an `image::RgbImage`, e.g. to save
/// an annotated overlay to disk.
pub fn frame_to_image(frame: &RgbFrame) -> ::image::RgbImage {
    ::image::RgbImage::from_raw(frame.width as u32, frame.height as u32, frame.data.clone())
        .unwrap_or_else(|| ::image::RgbImage::new(frame.width as u32, frame.height as u32))
}

/// Run one single-color detection pass over an `image::RgbImage`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn detect_cones(
    img: &::image::RgbImage,
    params: &ConeDetectParams,
) -> Result<Vec<BoundingBox>, DetectError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(DetectError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        });
    }
    let detector = ConeDetector::new(*params);
    Ok(detector.detect(&rgb_view(img))?)
}

/// Parameters for a dual-color (yellow + blue) detection pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrackConeParams {
    #[serde(default = "default_yellow")]
    pub yellow: ConeDetectParams,
    #[serde(default = "default_blue")]
    pub blue: ConeDetectParams,
}

fn default_yellow() -> ConeDetectParams {
    ConeDetectParams {
        color_range: YELLOW_CONES,
        ..ConeDetectParams::default()
    }
}

fn default_blue() -> ConeDetectParams {
    ConeDetectParams {
        color_range: BLUE_CONES,
        ..ConeDetectParams::default()
    }
}

impl Default for TrackConeParams {
    fn default() -> Self {
        Self {
            yellow: default_yellow(),
            blue: default_blue(),
        }
    }
}

/// Detections from a dual-color pass, one sequence per cone color.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrackCones {
    pub yellow: Vec<BoundingBox>,
    pub blue: Vec<BoundingBox>,
}

impl TrackCones {
    /// All boxes of both colors, yellow first.
    pub fn all(&self) -> Vec<BoundingBox> {
        let mut out = Vec::with_capacity(self.yellow.len() + self.blue.len());
        out.extend_from_slice(&self.yellow);
        out.extend_from_slice(&self.blue);
        out
    }
}

/// Run the yellow and blue passes over one frame.
pub fn detect_both(
    img: &::image::RgbImage,
    params: &TrackConeParams,
) -> Result<TrackCones, DetectError> {
    Ok(TrackCones {
        yellow: detect_cones(img, &params.yellow)?,
        blue: detect_cones(img, &params.blue)?,
    })
}

/// Run a dual-color pass and draw every detection on a copy of the frame.
pub fn detect_both_annotated(
    img: &::image::RgbImage,
    params: &TrackConeParams,
) -> Result<(TrackCones, RgbFrame), DetectError> {
    let cones = detect_both(img, params)?;
    let mut annotated = RgbFrame {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw().clone(),
    };
    for b in cones.all() {
        draw_rect(&mut annotated, &b, [255, 0, 0], 2);
    }
    Ok((cones, annotated))
}
