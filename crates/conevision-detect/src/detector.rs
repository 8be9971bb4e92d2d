use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

use conevision_core::{BoundingBox, ColorRangeError, FrameError, RgbFrame, RgbFrameView};

use crate::annotate::draw_rect;
use crate::contour::find_contours;
use crate::filter::filter_color;
use crate::mask_ops::{binarize, open, to_gray, StructuringElement};
use crate::params::ConeDetectParams;

/// Errors produced by [`ConeDetector::detect`].
#[derive(thiserror::Error, Debug)]
pub enum ConeDetectError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    ColorRange(#[from] ColorRangeError),
}

/// One-color cone detector.
///
/// Stateless between calls: `detect` is a pure function of the frame and
/// the parameters captured at construction, so one instance can be shared
/// across threads or frames freely.
#[derive(Clone, Debug)]
pub struct ConeDetector {
    params: ConeDetectParams,
    kernel: StructuringElement,
}

impl ConeDetector {
    pub fn new(params: ConeDetectParams) -> Self {
        let kernel = StructuringElement::ellipse(params.opening_radius);
        Self { params, kernel }
    }

    pub fn params(&self) -> &ConeDetectParams {
        &self.params
    }

    /// Run the full pipeline and return one bounding box per qualifying
    /// region, in contour-trace order.
    ///
    /// An all-black frame or a frame with no qualifying region returns an
    /// empty vector; only contract violations (zero dimensions, bad buffer
    /// length, inverted color range) are errors.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn detect(&self, frame: &RgbFrameView<'_>) -> Result<Vec<BoundingBox>, ConeDetectError> {
        frame.validate()?;
        self.params.color_range.validate()?;

        let filtered = filter_color(frame, &self.params.color_range);
        let gray = to_gray(&filtered.as_view());
        let binary = binarize(&gray, self.params.binary_threshold);
        let morphed = open(&binary, &self.kernel);

        let contours = find_contours(&morphed);
        let mut boxes = Vec::new();
        let mut rejected = 0usize;
        for contour in &contours {
            if contour.area() > self.params.min_contour_area {
                boxes.push(contour.bounding_rect());
            } else {
                rejected += 1;
            }
        }

        debug!(
            "detected {} cones ({} regions below area {})",
            boxes.len(),
            rejected,
            self.params.min_contour_area
        );
        Ok(boxes)
    }

    /// Like [`detect`](Self::detect), but also return a copy of the input
    /// frame with a 2-px red rectangle drawn around every detection.
    ///
    /// The annotated frame is a diagnostic side channel; `detect` never
    /// consults it and repeated calls are unaffected.
    pub fn detect_annotated(
        &self,
        frame: &RgbFrameView<'_>,
    ) -> Result<(Vec<BoundingBox>, RgbFrame), ConeDetectError> {
        let boxes = self.detect(frame)?;
        let mut annotated = RgbFrame {
            width: frame.width,
            height: frame.height,
            data: frame.data.to_vec(),
        };
        for b in &boxes {
            draw_rect(&mut annotated, b, [255, 0, 0], 2);
        }
        Ok((boxes, annotated))
    }
}
