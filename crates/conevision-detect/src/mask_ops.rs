//! Grayscale collapse, binarization and morphological opening.

use conevision_core::{Mask, RgbFrameView};

/// Collapse an RGB frame to grayscale intensity with BT.601 luma weights.
pub fn to_gray(frame: &RgbFrameView<'_>) -> Mask {
    let mut gray = Mask::zeros(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            let [r, g, b] = frame.pixel(x, y);
            let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
            gray.set(x, y, luma.round().min(255.0) as u8);
        }
    }
    gray
}

/// Threshold to a binary mask: intensities strictly above `threshold`
/// become 255, everything else 0.
pub fn binarize(gray: &Mask, threshold: u8) -> Mask {
    let mut out = Mask::zeros(gray.width, gray.height);
    for (dst, &src) in out.data.iter_mut().zip(gray.data.iter()) {
        *dst = if src > threshold { 255 } else { 0 };
    }
    out
}

/// Elliptical structuring element (disk) as a set of pixel offsets.
#[derive(Clone, Debug)]
pub struct StructuringElement {
    offsets: Vec<(i32, i32)>,
}

impl StructuringElement {
    /// Disk of the given radius; radius 2 yields the usual 5x5 elliptical
    /// footprint (full middle rows, single-pixel tips).
    pub fn ellipse(radius: u32) -> Self {
        let r = radius as i32;
        let mut offsets = Vec::new();
        for dy in -r..=r {
            let span = if r == 0 {
                0
            } else {
                let frac = 1.0 - (dy as f64 / r as f64).powi(2);
                (r as f64 * frac.sqrt()).round() as i32
            };
            for dx in -span..=span {
                offsets.push((dx, dy));
            }
        }
        Self { offsets }
    }

    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }
}

/// Erode: a pixel stays foreground only if every kernel-covered in-bounds
/// pixel is foreground. Out-of-bounds neighbors count as foreground so
/// regions touching the frame edge do not shrink there.
pub fn erode(mask: &Mask, kernel: &StructuringElement) -> Mask {
    let mut out = Mask::zeros(mask.width, mask.height);
    let (w, h) = (mask.width as i32, mask.height as i32);
    for y in 0..h {
        for x in 0..w {
            let all_fg = kernel.offsets().iter().all(|&(dx, dy)| {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    true
                } else {
                    mask.get(nx, ny) != 0
                }
            });
            if all_fg {
                out.set(x as usize, y as usize, 255);
            }
        }
    }
    out
}

/// Dilate: a pixel becomes foreground if any kernel-covered pixel is
/// foreground. Out-of-bounds neighbors count as background.
pub fn dilate(mask: &Mask, kernel: &StructuringElement) -> Mask {
    let mut out = Mask::zeros(mask.width, mask.height);
    let (w, h) = (mask.width as i32, mask.height as i32);
    for y in 0..h {
        for x in 0..w {
            let any_fg = kernel
                .offsets()
                .iter()
                .any(|&(dx, dy)| mask.get(x + dx, y + dy) != 0);
            if any_fg {
                out.set(x as usize, y as usize, 255);
            }
        }
    }
    out
}

/// Morphological opening: erosion followed by dilation with the same
/// structuring element.
pub fn open(mask: &Mask, kernel: &StructuringElement) -> Mask {
    dilate(&erode(mask, kernel), kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conevision_core::RgbFrame;

    fn mask_with_rect(w: usize, h: usize, x0: usize, y0: usize, rw: usize, rh: usize) -> Mask {
        let mut mask = Mask::zeros(w, h);
        for y in y0..y0 + rh {
            for x in x0..x0 + rw {
                mask.set(x, y, 255);
            }
        }
        mask
    }

    #[test]
    fn luma_weights_sum_to_full_scale() {
        let mut frame = RgbFrame::black(2, 1);
        frame.put_pixel(0, 0, [255, 255, 255]);
        frame.put_pixel(1, 0, [0, 255, 0]);
        let gray = to_gray(&frame.as_view());
        assert_eq!(gray.get(0, 0), 255);
        assert_eq!(gray.get(1, 0), 150); // 0.587 * 255
    }

    #[test]
    fn binarize_is_strictly_greater_than() {
        let mut gray = Mask::zeros(3, 1);
        gray.set(0, 0, 0);
        gray.set(1, 0, 1);
        gray.set(2, 0, 200);
        let bin = binarize(&gray, 0);
        assert_eq!(bin.data, vec![0, 255, 255]);
    }

    #[test]
    fn ellipse_radius_two_matches_5x5_footprint() {
        let k = StructuringElement::ellipse(2);
        // Middle three rows are full width, tip rows are one pixel.
        assert_eq!(k.offsets().len(), 17);
        assert!(k.offsets().contains(&(0, -2)));
        assert!(k.offsets().contains(&(2, 1)));
        assert!(!k.offsets().contains(&(2, 2)));
    }

    #[test]
    fn opening_removes_isolated_pixels() {
        let mut mask = mask_with_rect(20, 20, 5, 5, 10, 10);
        mask.set(1, 1, 255); // lone noise pixel
        let opened = open(&mask, &StructuringElement::ellipse(2));
        assert_eq!(opened.get(1, 1), 0);
        assert_eq!(opened.get(10, 10), 255);
    }

    #[test]
    fn opening_preserves_large_region_extent() {
        let mask = mask_with_rect(30, 30, 8, 8, 12, 12);
        let opened = open(&mask, &StructuringElement::ellipse(2));
        // Corners get rounded but the axis-aligned extent survives.
        assert_eq!(opened.get(8, 14), 255);
        assert_eq!(opened.get(19, 14), 255);
        assert_eq!(opened.get(14, 8), 255);
        assert_eq!(opened.get(14, 19), 255);
        assert_eq!(opened.get(7, 14), 0);
    }

    #[test]
    fn edge_touching_region_survives_erosion() {
        let mask = mask_with_rect(10, 10, 0, 0, 6, 6);
        let eroded = erode(&mask, &StructuringElement::ellipse(2));
        assert_eq!(eroded.get(0, 0), 255);
        assert_eq!(eroded.get(3, 0), 255);
        assert_eq!(eroded.get(5, 5), 0);
    }
}
