//! HSV color filtering, the only selective stage of the pipeline.

use conevision_core::{rgb_to_hsv, ColorRange, Mask, RgbFrame, RgbFrameView};

/// Binary mask of pixels whose HSV value falls inside `range`.
pub fn color_mask(frame: &RgbFrameView<'_>, range: &ColorRange) -> Mask {
    let mut mask = Mask::zeros(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            if range.contains(rgb_to_hsv(frame.pixel(x, y))) {
                mask.set(x, y, 255);
            }
        }
    }
    mask
}

/// Out-of-place color filter: in-range pixels keep their original RGB
/// value, everything else is zeroed. Pure function of `(frame, range)`.
pub fn filter_color(frame: &RgbFrameView<'_>, range: &ColorRange) -> RgbFrame {
    let mut out = RgbFrame::black(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            let rgb = frame.pixel(x, y);
            if range.contains(rgb_to_hsv(rgb)) {
                out.put_pixel(x, y, rgb);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use conevision_core::{RgbFrame, BLUE_CONES, YELLOW_CONES};

    const CONE_YELLOW: [u8; 3] = [220, 180, 30];

    fn frame_with_square(w: usize, h: usize, x0: usize, y0: usize, side: usize) -> RgbFrame {
        let mut frame = RgbFrame::black(w, h);
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                frame.put_pixel(x, y, CONE_YELLOW);
            }
        }
        frame
    }

    #[test]
    fn keeps_in_range_pixels_and_zeroes_the_rest() {
        let mut frame = frame_with_square(8, 8, 2, 2, 3);
        frame.put_pixel(0, 0, [200, 200, 200]);

        let filtered = filter_color(&frame.as_view(), &YELLOW_CONES);
        assert_eq!(filtered.pixel(2, 2), CONE_YELLOW);
        assert_eq!(filtered.pixel(0, 0), [0, 0, 0]);
        assert_eq!(filtered.pixel(7, 7), [0, 0, 0]);
    }

    #[test]
    fn does_not_mutate_the_input() {
        let frame = frame_with_square(6, 6, 1, 1, 2);
        let before = frame.clone();
        let _ = filter_color(&frame.as_view(), &YELLOW_CONES);
        assert_eq!(frame, before);
    }

    #[test]
    fn is_idempotent() {
        let frame = frame_with_square(10, 10, 3, 3, 4);
        let once = filter_color(&frame.as_view(), &YELLOW_CONES);
        let twice = filter_color(&once.as_view(), &YELLOW_CONES);
        assert_eq!(once, twice);
    }

    #[test]
    fn mask_matches_filter_support() {
        let frame = frame_with_square(10, 10, 3, 3, 4);
        let mask = color_mask(&frame.as_view(), &YELLOW_CONES);
        assert_eq!(mask.count_foreground(), 16);
        assert_eq!(mask.get(3, 3), 255);
        assert_eq!(mask.get(0, 0), 0);
    }

    #[test]
    fn wrong_color_is_fully_rejected() {
        let frame = frame_with_square(10, 10, 3, 3, 4);
        let filtered = filter_color(&frame.as_view(), &BLUE_CONES);
        assert!(filtered.data.iter().all(|&v| v == 0));
    }
}
