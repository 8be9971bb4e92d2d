//! Pixel-buffer types shared by the detection pipeline.
//!
//! Frames are row-major interleaved 8-bit RGB; masks are row-major
//! single-channel buffers of the same dimensions. The borrowed
//! [`RgbFrameView`] is the input type of every pipeline stage so callers
//! keep ownership of their buffers across calls.

use thiserror::Error;

/// Errors raised by frame construction and validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame dimensions must be non-zero (width={width}, height={height})")]
    EmptyFrame { width: usize, height: usize },

    #[error("invalid RGB buffer length (expected {expected} bytes, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },
}

/// Borrowed view over an interleaved 8-bit RGB buffer, row-major,
/// `len = 3 * width * height`.
#[derive(Clone, Copy, Debug)]
pub struct RgbFrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> RgbFrameView<'a> {
    /// Build a validated view over `data`.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, FrameError> {
        let view = Self {
            width,
            height,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// Check dimensions and buffer length without consuming the view.
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::EmptyFrame {
                width: self.width,
                height: self.height,
            });
        }
        let expected = 3 * self.width * self.height;
        if self.data.len() != expected {
            return Err(FrameError::InvalidBufferLength {
                expected,
                got: self.data.len(),
            });
        }
        Ok(())
    }

    /// Pixel at (x, y); the caller guarantees the coordinates are in range.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = 3 * (y * self.width + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned interleaved 8-bit RGB frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbFrame {
    /// All-black frame of the given dimensions.
    pub fn black(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; 3 * width * height],
        }
    }

    pub fn as_view(&self) -> RgbFrameView<'_> {
        RgbFrameView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.as_view().pixel(x, y)
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = 3 * (y * self.width + x);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }
}

/// Single-channel 8-bit grid. The binary pipeline stages use 0/255 with
/// 255 as foreground; the grayscale stage stores full intensities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Mask {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Value at (x, y), or 0 for out-of-bounds coordinates.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.data[y as usize * self.width + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }

    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_rejects_zero_dimensions() {
        let buf = [0u8; 12];
        let err = RgbFrameView::new(0, 4, &buf).unwrap_err();
        assert_eq!(
            err,
            FrameError::EmptyFrame {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn view_rejects_short_buffer() {
        let buf = [0u8; 11];
        let err = RgbFrameView::new(2, 2, &buf).unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidBufferLength {
                expected: 12,
                got: 11
            }
        );
    }

    #[test]
    fn put_pixel_round_trips() {
        let mut frame = RgbFrame::black(4, 3);
        frame.put_pixel(2, 1, [10, 20, 30]);
        assert_eq!(frame.pixel(2, 1), [10, 20, 30]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn mask_get_is_zero_outside_bounds() {
        let mut mask = Mask::zeros(2, 2);
        mask.set(1, 1, 255);
        assert_eq!(mask.get(1, 1), 255);
        assert_eq!(mask.get(-1, 0), 0);
        assert_eq!(mask.get(2, 0), 0);
    }
}
