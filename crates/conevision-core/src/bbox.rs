use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates.
///
/// `width` and `height` are strictly positive for any box produced by the
/// detector; a box carries no identity across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center pixel, integer division matching the overlay renderer.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Enclosed pixel area (`width * height`).
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_integer_halving() {
        let b = BoundingBox::new(100, 40, 21, 10);
        assert_eq!(b.center(), (110, 45));
    }

    #[test]
    fn edges_and_area() {
        let b = BoundingBox::new(3, 4, 10, 20);
        assert_eq!(b.right(), 13);
        assert_eq!(b.bottom(), 24);
        assert_eq!(b.area(), 200);
    }
}
