//! Outer-boundary contour extraction over a binary mask.
//!
//! Regions are 8-connected; each region contributes exactly one contour,
//! its outer boundary traced with Moore neighbor following. Nesting is
//! ignored, so holes inside a region are not reported separately.

use nalgebra::Point2;

use conevision_core::{BoundingBox, Mask};

/// Closed boundary of one foreground region, in trace order.
#[derive(Clone, Debug)]
pub struct Contour {
    pub points: Vec<Point2<i32>>,
}

// Moore neighborhood in clockwise order (y grows downward):
// W, NW, N, NE, E, SE, S, SW.
const NBR: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

fn offset_index(dx: i32, dy: i32) -> usize {
    NBR.iter()
        .position(|&(ox, oy)| ox == dx && oy == dy)
        .unwrap_or(0)
}

impl Contour {
    /// Shoelace area of the closed boundary polygon.
    ///
    /// This matches the usual contour-area convention: a filled `w x h`
    /// rectangle scores `(w - 1) * (h - 1)`, and a single pixel scores 0.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut twice: i64 = 0;
        for (a, b) in self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .take(self.points.len())
        {
            twice += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
        }
        twice.unsigned_abs() as f64 / 2.0
    }

    /// Minimal axis-aligned bounding box of the boundary points.
    pub fn bounding_rect(&self) -> BoundingBox {
        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        BoundingBox::new(
            min_x as u32,
            min_y as u32,
            (max_x - min_x + 1) as u32,
            (max_y - min_y + 1) as u32,
        )
    }
}

/// Trace the outer boundary of the region containing `(sx, sy)`.
///
/// The raster scan in [`find_contours`] guarantees the west neighbor of
/// the start pixel is background, which seeds the clockwise sweep.
fn trace_boundary(mask: &Mask, sx: i32, sy: i32) -> Vec<Point2<i32>> {
    let start = (sx, sy);
    let mut points = vec![Point2::new(sx, sy)];

    let mut p = start;
    let mut backtrack = 0usize; // W
    let mut second: Option<(i32, i32)> = None;
    let cap = 4 * mask.width * mask.height + 8;

    while points.len() <= cap {
        let mut hit = None;
        for step in 1..=8 {
            let idx = (backtrack + step) % 8;
            let q = (p.0 + NBR[idx].0, p.1 + NBR[idx].1);
            if mask.get(q.0, q.1) != 0 {
                hit = Some((q, (backtrack + step - 1) % 8));
                break;
            }
        }
        let Some((q, prev_idx)) = hit else {
            break; // isolated single pixel
        };

        match second {
            None => second = Some(q),
            Some(s) => {
                if p == start && q == s {
                    break;
                }
            }
        }

        // New backtrack: the last background cell examined, re-indexed
        // around the pixel we are stepping onto.
        let prev = (p.0 + NBR[prev_idx].0, p.1 + NBR[prev_idx].1);
        p = q;
        backtrack = offset_index(prev.0 - p.0, prev.1 - p.1);
        points.push(Point2::new(p.0, p.1));
    }

    // The trace closes on the start pixel; drop the duplicate endpoint.
    if points.len() > 1 && points.last() == points.first() {
        points.pop();
    }
    points
}

/// Find the outer contour of every 8-connected foreground region, in
/// raster order of each region's topmost-leftmost pixel.
pub fn find_contours(mask: &Mask) -> Vec<Contour> {
    let mut visited = vec![false; mask.width * mask.height];
    let mut contours = Vec::new();

    for y in 0..mask.height as i32 {
        for x in 0..mask.width as i32 {
            let at = y as usize * mask.width + x as usize;
            if visited[at] || mask.get(x, y) == 0 {
                continue;
            }

            contours.push(Contour {
                points: trace_boundary(mask, x, y),
            });

            // Flood the whole component so interior pixels and later rows
            // cannot restart a trace.
            let mut stack = vec![(x, y)];
            visited[at] = true;
            while let Some((cx, cy)) = stack.pop() {
                for &(dx, dy) in &NBR {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if mask.get(nx, ny) == 0 {
                        continue;
                    }
                    let ni = ny as usize * mask.width + nx as usize;
                    if !visited[ni] {
                        visited[ni] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }

    contours
}
