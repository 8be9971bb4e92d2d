//! Diagnostic overlay drawing on owned frames.
//!
//! Everything here is best-effort rendering for a human watching the
//! debug output: coordinates are clipped to the frame, never validated.

use conevision_core::{BoundingBox, RgbFrame};

/// Draw a rectangle outline, `thickness` pixels thick, growing inward
/// from the box edge.
pub fn draw_rect(frame: &mut RgbFrame, rect: &BoundingBox, color: [u8; 3], thickness: u32) {
    for ring in 0..thickness {
        if 2 * ring >= rect.width || 2 * ring >= rect.height {
            break;
        }
        let x0 = rect.x + ring;
        let y0 = rect.y + ring;
        let x1 = rect.right() - 1 - ring;
        let y1 = rect.bottom() - 1 - ring;
        for x in x0..=x1 {
            put_clipped(frame, x as i64, y0 as i64, color);
            put_clipped(frame, x as i64, y1 as i64, color);
        }
        for y in y0..=y1 {
            put_clipped(frame, x0 as i64, y as i64, color);
            put_clipped(frame, x1 as i64, y as i64, color);
        }
    }
}

/// Fill a rectangle, clipped to the frame. Used to black out the horizon
/// and the car body before detection.
pub fn draw_filled_rect(frame: &mut RgbFrame, rect: &BoundingBox, color: [u8; 3]) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            put_clipped(frame, x as i64, y as i64, color);
        }
    }
}

/// Filled dot of the given radius.
pub fn draw_dot(frame: &mut RgbFrame, cx: i32, cy: i32, radius: i32, color: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_clipped(frame, (cx + dx) as i64, (cy + dy) as i64, color);
            }
        }
    }
}

/// One-pixel Bresenham line between two points.
pub fn draw_line(frame: &mut RgbFrame, from: (i32, i32), to: (i32, i32), color: [u8; 3]) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_clipped(frame, x as i64, y as i64, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Mark each box center with a dot and connect it to a reference point
/// (typically the car center on the hood line).
pub fn draw_centers(
    frame: &mut RgbFrame,
    boxes: &[BoundingBox],
    reference: (i32, i32),
    color: [u8; 3],
) {
    draw_dot(frame, reference.0, reference.1, 2, color);
    for b in boxes {
        let (cx, cy) = b.center();
        draw_dot(frame, cx as i32, cy as i32, 2, color);
        draw_line(frame, (cx as i32, cy as i32), reference, color);
    }
}

#[inline]
fn put_clipped(frame: &mut RgbFrame, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as usize) < frame.width && (y as usize) < frame.height {
        frame.put_pixel(x as usize, y as usize, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 3] = [255, 0, 0];

    #[test]
    fn rect_outline_has_the_requested_thickness() {
        let mut frame = RgbFrame::black(30, 30);
        draw_rect(&mut frame, &BoundingBox::new(5, 5, 10, 10), RED, 2);
        assert_eq!(frame.pixel(5, 5), RED);
        assert_eq!(frame.pixel(6, 6), RED);
        assert_eq!(frame.pixel(7, 7), [0, 0, 0]);
        assert_eq!(frame.pixel(14, 14), RED);
        assert_eq!(frame.pixel(10, 10), [0, 0, 0]);
    }

    #[test]
    fn rect_is_clipped_at_the_frame_border() {
        let mut frame = RgbFrame::black(10, 10);
        draw_rect(&mut frame, &BoundingBox::new(6, 6, 8, 8), RED, 1);
        assert_eq!(frame.pixel(6, 6), RED);
        assert_eq!(frame.pixel(9, 6), RED);
    }

    #[test]
    fn filled_rect_blacks_out_a_band() {
        let mut frame = RgbFrame {
            width: 8,
            height: 8,
            data: vec![200; 3 * 64],
        };
        draw_filled_rect(&mut frame, &BoundingBox::new(0, 0, 8, 4), [0, 0, 0]);
        assert_eq!(frame.pixel(3, 2), [0, 0, 0]);
        assert_eq!(frame.pixel(3, 4), [200, 200, 200]);
    }

    #[test]
    fn line_connects_endpoints() {
        let mut frame = RgbFrame::black(20, 20);
        draw_line(&mut frame, (2, 3), (15, 11), RED);
        assert_eq!(frame.pixel(2, 3), RED);
        assert_eq!(frame.pixel(15, 11), RED);
    }

    #[test]
    fn centers_are_dotted_and_connected() {
        let mut frame = RgbFrame::black(40, 40);
        let boxes = [BoundingBox::new(10, 10, 10, 10)];
        draw_centers(&mut frame, &boxes, (30, 30), RED);
        assert_eq!(frame.pixel(15, 15), RED); // box center
        assert_eq!(frame.pixel(30, 30), RED); // reference point
    }
}
