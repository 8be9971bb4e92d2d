use image::{Rgb, Rgba, RgbImage, RgbaImage};

use conevision::detect::{
    detect_both, detect_both_annotated, detect_cones, frame_from_rgba, DetectError,
};
use conevision::ConeDetector;
use conevision::{BoundingBox, ConeDetectParams, TrackConeParams, BLUE_CONES, YELLOW_CONES};

// Saturated orange-yellow / dark track blue, both inside the tuned
// HSV ranges.
const CONE_YELLOW: Rgb<u8> = Rgb([220, 180, 30]);
const CONE_BLUE: Rgb<u8> = Rgb([34, 32, 70]);

fn black_frame() -> RgbImage {
    RgbImage::new(640, 480)
}

fn fill_square(img: &mut RgbImage, x0: u32, y0: u32, side: u32, color: Rgb<u8>) {
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            img.put_pixel(x, y, color);
        }
    }
}

fn yellow_params(min_area: f64) -> ConeDetectParams {
    ConeDetectParams {
        color_range: YELLOW_CONES,
        min_contour_area: min_area,
        ..ConeDetectParams::default()
    }
}

fn assert_box_close(got: &BoundingBox, want: &BoundingBox, tol: i64) {
    let d = |a: u32, b: u32| (a as i64 - b as i64).abs();
    assert!(
        d(got.x, want.x) <= tol
            && d(got.y, want.y) <= tol
            && d(got.width, want.width) <= 2 * tol
            && d(got.height, want.height) <= 2 * tol,
        "expected {:?} ~ {:?} within {} px per edge",
        got,
        want,
        tol
    );
}

#[test]
fn black_frame_has_no_detections() {
    let img = black_frame();
    let cones = detect_both(&img, &TrackConeParams::default()).unwrap();
    assert!(cones.yellow.is_empty());
    assert!(cones.blue.is_empty());
}

#[test]
fn reference_scenario_single_yellow_square() {
    // 640x480 black frame, 20x20 yellow square at (100, 100), threshold 5.
    let mut img = black_frame();
    fill_square(&mut img, 100, 100, 20, CONE_YELLOW);

    let boxes = detect_cones(&img, &yellow_params(5.0)).unwrap();
    assert_eq!(boxes.len(), 1);
    assert_box_close(&boxes[0], &BoundingBox::new(100, 100, 20, 20), 2);
}

#[test]
fn two_well_separated_squares() {
    let mut img = black_frame();
    fill_square(&mut img, 50, 60, 25, CONE_YELLOW);
    fill_square(&mut img, 500, 400, 30, CONE_YELLOW);

    let boxes = detect_cones(&img, &yellow_params(5.0)).unwrap();
    assert_eq!(boxes.len(), 2);
    assert_box_close(&boxes[0], &BoundingBox::new(50, 60, 25, 25), 2);
    assert_box_close(&boxes[1], &BoundingBox::new(500, 400, 30, 30), 2);
}

#[test]
fn raising_the_threshold_drops_the_region() {
    let mut img = black_frame();
    fill_square(&mut img, 100, 100, 20, CONE_YELLOW);
    // A 20x20 square scores roughly 355 after the opening rounds its
    // corners; bracket it from both sides.
    assert_eq!(detect_cones(&img, &yellow_params(300.0)).unwrap().len(), 1);
    assert_eq!(detect_cones(&img, &yellow_params(380.0)).unwrap().len(), 0);
    assert_eq!(detect_cones(&img, &yellow_params(500.0)).unwrap().len(), 0);
}

#[test]
fn colors_are_routed_to_their_own_sequence() {
    let mut img = black_frame();
    fill_square(&mut img, 100, 100, 20, CONE_YELLOW);
    fill_square(&mut img, 400, 300, 22, CONE_BLUE);

    let cones = detect_both(&img, &TrackConeParams::default()).unwrap();
    assert_eq!(cones.yellow.len(), 1);
    assert_eq!(cones.blue.len(), 1);
    assert_box_close(&cones.yellow[0], &BoundingBox::new(100, 100, 20, 20), 2);
    assert_box_close(&cones.blue[0], &BoundingBox::new(400, 300, 22, 22), 2);
    assert_eq!(cones.all().len(), 2);
}

#[test]
fn off_color_region_appears_in_neither_sequence() {
    let mut img = black_frame();
    // Bright green: passes binarization on intensity, but neither range.
    fill_square(&mut img, 200, 200, 30, Rgb([40, 220, 40]));

    let cones = detect_both(&img, &TrackConeParams::default()).unwrap();
    assert!(cones.yellow.is_empty());
    assert!(cones.blue.is_empty());
}

#[test]
fn detection_is_repeatable_on_the_same_image() {
    let mut img = black_frame();
    fill_square(&mut img, 100, 100, 20, CONE_YELLOW);
    let first = detect_cones(&img, &yellow_params(5.0)).unwrap();
    let second = detect_cones(&img, &yellow_params(5.0)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn annotated_overlay_does_not_change_results() {
    let mut img = black_frame();
    fill_square(&mut img, 100, 100, 20, CONE_YELLOW);

    let (cones, annotated) = detect_both_annotated(&img, &TrackConeParams::default()).unwrap();
    assert_eq!(cones.yellow.len(), 1);
    let b = &cones.yellow[0];
    assert_eq!(annotated.pixel(b.x as usize, b.y as usize), [255, 0, 0]);

    let again = detect_both(&img, &TrackConeParams::default()).unwrap();
    assert_eq!(again.yellow, cones.yellow);
}

#[test]
fn rgba_input_detects_after_alpha_is_dropped() {
    let mut img = RgbaImage::new(640, 480);
    for y in 100..120 {
        for x in 100..120 {
            img.put_pixel(x, y, Rgba([220, 180, 30, 40]));
        }
    }
    let frame = frame_from_rgba(&img);
    let boxes = ConeDetector::new(yellow_params(5.0))
        .detect(&frame.as_view())
        .unwrap();
    assert_eq!(boxes.len(), 1);
    assert_box_close(&boxes[0], &BoundingBox::new(100, 100, 20, 20), 2);
}

#[test]
fn zero_sized_image_is_rejected() {
    let img = RgbImage::new(0, 0);
    let err = detect_cones(&img, &yellow_params(5.0)).unwrap_err();
    assert!(matches!(err, DetectError::InvalidDimensions { .. }));
}
