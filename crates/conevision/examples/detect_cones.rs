use std::env;
use std::path::Path;

use conevision::detect::{detect_both_annotated, frame_to_image, TrackConeParams};
use image::ImageReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "frame.png".to_string());
    let output = args.next();

    let img = ImageReader::open(Path::new(&input))?.decode()?.to_rgb8();
    let (cones, annotated) = detect_both_annotated(&img, &TrackConeParams::default())?;

    println!(
        "{}: {} yellow, {} blue",
        input,
        cones.yellow.len(),
        cones.blue.len()
    );
    for b in cones.all() {
        let (cx, cy) = b.center();
        println!(
            "  box x={} y={} w={} h={} center=({},{})",
            b.x, b.y, b.width, b.height, cx, cy
        );
    }

    if let Some(output) = output {
        frame_to_image(&annotated).save(&output)?;
        println!("wrote {}", output);
    }
    Ok(())
}
