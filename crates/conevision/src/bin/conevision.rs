use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use image::ImageReader;
use log::{info, LevelFilter};

use conevision::core::init_with_level;
use conevision::detect::{
    detect_both_annotated, detect_cones, frame_to_image, TrackConeParams, TrackCones,
};
use conevision::BoundingBox;

/// Detect track cones on a still frame via HSV filtering and contour
/// extraction.
#[derive(Parser, Debug)]
#[command(name = "conevision", version, about)]
struct Cli {
    /// Input image (PNG or JPEG).
    #[arg(long)]
    input: PathBuf,

    /// Write the frame with detection overlays here.
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file overriding the detection parameters.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override the contour-area threshold for both colors.
    #[arg(long)]
    threshold: Option<f64>,

    /// Which cone color(s) to detect.
    #[arg(long, value_enum, default_value_t = ColorArg::Both)]
    color: ColorArg,

    /// Print detections as JSON instead of plain lines.
    #[arg(long)]
    json: bool,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    Yellow,
    Blue,
    Both,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    let mut params: TrackConeParams = match &cli.params {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TrackConeParams::default(),
    };
    if let Some(threshold) = cli.threshold {
        params.yellow.min_contour_area = threshold;
        params.blue.min_contour_area = threshold;
    }

    let img = ImageReader::open(&cli.input)?.decode()?.to_rgb8();
    info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        img.width(),
        img.height()
    );

    let (cones, annotated) = match cli.color {
        ColorArg::Yellow => {
            let yellow = detect_cones(&img, &params.yellow)?;
            let cones = TrackCones {
                yellow,
                blue: Vec::new(),
            };
            (cones, None)
        }
        ColorArg::Blue => {
            let blue = detect_cones(&img, &params.blue)?;
            let cones = TrackCones {
                yellow: Vec::new(),
                blue,
            };
            (cones, None)
        }
        ColorArg::Both => {
            let (cones, annotated) = detect_both_annotated(&img, &params)?;
            (cones, Some(annotated))
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&cones)?);
    } else {
        print_boxes("yellow", &cones.yellow);
        print_boxes("blue", &cones.blue);
    }

    if let Some(output) = &cli.output {
        let annotated = match annotated {
            Some(frame) => frame,
            None => {
                // Single-color run: draw just on demand.
                let mut frame = conevision::RgbFrame {
                    width: img.width() as usize,
                    height: img.height() as usize,
                    data: img.as_raw().clone(),
                };
                for b in cones.all() {
                    conevision::cones::draw_rect(&mut frame, &b, [255, 0, 0], 2);
                }
                frame
            }
        };
        frame_to_image(&annotated).save(output)?;
        info!("wrote overlay to {}", output.display());
    }

    Ok(())
}

fn print_boxes(color: &str, boxes: &[BoundingBox]) {
    for (i, b) in boxes.iter().enumerate() {
        println!(
            "{} cone #{}: x={} y={} width={} height={}",
            color,
            i + 1,
            b.x,
            b.y,
            b.width,
            b.height
        );
    }
    if boxes.is_empty() {
        println!("no {} cones detected", color);
    }
}
