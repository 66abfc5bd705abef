// Example runner for the `hotspot_vision` library: decodes an image file,
// scans it for the given CTA marker color, and prints the accepted regions as
// JSON in natural pixel space. Run with RUST_LOG=debug for stage logging.

use hotspot_vision::core_modules::color_matcher::ColorSpec;
use hotspot_vision::pipeline::{HotspotPipeline, PipelineConfig, Rgb};
use hotspot_vision::pixel_source::{FilePixelSource, PixelSource};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(hex)) = (args.next(), args.next()) else {
        eprintln!("usage: hotspot_vision <image> <#RRGGBB> [tolerance]");
        return ExitCode::FAILURE;
    };
    let color = match Rgb::from_hex(&hex) {
        Ok(color) => color,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let tolerance = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(tolerance) => tolerance,
            Err(_) => {
                eprintln!("invalid tolerance {raw:?}, expected 0-255");
                return ExitCode::FAILURE;
            }
        },
        None => 30,
    };

    let source = FilePixelSource::new(&path);
    let buffer = match source.decode().await {
        Ok(buffer) => buffer,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = HotspotPipeline::new(PipelineConfig::new(ColorSpec::single(color, tolerance)));
    let report = pipeline.analyze(&buffer);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
