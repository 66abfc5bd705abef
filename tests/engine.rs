// End-to-end coverage of the detection engine over synthetic artwork: decoded
// buffer in, natural-space rectangles out, using the same color specs the
// landing page ships with.

use hotspot_vision::core_modules::color_matcher::ColorSpec;
use hotspot_vision::core_modules::pixel::pixel::Rgb;
use hotspot_vision::core_modules::pixel_buffer::PixelBuffer;
use hotspot_vision::core_modules::region::Rect;
use hotspot_vision::pipeline::{HotspotPipeline, PipelineConfig};

const CYAN_MARKER: Rgb = Rgb::new(0, 255, 240); // #00FFF0
const NAVY_MARKER: Rgb = Rgb::new(0, 7, 82); // #000752
const GREEN_MARKER: Rgb = Rgb::new(0, 255, 0); // #00FF00
const PAPER: Rgb = Rgb::new(255, 255, 255);

/// Paints `blocks` over a `PAPER` canvas.
fn canvas(width: u32, height: u32, blocks: &[(Rect, Rgb)]) -> PixelBuffer {
    let mut samples = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width * height {
        samples.extend_from_slice(&[PAPER.red, PAPER.green, PAPER.blue, 255]);
    }
    for (block, color) in blocks {
        for y in block.top..block.bottom() {
            for x in block.left..block.right() {
                let base = (y as usize * width as usize + x as usize) * 4;
                samples[base] = color.red;
                samples[base + 1] = color.green;
                samples[base + 2] = color.blue;
            }
        }
    }
    PixelBuffer::new(width, height, samples).expect("well-shaped canvas")
}

#[test]
fn reference_bar_survives_the_whole_pass() {
    // 100x20, block x in [10,89] y in [5,14]: aspect 8.0, area ratio 0.04,
    // pad = round(20 * 0.006) = 0, so the final rect equals the raw box.
    let bar = Rect { left: 10, top: 5, width: 80, height: 10 };
    let buffer = canvas(100, 20, &[(bar, CYAN_MARKER)]);
    let pipeline = HotspotPipeline::new(PipelineConfig::new(ColorSpec::single(CYAN_MARKER, 0)));

    assert_eq!(pipeline.analyze(&buffer).regions, vec![bar]);
}

#[test]
fn square_marker_is_rejected_even_though_it_matches() {
    let square = Rect { left: 45, top: 5, width: 10, height: 10 };
    let buffer = canvas(100, 20, &[(square, CYAN_MARKER)]);
    let pipeline = HotspotPipeline::new(PipelineConfig::new(ColorSpec::single(CYAN_MARKER, 0)));

    assert!(pipeline.analyze(&buffer).regions.is_empty());
}

#[test]
fn two_buttons_report_in_reading_order() {
    let top_bar = Rect { left: 40, top: 100, width: 300, height: 60 };
    let bottom_bar = Rect { left: 40, top: 700, width: 300, height: 60 };
    let buffer = canvas(390, 844, &[(bottom_bar, CYAN_MARKER), (top_bar, CYAN_MARKER)]);
    let pipeline = HotspotPipeline::new(PipelineConfig::new(ColorSpec::single(CYAN_MARKER, 30)));

    let report = pipeline.analyze(&buffer);
    assert_eq!(report.regions.len(), 2);
    // pad = round(390 * 0.006) = 2 on both survivors.
    assert_eq!(report.regions[0], Rect { left: 38, top: 98, width: 304, height: 64 });
    assert_eq!(report.regions[1], Rect { left: 38, top: 698, width: 304, height: 64 });
    assert!(!report.regions[0].intersects(&report.regions[1]));
}

#[test]
fn navy_slide_uses_a_looser_aspect_floor() {
    // The #000752 slide ships with tolerance 35 and aspect_min 3.0: a 3.2:1
    // bar must pass there but fail the default floor.
    let bar = Rect { left: 100, top: 400, width: 160, height: 50 };
    let buffer = canvas(390, 844, &[(bar, NAVY_MARKER)]);

    let mut navy = PipelineConfig::new(ColorSpec::single(NAVY_MARKER, 35));
    navy.aspect_min = 3.0;
    let report = HotspotPipeline::new(navy).analyze(&buffer);
    assert_eq!(report.regions.len(), 1);

    let default_floor =
        HotspotPipeline::new(PipelineConfig::new(ColorSpec::single(NAVY_MARKER, 35)));
    assert!(default_floor.analyze(&buffer).regions.is_empty());
}

#[test]
fn any_of_spec_catches_both_marker_variants() {
    // The final slide paints one button green and one cyan; a single any-of
    // spec must find both.
    let green_bar = Rect { left: 40, top: 100, width: 300, height: 60 };
    let cyan_bar = Rect { left: 40, top: 700, width: 300, height: 60 };
    let buffer = canvas(390, 844, &[(green_bar, GREEN_MARKER), (cyan_bar, CYAN_MARKER)]);

    let spec = ColorSpec::any_of(vec![GREEN_MARKER, CYAN_MARKER], 40).expect("two candidates");
    let report = HotspotPipeline::new(PipelineConfig::new(spec)).analyze(&buffer);
    assert_eq!(report.regions.len(), 2);
    assert!(report.regions[0].top < report.regions[1].top);
}

#[test]
fn tolerance_zero_is_exact() {
    let off_by_one = Rect { left: 10, top: 5, width: 80, height: 10 };
    let buffer = canvas(100, 20, &[(off_by_one, Rgb::new(0, 255, 239))]);
    let pipeline = HotspotPipeline::new(PipelineConfig::new(ColorSpec::single(CYAN_MARKER, 0)));

    assert!(pipeline.analyze(&buffer).regions.is_empty());
}
