// THEORY:
// The `pipeline` module is the final, top-level API for the detection engine.
// It encapsulates the full scan-then-filter stack into a single, easy-to-use
// interface: hand it a decoded buffer, get back the ordered list of hotspot
// rectangles for that image, in natural pixel space.
//
// The pipeline is deliberately synchronous and stateless. Suspension happens
// only upstream, at the decode boundary (`PixelSource`); once a buffer exists,
// scan, filter, and report are a single run-to-completion pass. Per-image
// lifecycle (async decode, result caching, invalidation on image swap) is the
// `session` module's job.

use crate::core_modules::color_matcher::ColorSpec;
use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::core_modules::region::Rect;
use crate::core_modules::region_filter::filter_regions;
use crate::core_modules::region_scanner::region_scanner;
use log::debug;
use serde::{Deserialize, Serialize};

// Re-export key data structures for the public API.
pub use crate::core_modules::color_matcher::EmptyColorSpec;
pub use crate::core_modules::pixel::pixel::{Rgb, Tolerance};
pub use crate::core_modules::region::DisplayRect;
pub use crate::core_modules::viewport::{DisplayScale, ViewportMapper};

/// Aspect floor encoding the wide-short-bar shape of CTA buttons.
pub const DEFAULT_ASPECT_MIN: f64 = 3.5;
/// Area floor as a fraction of the canvas (0.1%), rejecting speckles.
pub const DEFAULT_MIN_AREA_RATIO: f64 = 0.001;

fn default_aspect_min() -> f64 {
    DEFAULT_ASPECT_MIN
}

fn default_min_area_ratio() -> f64 {
    DEFAULT_MIN_AREA_RATIO
}

/// Configuration for one analysis run, allowing for tunable behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// The color class painted over CTA regions in the artwork.
    pub spec: ColorSpec,
    /// Minimum width-over-height for a region to count as a button bar.
    #[serde(default = "default_aspect_min")]
    pub aspect_min: f64,
    /// Minimum region area as a fraction of the full canvas.
    #[serde(default = "default_min_area_ratio")]
    pub min_area_ratio: f64,
}

impl PipelineConfig {
    /// A config with the default shape thresholds.
    pub fn new(spec: ColorSpec) -> Self {
        Self {
            spec,
            aspect_min: DEFAULT_ASPECT_MIN,
            min_area_ratio: DEFAULT_MIN_AREA_RATIO,
        }
    }
}

/// The primary output of one analysis run: accepted regions in scan order,
/// plus the natural canvas they are relative to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    pub natural_width: u32,
    pub natural_height: u32,
    pub regions: Vec<Rect>,
}

impl RegionReport {
    /// The degraded result installed when decode fails: the image still
    /// renders, just without interactive overlays.
    pub fn empty() -> Self {
        Self { natural_width: 0, natural_height: 0, regions: Vec::new() }
    }

    /// An unmeasured mapper for this report's natural width.
    pub fn mapper(&self) -> ViewportMapper {
        ViewportMapper::new(self.natural_width)
    }
}

/// The main, top-level struct for the detection engine.
pub struct HotspotPipeline {
    config: PipelineConfig,
}

impl HotspotPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the full pass over one decoded buffer.
    pub fn analyze(&self, buffer: &PixelBuffer) -> RegionReport {
        // Stage 1: Connected-component scan
        let raw_boxes = region_scanner::scan(buffer, &self.config.spec);
        debug!(
            "scan: {} raw component(s) in {}x{}",
            raw_boxes.len(),
            buffer.width(),
            buffer.height()
        );

        // Stage 2: Shape filtering and padding
        let regions = filter_regions(
            &raw_boxes,
            buffer.width(),
            buffer.height(),
            self.config.aspect_min,
            self.config.min_area_ratio,
        );
        debug!("filter: kept {} of {} component(s)", regions.len(), raw_boxes.len());

        RegionReport {
            natural_width: buffer.width(),
            natural_height: buffer.height(),
            regions,
        }
    }
}
