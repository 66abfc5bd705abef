// THEORY:
// The `session` module owns the per-image lifecycle: asynchronous decode, the
// analysis run, the atomic result swap, and teardown. One session corresponds
// to one hosted image slot on the page; independent slots hold independent
// sessions with no shared mutable state between them.
//
// Key architectural principles:
// 1.  **Generation guard**: Every load bumps a generation counter before the
//     decode starts. A decode that resolves after a newer load began (image
//     swapped, or the slot invalidated on unmount) compares generations and
//     discards its result instead of installing stale rectangles.
// 2.  **Atomic swap**: The old region list is cleared the moment a new load
//     begins, under the same lock that bumps the generation. There is no
//     window where last image's rectangles overlay the new artwork.
// 3.  **Fail open**: A failed decode installs an empty report. The image still
//     displays, just without interactive overlays; nothing propagates far
//     enough to block page rendering. A stalled decode simply never installs
//     anything; there is no timeout.
// 4.  **Results live exactly one image long**: Buffer and report are created
//     together per load and replaced together; resizes touch the viewport
//     mapper, never this state.

use crate::core_modules::viewport::ViewportMapper;
use crate::interaction::OverlayRegion;
use crate::pipeline::{HotspotPipeline, PipelineConfig, RegionReport};
use crate::pixel_source::PixelSource;
use log::{debug, warn};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct SlotState {
    generation: u64,
    report: Option<RegionReport>,
}

/// Owns the analysis lifecycle for one hosted image slot.
pub struct HotspotSession {
    pipeline: HotspotPipeline,
    state: Arc<Mutex<SlotState>>,
}

impl HotspotSession {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            pipeline: HotspotPipeline::new(config),
            state: Arc::new(Mutex::new(SlotState::default())),
        }
    }

    /// Decodes `source`, analyzes it, and installs the result, unless a newer
    /// load superseded this one while the decode was in flight. Returns the
    /// installed report, or `None` when the result was discarded as stale.
    pub async fn load<S: PixelSource>(&self, source: &S) -> Option<RegionReport> {
        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            // The outgoing image's rectangles must not survive onto the new one.
            state.report = None;
            state.generation
        };

        let report = match source.decode().await {
            Ok(buffer) => self.pipeline.analyze(&buffer),
            Err(error) => {
                warn!("decode failed for {:?}, rendering without hotspots: {error}", source.id());
                RegionReport::empty()
            }
        };

        let mut state = self.state.lock();
        if state.generation != generation {
            debug!("discarding stale analysis for {:?}", source.id());
            return None;
        }
        state.report = Some(report.clone());
        Some(report)
    }

    /// Snapshot of the current image's report, if its analysis has completed.
    pub fn report(&self) -> Option<RegionReport> {
        self.state.lock().report.clone()
    }

    /// Marks the hosted slot as gone. Any in-flight decode resolves into the
    /// void instead of a torn-down view.
    pub fn invalidate(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.report = None;
    }

    /// Display-space overlays for the interaction layer. Empty until both the
    /// analysis and the container measurement have resolved.
    pub fn overlays(&self, mapper: &ViewportMapper) -> Vec<OverlayRegion> {
        let Some(report) = self.report() else {
            return Vec::new();
        };
        let Some(scale) = mapper.scale() else {
            return Vec::new();
        };
        report
            .regions
            .iter()
            .enumerate()
            .map(|(index, rect)| OverlayRegion { index, frame: scale.apply(rect) })
            .collect()
    }
}
