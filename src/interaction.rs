// THEORY:
// The `interaction` module is the engine's outward boundary. The engine hands
// the host an ordered list of clickable regions plus a stable per-region
// index; the host renders each one as an invisible anchor over the artwork
// and, on activation, navigates to the reservation destination and reports the
// click. Navigation and rendering stay entirely on the host side.
//
// Key architectural principles:
// 1.  **Stable indices**: A region's index is its position in scan order, fixed
//     at analysis time. Analytics can correlate clicks across sessions without
//     the engine persisting anything.
// 2.  **Write-only analytics**: The sink is a side channel. A failed emit is
//     logged and swallowed at this boundary; it must never affect navigation
//     or region detection, and a missing sink just means no data points.
// 3.  **One destination**: Every hotspot resolves to the same reservation
//     intake form. Which region was clicked is an analytics concern, not a
//     routing concern.

use crate::core_modules::region::DisplayRect;
use log::warn;
use serde::Serialize;

/// The reservation-intake form every hotspot resolves to.
pub const RESERVATION_INTAKE_URL: &str = "https://tally.so/r/nPxdbx";

const CLICK_EVENT_NAME: &str = "preorder_cta_click";

/// One invisible clickable region, positioned in display space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayRegion {
    /// Position of this region in scan order, carried into analytics events.
    pub index: usize,
    pub frame: DisplayRect,
}

impl OverlayRegion {
    pub fn destination(&self) -> &'static str {
        RESERVATION_INTAKE_URL
    }

    /// The analytics payload for a click on this region.
    pub fn click_event(&self, source_image: &str) -> CtaClickEvent {
        CtaClickEvent::new(source_image, self.index)
    }
}

/// Analytics payload for one hotspot activation, shaped like the page's
/// data-layer entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaClickEvent {
    pub event: &'static str,
    /// Identifier of the image the clicked region belongs to.
    pub source: String,
    /// Scan-order index of the clicked region within that image.
    pub index: usize,
}

impl CtaClickEvent {
    pub fn new(source: impl Into<String>, index: usize) -> Self {
        Self { event: CLICK_EVENT_NAME, source: source.into(), index }
    }
}

/// Write-only side channel for click analytics.
pub trait AnalyticsSink {
    fn emit(&self, event: &CtaClickEvent) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Forwards a click to the sink, swallowing failures: a broken analytics
/// backend must never break navigation.
pub fn report_click(sink: &dyn AnalyticsSink, event: &CtaClickEvent) {
    if let Err(error) = sink.emit(event) {
        warn!("analytics sink dropped {} for {:?}: {error}", event.event, event.source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        events: Mutex<Vec<CtaClickEvent>>,
    }

    impl AnalyticsSink for Recording {
        fn emit(
            &self,
            event: &CtaClickEvent,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.events.lock().expect("sink lock").push(event.clone());
            Ok(())
        }
    }

    struct Refusing;

    impl AnalyticsSink for Refusing {
        fn emit(
            &self,
            _event: &CtaClickEvent,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("collector unreachable".into())
        }
    }

    #[test]
    fn click_event_carries_image_and_scan_index() {
        let region = OverlayRegion {
            index: 2,
            frame: DisplayRect { left: 5.0, top: 3.0, width: 40.0, height: 5.0 },
        };
        assert_eq!(region.click_event("4.png"), CtaClickEvent::new("4.png", 2));
        assert_eq!(region.destination(), RESERVATION_INTAKE_URL);
    }

    #[test]
    fn event_serializes_to_the_data_layer_shape() {
        let event = CtaClickEvent::new("1.png", 0);
        let json = serde_json::to_value(&event).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "event": "preorder_cta_click",
                "source": "1.png",
                "index": 0,
            })
        );
    }

    #[test]
    fn sink_failure_is_swallowed() {
        let event = CtaClickEvent::new("5.png", 1);
        // Must return normally; the host's navigation happens regardless.
        report_click(&Refusing, &event);
    }

    #[test]
    fn working_sink_receives_the_event() {
        let sink = Recording { events: Mutex::new(Vec::new()) };
        let event = CtaClickEvent::new("8.png", 0);
        report_click(&sink, &event);
        assert_eq!(*sink.events.lock().expect("sink lock"), vec![event]);
    }
}
