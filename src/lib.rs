// THEORY:
// This file is the main entry point for the `hotspot_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the page renderer that
// hosts the overlays).
//
// The primary goal is to export the `HotspotPipeline`, the per-image
// `HotspotSession`, and their associated data structures (`PipelineConfig`,
// `RegionReport`, `OverlayRegion`, etc.) as the clean, high-level interface for
// the whole detection engine. The internal modules (`core_modules`) hold the
// scan/filter/map machinery and stay encapsulated behind that surface.

pub mod core_modules;
pub mod interaction;
pub mod pipeline;
pub mod pixel_source;
pub mod session;
