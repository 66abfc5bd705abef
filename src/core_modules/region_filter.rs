// THEORY:
// The `RegionFilter` separates plausible button shapes from scanner noise. The
// scanner reports every connected component of marker-colored pixels, which on
// real artwork includes antialiasing slivers, stray speckles from lossy
// re-encoding, and occasionally the whole canvas. The filter keeps only the
// shapes a CTA button can actually have.
//
// Key architectural principles:
// 1.  **Shape heuristics over coordinates**: Acceptance is decided by aspect
//     ratio and relative area, never by hand-picked per-image positions. The
//     same thresholds work across every slide in the page stack, and new
//     artwork ships without code changes.
// 2.  **Wide-short-bar priors**: CTA buttons are horizontal bars. The aspect
//     floor rejects squares and verticals; the relative-area floor (a fraction
//     of the full canvas, so it scales with the raster) rejects speckles.
// 3.  **Symmetric padding**: Antialiasing shrinks the matched region relative
//     to the visible button, so each survivor is padded on all sides by a
//     fraction of the short image edge, clamped so the padded box never leaves
//     the canvas.
// 4.  **Monotone policy**: Raising either threshold can only shrink the
//     accepted set. The property tests lean on this.

use crate::core_modules::region::Rect;

/// Fraction of the short image edge used as padding around accepted boxes.
const PAD_RATIO: f64 = 0.006;

/// Keeps the boxes shaped like horizontal button bars and pads each survivor.
/// Box order is preserved; an empty input yields an empty output.
pub fn filter_regions(
    boxes: &[Rect],
    natural_width: u32,
    natural_height: u32,
    aspect_min: f64,
    min_area_ratio: f64,
) -> Vec<Rect> {
    let canvas_area = natural_width as f64 * natural_height as f64;
    let pad = (natural_width.min(natural_height) as f64 * PAD_RATIO).round() as u32;

    boxes
        .iter()
        .filter(|candidate| {
            candidate.aspect() >= aspect_min
                && candidate.area() as f64 >= min_area_ratio * canvas_area
        })
        .map(|survivor| pad_clamped(survivor, pad, natural_width, natural_height))
        .collect()
}

/// Expands a box by `pad` on all sides, clamped to the image bounds.
fn pad_clamped(rect: &Rect, pad: u32, natural_width: u32, natural_height: u32) -> Rect {
    let left = rect.left.saturating_sub(pad);
    let top = rect.top.saturating_sub(pad);
    Rect {
        left,
        top,
        width: (rect.width + pad * 2).min(natural_width - left),
        height: (rect.height + pad * 2).min(natural_height - top),
    }
}
