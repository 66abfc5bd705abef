// THEORY:
// The `Viewport` module converts natural-pixel-space rectangles into on-screen
// coordinates. The page renders each image at whatever width the layout gives
// it, so every natural-space box must be multiplied by the ratio between the
// rendered width and the natural width before the overlay is positioned.
//
// Key architectural principles:
// 1.  **Scale is layout state, not analysis state**: The region list is
//     computed once per image and is stable across resizes; only the scale is
//     recomputed when the layout reports a new rendered width. A resize storm
//     touches a single f64, never the scanner.
// 2.  **"Unmeasured" is not "empty"**: Until the hosting container has been
//     measured there is no scale, and the mapper yields no renderable
//     rectangles. Callers must not confuse that transient state with an image
//     that genuinely has no hotspots, so the distinction is carried in the
//     type (`Option`) rather than in a sentinel value.
// 3.  **Uniform scaling**: All four fields are multiplied by the same factor.
//     The page preserves the image's aspect ratio, so one ratio derived from
//     widths is enough.

use crate::core_modules::region::{DisplayRect, Rect};

/// Ratio between an image's rendered width and its natural width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale(f64);

impl DisplayScale {
    /// Derives a scale from a layout measurement. `None` until the container
    /// has a positive measured width (and the image a nonzero natural width).
    pub fn from_widths(displayed_width: f64, natural_width: u32) -> Option<Self> {
        if natural_width == 0 || !displayed_width.is_finite() || displayed_width <= 0.0 {
            return None;
        }
        Some(Self(displayed_width / natural_width as f64))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Maps one natural-space box into display space.
    pub fn apply(self, rect: &Rect) -> DisplayRect {
        DisplayRect {
            left: rect.left as f64 * self.0,
            top: rect.top as f64 * self.0,
            width: rect.width as f64 * self.0,
            height: rect.height as f64 * self.0,
        }
    }
}

/// Tracks the measurement state of one hosted image slot.
#[derive(Debug)]
pub struct ViewportMapper {
    natural_width: u32,
    scale: Option<DisplayScale>,
}

impl ViewportMapper {
    /// A mapper for an image of the given natural width, not yet measured.
    pub fn new(natural_width: u32) -> Self {
        Self { natural_width, scale: None }
    }

    /// Called whenever layout reports a (possibly changed) rendered width.
    /// Safe to call arbitrarily often; only the scale is recomputed.
    pub fn measure(&mut self, displayed_width: f64) {
        self.scale = DisplayScale::from_widths(displayed_width, self.natural_width);
    }

    pub fn scale(&self) -> Option<DisplayScale> {
        self.scale
    }

    /// `None` while unmeasured, which is distinct from an empty region list.
    pub fn to_display(&self, rect: &Rect) -> Option<DisplayRect> {
        self.scale.map(|scale| scale.apply(rect))
    }

    /// Maps a whole region list; empty while unmeasured.
    pub fn map_all(&self, rects: &[Rect]) -> Vec<DisplayRect> {
        match self.scale {
            Some(scale) => rects.iter().map(|rect| scale.apply(rect)).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_mapper_yields_nothing() {
        let mapper = ViewportMapper::new(390);
        let rect = Rect { left: 10, top: 5, width: 80, height: 10 };
        assert!(mapper.scale().is_none());
        assert!(mapper.to_display(&rect).is_none());
        assert!(mapper.map_all(&[rect]).is_empty());
    }

    #[test]
    fn measurement_produces_a_width_ratio() {
        let mut mapper = ViewportMapper::new(780);
        mapper.measure(390.0);
        let scale = mapper.scale().expect("measured");
        assert_eq!(scale.value(), 0.5);

        let rect = Rect { left: 10, top: 6, width: 80, height: 10 };
        let display = mapper.to_display(&rect).expect("measured");
        assert_eq!(display, DisplayRect { left: 5.0, top: 3.0, width: 40.0, height: 5.0 });
    }

    #[test]
    fn remeasuring_replaces_the_scale() {
        let mut mapper = ViewportMapper::new(100);
        mapper.measure(200.0);
        mapper.measure(50.0);
        assert_eq!(mapper.scale().expect("measured").value(), 0.5);
    }

    #[test]
    fn degenerate_measurements_reset_to_unmeasured() {
        let mut mapper = ViewportMapper::new(100);
        mapper.measure(200.0);
        mapper.measure(0.0);
        assert!(mapper.scale().is_none());
        mapper.measure(f64::NAN);
        assert!(mapper.scale().is_none());
    }

    #[test]
    fn scaling_round_trips_within_rounding() {
        let rect = Rect { left: 13, top: 27, width: 301, height: 44 };
        for displayed in [97.0, 390.0, 1170.0] {
            let scale = DisplayScale::from_widths(displayed, 390).expect("positive width");
            let display = scale.apply(&rect);
            let back = Rect {
                left: (display.left / scale.value()).round() as u32,
                top: (display.top / scale.value()).round() as u32,
                width: (display.width / scale.value()).round() as u32,
                height: (display.height / scale.value()).round() as u32,
            };
            assert_eq!(back, rect);
        }
    }
}
