// THEORY:
// The `Region` module holds the data containers produced by the spatial layer.
// A `Rect` is a detected region's bounding box in natural pixel space (the
// coordinate system of the undisplayed, full-resolution image); a
// `DisplayRect` is the same box after the `Viewport` has scaled it into
// on-screen coordinates. Both are "dumb" containers: detection logic lives in
// the scanner and filter, scaling logic lives in the viewport.
//
// Keeping the two coordinate spaces as two types means a natural-space box can
// never be handed to the renderer unscaled by accident, and the natural-space
// results stay stable across resizes while display rects are recomputed freely.

use serde::{Deserialize, Serialize};

/// An axis-aligned region in natural pixel space.
///
/// Invariants upheld by the scanner and filter: `width` and `height` are at
/// least 1 and the box lies fully inside the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// One past the rightmost column covered by the box.
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    /// One past the bottom row covered by the box.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Width over height, the shape signal the filter keys on.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// A region mapped into on-screen coordinates. Fields are fractional because
/// display scales rarely land on whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_exclusive() {
        let rect = Rect { left: 10, top: 5, width: 80, height: 10 };
        assert_eq!(rect.right(), 90);
        assert_eq!(rect.bottom(), 15);
        assert_eq!(rect.area(), 800);
    }

    #[test]
    fn aspect_is_width_over_height() {
        let bar = Rect { left: 0, top: 0, width: 80, height: 10 };
        assert_eq!(bar.aspect(), 8.0);
        let square = Rect { left: 0, top: 0, width: 10, height: 10 };
        assert_eq!(square.aspect(), 1.0);
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect { left: 0, top: 0, width: 10, height: 10 };
        let b = Rect { left: 10, top: 0, width: 10, height: 10 };
        assert!(!a.intersects(&b));
        let c = Rect { left: 9, top: 9, width: 10, height: 10 };
        assert!(a.intersects(&c));
    }
}
