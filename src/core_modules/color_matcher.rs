// THEORY:
// The `ColorMatcher` decides whether a sampled pixel belongs to a target color
// class. A class is described by a `ColorSpec`: one or more reference colors
// (any-of semantics) and a single per-channel tolerance shared by all of them.
//
// Key architectural principles:
// 1.  **Per-channel bound, not distance**: A sample matches a reference when
//     every channel is independently within the tolerance (a Chebyshev-style
//     cube in RGB space), never a combined Euclidean or perceptual distance.
//     Lossy re-encodes band each channel independently, so the cube absorbs
//     compression artifacts that a sphere of the same radius would clip.
//     Downstream expectations are derived from this exact metric.
// 2.  **Pure predicate**: `matches` has no side effects and no error
//     conditions; any sample is a valid input. All validation happens at
//     construction, where an empty candidate list is rejected once instead of
//     being re-checked on every one of the millions of calls a scan makes.
// 3.  **Ordered candidates**: The candidate list keeps its given order. The
//     predicate short-circuits on the first hit, so callers can lead with the
//     color they expect to dominate the artwork.

use crate::core_modules::pixel::pixel::{Rgb, Tolerance};
use serde::{Deserialize, Serialize};

/// Error returned when a `ColorSpec` is built without any reference colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a color spec needs at least one reference color")]
pub struct EmptyColorSpec;

/// One or more reference colors plus the per-channel tolerance they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    candidates: Vec<Rgb>,
    tolerance: Tolerance,
}

impl ColorSpec {
    /// Spec for a single reference color.
    pub fn single(color: Rgb, tolerance: Tolerance) -> Self {
        Self { candidates: vec![color], tolerance }
    }

    /// Spec matching any of the given reference colors.
    pub fn any_of(colors: Vec<Rgb>, tolerance: Tolerance) -> Result<Self, EmptyColorSpec> {
        if colors.is_empty() {
            return Err(EmptyColorSpec);
        }
        Ok(Self { candidates: colors, tolerance })
    }

    pub fn candidates(&self) -> &[Rgb] {
        &self.candidates
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// True iff the sample sits inside the tolerance cube of any candidate.
    pub fn matches(&self, sample: Rgb) -> bool {
        self.candidates.iter().any(|reference| {
            sample.red.abs_diff(reference.red) <= self.tolerance
                && sample.green.abs_diff(reference.green) <= self.tolerance
                && sample.blue.abs_diff(reference.blue) <= self.tolerance
        })
    }
}
