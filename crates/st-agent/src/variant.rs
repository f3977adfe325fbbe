//! Alternative-route synthesis.
//!
//! Alternatives are the primary geometry with a few points nudged off the
//! line, and distance/duration inflated by a fixed factor.  The table below
//! is the single source for how many options a request yields.

use st_core::GeoPoint;

/// Scaling applied to one variant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VariantSpec {
    pub index:           u8,
    pub duration_factor: f64,
    pub distance_factor: f64,
}

/// Primary first, then the alternatives.  Factors are never below 1.
pub const VARIANTS: [VariantSpec; 3] = [
    VariantSpec { index: 0, duration_factor: 1.0, distance_factor: 1.0  },
    VariantSpec { index: 1, duration_factor: 1.1, distance_factor: 1.05 },
    VariantSpec { index: 2, duration_factor: 1.2, distance_factor: 1.1  },
];

/// Degrees added per variant index to each perturbed coordinate.
pub const PERTURB_STEP_DEG: f64 = 0.001;

/// Every n-th interior point is perturbed.
pub const PERTURB_STRIDE: usize = 5;

/// Copy `points`, nudging interior index `i` (`1 <= i < len - 1`,
/// `i % 5 == 0`) by `0.001 × variant` degrees on both axes.
///
/// Endpoints are never moved.  Variant 0 returns an exact copy.
pub fn perturbed(points: &[GeoPoint], variant: u8) -> Vec<GeoPoint> {
    let delta = PERTURB_STEP_DEG * f64::from(variant);
    let last = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            if variant > 0 && i >= 1 && i < last && i % PERTURB_STRIDE == 0 {
                p.nudged(delta)
            } else {
                p
            }
        })
        .collect()
}
