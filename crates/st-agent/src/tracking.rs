//! Position along a route during a journey.

use st_core::GeoPoint;

use crate::option::RouteOption;

/// Geometry point reached at `progress` percent.
///
/// Progress is clamped to `[0, 100]`; the index is
/// `floor(progress / 100 × (n − 1))`.  `None` for an empty geometry.
pub fn position_at(geometry: &[GeoPoint], progress: f64) -> Option<GeoPoint> {
    let last = geometry.len().checked_sub(1)?;
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 100.0) };
    let index = ((progress / 100.0) * last as f64).floor() as usize;
    geometry.get(index.min(last)).copied()
}

impl RouteOption {
    /// See [`position_at`].
    pub fn position_at(&self, progress: f64) -> Option<GeoPoint> {
        position_at(&self.geometry, progress)
    }
}
