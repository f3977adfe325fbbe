//! Routing trait and the straight-line fallback router.
//!
//! # Pluggability
//!
//! [`PathResolver`](crate::PathResolver) calls routing via the [`Router`]
//! trait, so a live provider ([`OrsRouter`](crate::OrsRouter)), the synthetic
//! [`StraightLineRouter`], or a test double can be swapped in without
//! touching the route generator.

use st_core::{GeoPoint, RoutingProfile};

use crate::{BasePath, SpatialError, SpatialResult};

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so one instance can serve many
/// requests.
pub trait Router: Send + Sync {
    /// Route through `waypoints` in order (at least two) using `profile`.
    fn route(&self, waypoints: &[GeoPoint], profile: RoutingProfile) -> SpatialResult<BasePath>;
}

impl<T: Router + ?Sized> Router for Box<T> {
    fn route(&self, waypoints: &[GeoPoint], profile: RoutingProfile) -> SpatialResult<BasePath> {
        (**self).route(waypoints, profile)
    }
}

// ── StraightLineRouter ────────────────────────────────────────────────────────

/// Placeholder distance of a synthetic path (5 km).
pub const MOCK_DISTANCE_M: f64 = 5_000.0;
/// Placeholder duration of a synthetic path (20 min).
pub const MOCK_DURATION_S: f64 = 1_200.0;
/// Points in a synthetic path, endpoints included.
pub const MOCK_POINTS: usize = 10;

/// Synthetic router used when the live provider is unavailable.
///
/// Draws an evenly interpolated straight line from the first to the last
/// waypoint (intermediate waypoints are ignored) and attaches fixed
/// placeholder distance and duration, regardless of profile or geography.
#[derive(Debug, Clone, Copy)]
pub struct StraightLineRouter {
    pub points:     usize,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self {
            points:     MOCK_POINTS,
            distance_m: MOCK_DISTANCE_M,
            duration_s: MOCK_DURATION_S,
        }
    }
}

impl Router for StraightLineRouter {
    fn route(&self, waypoints: &[GeoPoint], _profile: RoutingProfile) -> SpatialResult<BasePath> {
        let (Some(from), Some(to)) = (waypoints.first(), waypoints.last()) else {
            return Err(SpatialError::TooFewWaypoints(waypoints.len()));
        };
        if waypoints.len() < 2 {
            return Err(SpatialError::TooFewWaypoints(waypoints.len()));
        }
        Ok(BasePath::straight_line(
            *from,
            *to,
            self.points,
            self.distance_m,
            self.duration_s,
        ))
    }
}
