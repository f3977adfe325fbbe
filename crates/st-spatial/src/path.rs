//! The base path returned by the routing collaborator.

use st_core::GeoPoint;

/// One route geometry with whole-path distance and duration estimates.
///
/// Immutable once built: fields are private and only readable through
/// accessors.  Callers that need a modified geometry clone the points.
#[derive(Debug, Clone, PartialEq)]
pub struct BasePath {
    points:     Vec<GeoPoint>,
    distance_m: f64,
    duration_s: f64,
}

impl BasePath {
    pub fn new(points: Vec<GeoPoint>, distance_m: f64, duration_s: f64) -> Self {
        Self { points, distance_m, duration_s }
    }

    /// Evenly spaced straight line of `n` points from `from` to `to`
    /// (inclusive).  `n < 2` still yields both endpoints.
    pub fn straight_line(
        from:       GeoPoint,
        to:         GeoPoint,
        n:          usize,
        distance_m: f64,
        duration_s: f64,
    ) -> Self {
        let n = n.max(2);
        let last = (n - 1) as f64;
        let points = (0..n)
            .map(|i| if i + 1 == n { to } else { from.interpolate(to, i as f64 / last) })
            .collect();
        Self { points, distance_m, duration_s }
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whole-path distance in metres.
    #[inline]
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Whole-path duration in seconds.
    #[inline]
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    #[inline]
    pub fn duration_min(&self) -> f64 {
        self.duration_s / 60.0
    }

    pub fn first(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }
}
