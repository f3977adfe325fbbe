//! Geographic coordinate type.
//!
//! `GeoPoint` stores longitude first, matching the `[lon, lat]` order used by
//! GeoJSON and by the directions provider.  With the `serde` feature it
//! serializes as a two-element array in that order.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Point at fraction `t` of the straight segment from `self` to `other`.
    /// `t = 0` is `self`, `t = 1` is `other`; no clamping.
    #[inline]
    pub fn interpolate(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }

    /// Shift both axes by `delta_deg` degrees.
    #[inline]
    pub fn nudged(self, delta_deg: f64) -> GeoPoint {
        GeoPoint {
            lon: self.lon + delta_deg,
            lat: self.lat + delta_deg,
        }
    }
}

impl From<[f64; 2]> for GeoPoint {
    #[inline]
    fn from([lon, lat]: [f64; 2]) -> Self {
        GeoPoint { lon, lat }
    }
}

impl From<GeoPoint> for [f64; 2] {
    #[inline]
    fn from(p: GeoPoint) -> Self {
        [p.lon, p.lat]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
