//! The display-ready route record handed back to callers.

use serde::{Deserialize, Deserializer, Serialize};
use st_core::GeoPoint;

/// One ranked route option.
///
/// Distances and durations are already rounded to one decimal.  Serialized
/// as the history store's `route_data` JSON, with `distance` and `duration`
/// keys and the geometry as a plain `[[lon, lat], …]` array.  Geometry stored
/// as a GeoJSON `LineString` object is also accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    pub origin:       String,
    pub destination:  String,
    /// Kilometres.
    #[serde(rename = "distance")]
    pub distance_km:  f64,
    /// Minutes.
    #[serde(rename = "duration")]
    pub duration_min: f64,
    /// 0–10.
    pub crowd_level:  u8,
    /// 0–10, higher is safer.
    pub safety_score: u8,
    #[serde(deserialize_with = "geometry_from_either")]
    pub geometry:     Vec<GeoPoint>,
    pub steps:        Vec<String>,
    /// 0 = primary, 1.. = synthetic alternatives.
    pub variant:      u8,
}

impl RouteOption {
    pub fn is_primary(&self) -> bool {
        self.variant == 0
    }

    pub fn crowd_band(&self) -> CrowdBand {
        CrowdBand::from_level(self.crowd_level)
    }
}

/// Coarse crowd label shown next to a route.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CrowdBand {
    Low,
    Medium,
    High,
}

impl CrowdBand {
    /// `< 3` low, `< 7` medium, otherwise high.
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=2 => CrowdBand::Low,
            3..=6 => CrowdBand::Medium,
            _ => CrowdBand::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CrowdBand::Low    => "Low",
            CrowdBand::Medium => "Medium",
            CrowdBand::High   => "High",
        }
    }
}

impl std::fmt::Display for CrowdBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeometryRepr {
    Points(Vec<GeoPoint>),
    LineString { coordinates: Vec<GeoPoint> },
}

fn geometry_from_either<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<GeoPoint>, D::Error> {
    match GeometryRepr::deserialize(d)? {
        GeometryRepr::Points(points) | GeometryRepr::LineString { coordinates: points } => Ok(points),
    }
}

/// Round to one decimal place, exact halves to even (`5.25` → `5.2`).
#[inline]
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}
