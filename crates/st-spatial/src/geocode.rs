//! Geocoding collaborators: location label → coordinate.
//!
//! | Type                | Behaviour                                                  |
//! |---------------------|------------------------------------------------------------|
//! | `NominatimGeocoder` | Live lookup against an OSM Nominatim `/search` endpoint    |
//! | `FallbackGeocoder`  | Wraps another geocoder; provider *errors* become the city fallback table |
//! | `StaticGeocoder`    | Fixed label table, for offline runs and tests              |
//!
//! A provider that answers "no such place" yields `Ok(None)`, which the
//! fallback layer passes through unchanged: only failures to *ask* are
//! papered over, an honest miss stays a miss.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use st_core::GeoPoint;

use crate::{SpatialError, SpatialResult};

/// Label → coordinate lookup.
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the provider has no match for `label`.
    fn geocode(&self, label: &str) -> SpatialResult<Option<GeoPoint>>;
}

impl<T: Geocoder + ?Sized> Geocoder for Box<T> {
    fn geocode(&self, label: &str) -> SpatialResult<Option<GeoPoint>> {
        (**self).geocode(label)
    }
}

// ── Fallback table ────────────────────────────────────────────────────────────

/// Cities recognised by substring when the live geocoder is unreachable.
pub const FALLBACK_CITIES: [(&str, GeoPoint); 3] = [
    ("mumbai",    GeoPoint { lon: 72.8777, lat: 19.0760 }),
    ("delhi",     GeoPoint { lon: 77.1025, lat: 28.7041 }),
    ("bangalore", GeoPoint { lon: 77.5946, lat: 12.9716 }),
];

/// Used for any label not in [`FALLBACK_CITIES`] (New Delhi).
pub const DEFAULT_FALLBACK: GeoPoint = GeoPoint { lon: 77.2090, lat: 28.6139 };

/// Placeholder coordinate for `label`: the first fallback city whose key
/// occurs in the label (case-insensitive), else [`DEFAULT_FALLBACK`].
pub fn fallback_point(label: &str) -> GeoPoint {
    let lower = label.to_lowercase();
    FALLBACK_CITIES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map_or(DEFAULT_FALLBACK, |(_, p)| *p)
}

// ── NominatimGeocoder ─────────────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Parse a Nominatim `/search?format=json` body into the first match.
pub fn parse_nominatim(body: &str) -> SpatialResult<Option<GeoPoint>> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)?;
    let Some(place) = places.first() else {
        return Ok(None);
    };
    let lon = place
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|_| SpatialError::BadCoordinate(place.lon.clone()))?;
    let lat = place
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|_| SpatialError::BadCoordinate(place.lat.clone()))?;
    Ok(Some(GeoPoint::new(lon, lat)))
}

/// Live geocoder backed by an OSM Nominatim instance.
pub struct NominatimGeocoder {
    client:   Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Nominatim's usage policy requires an identifying user agent.
    pub const USER_AGENT: &'static str = "smart_transit";

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SpatialResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(Self::USER_AGENT)
            .build()?;
        Ok(Self { client, base_url: base_url.into() })
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, label: &str) -> SpatialResult<Option<GeoPoint>> {
        let url = format!("{}/search", self.base_url);
        log::debug!("[GEOCODE] Nominatim lookup for \"{}\"", label);

        let response = self
            .client
            .get(&url)
            .query(&[("q", label), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?;
        let text = response.text()?;

        parse_nominatim(&text).map_err(|e| {
            log::error!(
                "Failed to parse Nominatim response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })
    }
}

// ── FallbackGeocoder ──────────────────────────────────────────────────────────

/// Turns provider errors into the [`fallback_point`] table.
pub struct FallbackGeocoder<G> {
    inner: G,
}

impl<G: Geocoder> FallbackGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<G: Geocoder> Geocoder for FallbackGeocoder<G> {
    fn geocode(&self, label: &str) -> SpatialResult<Option<GeoPoint>> {
        match self.inner.geocode(label) {
            Ok(found) => Ok(found),
            Err(e) => {
                let p = fallback_point(label);
                log::warn!("Geocoding \"{}\" failed ({}); using fallback {}", label, e, p);
                Ok(Some(p))
            }
        }
    }
}

// ── StaticGeocoder ────────────────────────────────────────────────────────────

/// Fixed table of labels, matched case-insensitively on the trimmed label.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: Vec<(String, GeoPoint)>,
    default: Option<GeoPoint>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) one label.
    pub fn with(mut self, label: &str, point: GeoPoint) -> Self {
        let key = label.trim().to_lowercase();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, point));
        self
    }

    /// Answer unknown labels with `point` instead of `None`.
    pub fn or_default(mut self, point: GeoPoint) -> Self {
        self.default = Some(point);
        self
    }

    /// The fallback cities plus a handful of Mumbai suburban stations, with
    /// New Delhi for anything else.  Used by the demo when running offline.
    pub fn builtin() -> Self {
        let mut g = Self::new()
            .with("andheri",    GeoPoint::new(72.8479, 19.1197))
            .with("churchgate", GeoPoint::new(72.8263, 18.9322))
            .with("dadar",      GeoPoint::new(72.8424, 19.0178))
            .with("bandra",     GeoPoint::new(72.8407, 19.0544));
        for (name, p) in FALLBACK_CITIES {
            g = g.with(name, p);
        }
        g.or_default(DEFAULT_FALLBACK)
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, label: &str) -> SpatialResult<Option<GeoPoint>> {
        let key = label.trim().to_lowercase();
        let hit = self
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| *p);
        Ok(hit.or(self.default))
    }
}
