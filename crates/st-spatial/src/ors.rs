//! OpenRouteService directions provider.
//!
//! Requests the GeoJSON flavour of `/v2/directions/{profile}` so the response
//! carries both the line geometry and per-segment distance/duration.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use st_core::{GeoPoint, RoutingProfile};

use crate::{BasePath, Router, SpatialError, SpatialResult};

// ── Response types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DirectionsCollection {
    features: Vec<DirectionsFeature>,
}

#[derive(Deserialize)]
struct DirectionsFeature {
    properties: FeatureProperties,
    geometry:   LineString,
}

#[derive(Deserialize, Default)]
struct FeatureProperties {
    #[serde(default)]
    segments: Vec<Segment>,
    #[serde(default)]
    summary:  Option<Segment>,
}

#[derive(Deserialize, Clone, Copy, Default)]
struct Segment {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Deserialize)]
struct LineString {
    // Positions may carry a third (elevation) value; only lon/lat are kept.
    coordinates: Vec<Vec<f64>>,
}

/// Parse a successful directions GeoJSON body into a [`BasePath`].
///
/// Distance and duration are the sums over all segments (one segment per
/// leg between consecutive waypoints), or the route summary when the
/// provider omits segments.
pub fn parse_directions(body: &str) -> SpatialResult<BasePath> {
    let collection: DirectionsCollection = serde_json::from_str(body)?;
    let feature = collection
        .features
        .into_iter()
        .next()
        .ok_or(SpatialError::EmptyRoute)?;

    let totals = if feature.properties.segments.is_empty() {
        feature.properties.summary.unwrap_or_default()
    } else {
        feature
            .properties
            .segments
            .iter()
            .fold(Segment::default(), |acc, s| Segment {
                distance: acc.distance + s.distance,
                duration: acc.duration + s.duration,
            })
    };

    let points = feature
        .geometry
        .coordinates
        .iter()
        .map(|c| match c.as_slice() {
            [lon, lat, ..] => Ok(GeoPoint::new(*lon, *lat)),
            _ => Err(SpatialError::BadCoordinate(format!("{c:?}"))),
        })
        .collect::<SpatialResult<Vec<_>>>()?;

    if points.is_empty() {
        return Err(SpatialError::EmptyRoute);
    }

    Ok(BasePath::new(points, totals.distance, totals.duration))
}

// ── OrsRouter ─────────────────────────────────────────────────────────────────

/// Live router backed by the OpenRouteService directions API.
pub struct OrsRouter {
    client:   Client,
    api_key:  String,
    base_url: String,
}

impl OrsRouter {
    pub fn new(
        api_key:  impl Into<String>,
        base_url: impl Into<String>,
        timeout:  Duration,
    ) -> SpatialResult<Self> {
        Ok(Self {
            client:   Client::builder().timeout(timeout).build()?,
            api_key:  api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, profile: RoutingProfile) -> String {
        format!("{}/v2/directions/{}/geojson", self.base_url, profile.as_str())
    }
}

impl Router for OrsRouter {
    fn route(&self, waypoints: &[GeoPoint], profile: RoutingProfile) -> SpatialResult<BasePath> {
        if waypoints.len() < 2 {
            return Err(SpatialError::TooFewWaypoints(waypoints.len()));
        }

        let url = self.endpoint(profile);
        let coords: Vec<[f64; 2]> = waypoints.iter().map(|p| (*p).into()).collect();
        let body = json!({ "coordinates": coords });
        log::debug!(
            "[PROVIDER] Calling ORS {} with {} waypoints",
            profile,
            waypoints.len()
        );

        let response = match self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send POST request. URL: {}\nError: {}", url, e);
                return Err(SpatialError::Http(e));
            }
        };

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            let err = SpatialError::from_error_body(&text);
            if matches!(err, SpatialError::RawApi(_)) {
                log::error!(
                    "API returned non-success status: {}. Unparseable Body: {}",
                    status,
                    text
                );
            }
            return Err(err);
        }

        parse_directions(&text).map_err(|e| {
            log::error!(
                "Failed to parse DirectionsResponse. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })
    }
}
