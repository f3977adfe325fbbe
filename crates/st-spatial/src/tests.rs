//! Unit tests for st-spatial.
//!
//! All tests run offline: live providers are exercised only through their
//! response parsers, and routing/geocoding failures are simulated with the
//! doubles in `helpers`.

#[cfg(test)]
mod helpers {
    use st_core::{GeoPoint, RoutingProfile};

    use crate::{BasePath, Geocoder, Router, SpatialError, SpatialResult};

    /// Geocoder whose provider is always unreachable.
    pub struct DownGeocoder;

    impl Geocoder for DownGeocoder {
        fn geocode(&self, _label: &str) -> SpatialResult<Option<GeoPoint>> {
            Err(SpatialError::RawApi("connection refused".into()))
        }
    }

    /// Router whose provider is always unreachable.
    pub struct DownRouter;

    impl Router for DownRouter {
        fn route(&self, _w: &[GeoPoint], _p: RoutingProfile) -> SpatialResult<BasePath> {
            Err(SpatialError::Api { code: 2010, message: "Could not find routable point".into() })
        }
    }

    /// Router that returns a fixed path and records nothing.
    pub struct FixedRouter(pub BasePath);

    impl Router for FixedRouter {
        fn route(&self, _w: &[GeoPoint], _p: RoutingProfile) -> SpatialResult<BasePath> {
            Ok(self.0.clone())
        }
    }

    pub const DIRECTIONS_BODY: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "segments": [
                    {"distance": 3000.0, "duration": 700.0, "steps": []},
                    {"distance": 2000.0, "duration": 500.0, "steps": []}
                ],
                "summary": {"distance": 5000.0, "duration": 1200.0}
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [[72.8479, 19.1197], [72.84, 19.05, 12.5], [72.8263, 18.9322]]
            }
        }]
    }"#;
}

// ── BasePath ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use st_core::GeoPoint;

    use crate::BasePath;

    #[test]
    fn unit_conversions() {
        let p = BasePath::new(vec![GeoPoint::new(0.0, 0.0)], 5_000.0, 1_200.0);
        assert_eq!(p.distance_km(), 5.0);
        assert_eq!(p.duration_min(), 20.0);
        assert_eq!(p.len(), 1);
        assert!(!p.is_empty());
    }

    #[test]
    fn straight_line_endpoints_and_spacing() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(9.0, 18.0);
        let p = BasePath::straight_line(a, b, 10, 1.0, 1.0);
        assert_eq!(p.len(), 10);
        assert_eq!(p.first(), Some(a));
        assert_eq!(p.last(), Some(b));
        let second = p.points()[1];
        assert!((second.lon - 1.0).abs() < 1e-12);
        assert!((second.lat - 2.0).abs() < 1e-12);
    }

    #[test]
    fn straight_line_minimum_two_points() {
        let p = BasePath::straight_line(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0), 0, 1.0, 1.0);
        assert_eq!(p.len(), 2);
    }
}

// ── Geocoding ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geocode {
    use st_core::GeoPoint;

    use super::helpers::DownGeocoder;
    use crate::geocode::{DEFAULT_FALLBACK, parse_nominatim};
    use crate::{FallbackGeocoder, Geocoder, SpatialError, StaticGeocoder, fallback_point};

    #[test]
    fn fallback_table_substring_match() {
        assert_eq!(fallback_point("Mumbai Central"), GeoPoint::new(72.8777, 19.0760));
        assert_eq!(fallback_point("NEW DELHI station"), GeoPoint::new(77.1025, 28.7041));
        assert_eq!(fallback_point("bangalore"), GeoPoint::new(77.5946, 12.9716));
        assert_eq!(fallback_point("Andheri"), DEFAULT_FALLBACK);
        assert_eq!(DEFAULT_FALLBACK, GeoPoint::new(77.2090, 28.6139));
    }

    #[test]
    fn fallback_geocoder_covers_provider_errors() {
        let g = FallbackGeocoder::new(DownGeocoder);
        assert_eq!(g.geocode("mumbai").unwrap(), Some(GeoPoint::new(72.8777, 19.0760)));
        assert_eq!(g.geocode("Nowhere").unwrap(), Some(DEFAULT_FALLBACK));
    }

    #[test]
    fn fallback_geocoder_keeps_honest_miss() {
        let g = FallbackGeocoder::new(StaticGeocoder::new());
        assert_eq!(g.geocode("Atlantis").unwrap(), None);
    }

    #[test]
    fn static_geocoder_case_insensitive() {
        let g = StaticGeocoder::new().with("Andheri", GeoPoint::new(1.0, 2.0));
        assert_eq!(g.geocode("  andheri ").unwrap(), Some(GeoPoint::new(1.0, 2.0)));
        assert_eq!(g.geocode("Churchgate").unwrap(), None);
    }

    #[test]
    fn static_geocoder_with_replaces() {
        let g = StaticGeocoder::new()
            .with("x", GeoPoint::new(1.0, 1.0))
            .with("X", GeoPoint::new(2.0, 2.0));
        assert_eq!(g.geocode("x").unwrap(), Some(GeoPoint::new(2.0, 2.0)));
    }

    #[test]
    fn builtin_table_has_default() {
        let g = StaticGeocoder::builtin();
        assert_eq!(g.geocode("Churchgate").unwrap(), Some(GeoPoint::new(72.8263, 18.9322)));
        assert_eq!(g.geocode("somewhere else").unwrap(), Some(DEFAULT_FALLBACK));
    }

    #[test]
    fn nominatim_first_hit() {
        let body = r#"[{"lat": "19.1197", "lon": "72.8479", "display_name": "Andheri"},
                       {"lat": "0", "lon": "0"}]"#;
        assert_eq!(parse_nominatim(body).unwrap(), Some(GeoPoint::new(72.8479, 19.1197)));
    }

    #[test]
    fn nominatim_empty_is_none() {
        assert_eq!(parse_nominatim("[]").unwrap(), None);
    }

    #[test]
    fn nominatim_bad_coordinate() {
        let err = parse_nominatim(r#"[{"lat": "north", "lon": "72.8"}]"#).unwrap_err();
        assert!(matches!(err, SpatialError::BadCoordinate(_)));
    }

    #[test]
    fn nominatim_malformed_json() {
        assert!(matches!(parse_nominatim("<html>").unwrap_err(), SpatialError::Parse(_)));
    }
}

// ── Directions parsing ────────────────────────────────────────────────────────

#[cfg(test)]
mod ors {
    use st_core::GeoPoint;

    use super::helpers::DIRECTIONS_BODY;
    use crate::SpatialError;
    use crate::ors::parse_directions;

    #[test]
    fn sums_segments_and_drops_elevation() {
        let path = parse_directions(DIRECTIONS_BODY).unwrap();
        assert_eq!(path.distance_m(), 5_000.0);
        assert_eq!(path.duration_s(), 1_200.0);
        assert_eq!(path.len(), 3);
        assert_eq!(path.points()[1], GeoPoint::new(72.84, 19.05));
    }

    #[test]
    fn summary_used_without_segments() {
        let body = r#"{"features": [{
            "properties": {"summary": {"distance": 800.0, "duration": 600.0}},
            "geometry": {"coordinates": [[0.0, 0.0], [0.0, 0.01]]}
        }]}"#;
        let path = parse_directions(body).unwrap();
        assert_eq!(path.distance_m(), 800.0);
        assert_eq!(path.duration_s(), 600.0);
    }

    #[test]
    fn no_features_is_empty_route() {
        let err = parse_directions(r#"{"features": []}"#).unwrap_err();
        assert!(matches!(err, SpatialError::EmptyRoute));
    }

    #[test]
    fn short_position_rejected() {
        let body = r#"{"features": [{
            "properties": {},
            "geometry": {"coordinates": [[0.0]]}
        }]}"#;
        assert!(matches!(parse_directions(body).unwrap_err(), SpatialError::BadCoordinate(_)));
    }

    #[test]
    fn structured_error_body() {
        let body = r#"{"error": {"code": 2010, "message": "Could not find routable point"}}"#;
        match SpatialError::from_error_body(body) {
            SpatialError::Api { code, message } => {
                assert_eq!(code, 2010);
                assert!(message.contains("routable"));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn raw_error_body() {
        assert!(matches!(
            SpatialError::from_error_body("Bad Gateway"),
            SpatialError::RawApi(_)
        ));
    }
}

// ── Routers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod router {
    use st_core::{GeoPoint, RoutingProfile};

    use crate::router::{MOCK_DISTANCE_M, MOCK_DURATION_S, MOCK_POINTS};
    use crate::{Router, SpatialError, StraightLineRouter};

    #[test]
    fn straight_line_placeholders() {
        let a = GeoPoint::new(72.8479, 19.1197);
        let b = GeoPoint::new(72.8263, 18.9322);
        let path = StraightLineRouter::default()
            .route(&[a, b], RoutingProfile::DrivingCar)
            .unwrap();
        assert_eq!(path.len(), MOCK_POINTS);
        assert_eq!(path.distance_m(), MOCK_DISTANCE_M);
        assert_eq!(path.duration_s(), MOCK_DURATION_S);
        assert_eq!(path.first(), Some(a));
        assert_eq!(path.last(), Some(b));
    }

    #[test]
    fn straight_line_needs_two_waypoints() {
        let r = StraightLineRouter::default();
        let one = [GeoPoint::new(0.0, 0.0)];
        assert!(matches!(
            r.route(&one, RoutingProfile::FootWalking),
            Err(SpatialError::TooFewWaypoints(1))
        ));
        assert!(matches!(
            r.route(&[], RoutingProfile::FootWalking),
            Err(SpatialError::TooFewWaypoints(0))
        ));
    }

    #[test]
    fn boxed_router_delegates() {
        let r: Box<dyn Router> = Box::new(StraightLineRouter::default());
        let path = r
            .route(&[GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)], RoutingProfile::DrivingCar)
            .unwrap();
        assert_eq!(path.len(), MOCK_POINTS);
    }
}

// ── PathResolver ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use st_core::{GeoPoint, RoutingProfile};

    use super::helpers::{DownRouter, FixedRouter};
    use crate::router::{MOCK_DISTANCE_M, MOCK_DURATION_S};
    use crate::{BasePath, BasePathSource, PathResolver, StaticGeocoder, StraightLineRouter};

    fn geocoder() -> StaticGeocoder {
        StaticGeocoder::new()
            .with("Andheri", GeoPoint::new(72.8479, 19.1197))
            .with("Churchgate", GeoPoint::new(72.8263, 18.9322))
            .with("Dadar", GeoPoint::new(72.8424, 19.0178))
    }

    #[test]
    fn live_route_passed_through() {
        let live = BasePath::new(vec![GeoPoint::new(1.0, 1.0); 4], 7_000.0, 900.0);
        let r = PathResolver::new(geocoder(), FixedRouter(live.clone()));
        assert_eq!(r.resolve("Andheri", "Churchgate", RoutingProfile::DrivingCar), Some(live));
    }

    #[test]
    fn unknown_label_gives_none() {
        let r = PathResolver::new(geocoder(), StraightLineRouter::default());
        assert!(r.resolve("Andheri", "Atlantis", RoutingProfile::DrivingCar).is_none());
        assert!(r.resolve("Atlantis", "Andheri", RoutingProfile::DrivingCar).is_none());
    }

    #[test]
    fn router_failure_falls_back_to_straight_line() {
        let r = PathResolver::new(geocoder(), DownRouter);
        let path = r
            .resolve("Andheri", "Churchgate", RoutingProfile::DrivingCar)
            .expect("fallback path");
        assert_eq!(path.distance_m(), MOCK_DISTANCE_M);
        assert_eq!(path.duration_s(), MOCK_DURATION_S);
        assert_eq!(path.first(), Some(GeoPoint::new(72.8479, 19.1197)));
        assert_eq!(path.last(), Some(GeoPoint::new(72.8263, 18.9322)));
    }

    #[test]
    fn custom_fallback() {
        let fb = StraightLineRouter { points: 3, distance_m: 1.0, duration_s: 2.0 };
        let r = PathResolver::new(geocoder(), DownRouter).with_fallback(fb);
        let path = r.resolve("Andheri", "Dadar", RoutingProfile::FootWalking).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.duration_s(), 2.0);
    }

    #[test]
    fn resolve_via_has_no_fallback() {
        let r = PathResolver::new(geocoder(), DownRouter);
        assert!(r.resolve_via(&["Andheri", "Dadar", "Churchgate"], RoutingProfile::DrivingCar).is_none());

        let ok = PathResolver::new(geocoder(), StraightLineRouter::default());
        let path = ok
            .resolve_via(&["Andheri", "Dadar", "Churchgate"], RoutingProfile::DrivingCar)
            .unwrap();
        assert_eq!(path.last(), Some(GeoPoint::new(72.8263, 18.9322)));
        assert!(ok.resolve_via(&["Andheri", "Atlantis"], RoutingProfile::DrivingCar).is_none());
    }

    fn resolve_with<S: BasePathSource>(source: S) -> Option<BasePath> {
        source.resolve("Andheri", "Dadar", RoutingProfile::DrivingCar)
    }

    #[test]
    fn borrowed_source_delegates() {
        let r = PathResolver::new(geocoder(), StraightLineRouter::default());
        assert!(resolve_with(&r).is_some());
    }
}
