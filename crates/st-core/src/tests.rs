//! Unit tests for st-core primitives.

#[cfg(test)]
mod ids {
    use crate::{HistoryId, UserId};

    #[test]
    fn default_user_is_one() {
        assert_eq!(UserId::default(), UserId(1));
        assert_eq!(UserId::DEFAULT.get(), 1);
        assert_eq!(UserId::DEFAULT_NAME, "default_user");
    }

    #[test]
    fn display() {
        assert_eq!(UserId(7).to_string(), "UserId(7)");
        assert_eq!(HistoryId::from(3).to_string(), "HistoryId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn interpolate_endpoints_and_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, 4.0);
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);
        assert_eq!(a.interpolate(b, 0.5), GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn nudged_moves_both_axes() {
        let p = GeoPoint::new(72.0, 19.0).nudged(0.002);
        assert!((p.lon - 72.002).abs() < 1e-12);
        assert!((p.lat - 19.002).abs() < 1e-12);
    }

    #[test]
    fn array_order_is_lon_lat() {
        let p = GeoPoint::from([72.8777, 19.0760]);
        assert_eq!(p.lon, 72.8777);
        let back: [f64; 2] = p.into();
        assert_eq!(back, [72.8777, 19.0760]);
    }
}

#[cfg(test)]
mod rng {
    use crate::{PlannerRng, RandomSource, ScriptedSource, pick_weighted};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PlannerRng::new(12345);
        let mut r2 = PlannerRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.int_inclusive(0, 1000), r2.int_inclusive(0, 1000));
            assert_eq!(r1.next_unit(), r2.next_unit());
        }
    }

    #[test]
    fn int_inclusive_hits_both_ends() {
        let mut rng = PlannerRng::new(0);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = rng.int_inclusive(7, 9);
            assert!((7..=9).contains(&v));
            seen[(v - 7) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "all of 7, 8, 9 should appear");
    }

    #[test]
    fn unit_in_bounds() {
        let mut rng = PlannerRng::new(9);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = PlannerRng::new(0);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut s = ScriptedSource::new().with_units([0.1, 0.9]).with_ints([4, 100]);
        assert_eq!(s.next_unit(), 0.1);
        assert_eq!(s.int_inclusive(0, 10), 4);
        assert_eq!(s.int_inclusive(0, 10), 10, "clamped to hi");
        assert_eq!(s.next_unit(), 0.9);
        assert_eq!(s.remaining(), (0, 0));
        // Exhausted queues fall back to the low end.
        assert_eq!(s.next_unit(), 0.0);
        assert_eq!(s.int_inclusive(3, 5), 3);
    }

    #[test]
    fn weighted_buckets_follow_cumulative_mass() {
        let table = [(0u32, 0.6), (5, 0.25), (10, 0.1), (15, 0.05)];
        let cases = [(0.0, 0), (0.59, 0), (0.6, 5), (0.84, 5), (0.86, 10), (0.96, 15), (0.999, 15)];
        for (draw, want) in cases {
            let mut s = ScriptedSource::new().with_units([draw]);
            assert_eq!(pick_weighted(&mut s, &table), Some(want), "draw {draw}");
        }
    }

    #[test]
    fn weighted_empty_table() {
        let mut s = ScriptedSource::new();
        let table: [(u32, f64); 0] = [];
        assert_eq!(pick_weighted(&mut s, &table), None);
    }

    #[test]
    fn weighted_frequencies_roughly_match() {
        let table = [(0u32, 0.7), (3, 0.2), (8, 0.1)];
        let mut rng = PlannerRng::new(2024);
        let mut counts = [0usize; 3];
        let n = 20_000;
        for _ in 0..n {
            match pick_weighted(&mut rng, &table) {
                Some(0) => counts[0] += 1,
                Some(3) => counts[1] += 1,
                Some(8) => counts[2] += 1,
                other => panic!("unexpected {other:?}"),
            }
        }
        let freq: Vec<f64> = counts.iter().map(|c| *c as f64 / n as f64).collect();
        assert!((freq[0] - 0.7).abs() < 0.02, "{freq:?}");
        assert!((freq[1] - 0.2).abs() < 0.02, "{freq:?}");
        assert!((freq[2] - 0.1).abs() < 0.02, "{freq:?}");
    }
}

#[cfg(test)]
mod time {
    use chrono::Timelike;

    use crate::{Clock, FixedClock, SystemClock};

    #[test]
    fn fixed_clock_hour() {
        assert_eq!(FixedClock::at_hour(7).hour(), 7);
        assert_eq!(FixedClock::at_hour(23).hour(), 23);
        assert_eq!(FixedClock::at_hour(25).hour(), 1);
    }

    #[test]
    fn system_clock_hour_in_range() {
        let h = SystemClock.hour();
        assert!(h < 24);
        assert!(SystemClock.now().minute() < 60);
    }
}

#[cfg(test)]
mod transport {
    use crate::{PROFILE_TABLE, RoutingProfile, TransportMode};

    #[test]
    fn walking_uses_foot_profile() {
        assert_eq!(TransportMode::Walking.profile(), RoutingProfile::FootWalking);
        assert!(!TransportMode::Walking.is_approximated());
    }

    #[test]
    fn transit_modes_are_approximated_on_car() {
        for mode in [TransportMode::Bus, TransportMode::Train, TransportMode::MultiModal] {
            assert_eq!(mode.profile(), RoutingProfile::DrivingCar, "{mode}");
            assert!(mode.is_approximated(), "{mode}");
        }
    }

    #[test]
    fn table_covers_every_mode() {
        for mode in TransportMode::ALL {
            assert_eq!(PROFILE_TABLE.iter().filter(|(m, _, _)| *m == mode).count(), 1);
        }
    }

    #[test]
    fn parse_labels() {
        assert_eq!("Bus".parse::<TransportMode>().unwrap(), TransportMode::Bus);
        assert_eq!("multi-modal".parse::<TransportMode>().unwrap(), TransportMode::MultiModal);
        assert_eq!(" WALKING ".parse::<TransportMode>().unwrap(), TransportMode::Walking);
        assert!("hovercraft".parse::<TransportMode>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TransportMode::MultiModal.to_string(), "Multi-modal");
        assert_eq!(RoutingProfile::DrivingCar.to_string(), "driving-car");
        assert_eq!(RoutingProfile::FootWalking.to_string(), "foot-walking");
    }
}

#[cfg(test)]
mod priority {
    use crate::Priority;

    #[test]
    fn parse_labels() {
        assert_eq!("Least Crowded".parse::<Priority>().unwrap(), Priority::LeastCrowded);
        assert_eq!("least-crowded".parse::<Priority>().unwrap(), Priority::LeastCrowded);
        assert_eq!("safest".parse::<Priority>().unwrap(), Priority::Safest);
        assert_eq!("Balanced".parse::<Priority>().unwrap(), Priority::Balanced);
        assert!("cheapest".parse::<Priority>().is_err());
    }

    #[test]
    fn label_round_trip() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
        }
    }
}

#[cfg(test)]
mod config {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use crate::{CoreError, PlannerConfig};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = PlannerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, PlannerConfig::default());
        assert!(cfg.ors_api_key.is_none());
        assert_eq!(cfg.db_path, PathBuf::from("transit.db"));
    }

    #[test]
    fn overrides_applied() {
        let cfg = PlannerConfig::from_lookup(lookup(&[
            ("ORS_API_KEY", "abc"),
            ("ORS_BASE_URL", "http://localhost:8080/"),
            ("TRANSIT_DB", "/tmp/t.db"),
            ("TRANSIT_SEED", "42"),
            ("HTTP_TIMEOUT", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.ors_api_key.as_deref(), Some("abc"));
        assert_eq!(cfg.ors_base_url, "http://localhost:8080");
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/t.db"));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.http_timeout_secs, 5);
    }

    #[test]
    fn blank_key_counts_as_unset() {
        let cfg = PlannerConfig::from_lookup(lookup(&[("ORS_API_KEY", "  ")])).unwrap();
        assert!(cfg.ors_api_key.is_none());
    }

    #[test]
    fn bad_seed_is_config_error() {
        let err = PlannerConfig::from_lookup(lookup(&[("TRANSIT_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
