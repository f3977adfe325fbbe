//! Crowd-level lookup for a location label.

use st_core::{Clock, RandomSource};

/// Answers "how crowded is this place right now" on a 0–10 scale.
pub trait CrowdSource: Send + Sync {
    fn query(&self, label: &str, rng: &mut dyn RandomSource) -> u8;
}

impl<T: CrowdSource + ?Sized> CrowdSource for Box<T> {
    fn query(&self, label: &str, rng: &mut dyn RandomSource) -> u8 {
        (**self).query(label, rng)
    }
}

/// Hours (inclusive) treated as rush hour at stations.
const RUSH_HOURS: [(u32, u32); 2] = [(7, 10), (17, 19)];

/// Random crowd levels shaped by label and time of day.
///
/// | Label contains           | Rush hour | Range  |
/// |--------------------------|-----------|--------|
/// | `station` or `central`   | yes       | 7–9    |
/// | `station` or `central`   | no        | 4–6    |
/// | anything else            | any       | 3–7    |
#[derive(Debug, Clone, Default)]
pub struct SimulatedCrowd<C: Clock> {
    clock: C,
}

impl<C: Clock> SimulatedCrowd<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn is_hub(label: &str) -> bool {
        let label = label.to_lowercase();
        label.contains("station") || label.contains("central")
    }

    fn is_rush_hour(hour: u32) -> bool {
        RUSH_HOURS.iter().any(|&(lo, hi)| (lo..=hi).contains(&hour))
    }
}

impl<C: Clock> CrowdSource for SimulatedCrowd<C> {
    fn query(&self, label: &str, rng: &mut dyn RandomSource) -> u8 {
        let (lo, hi) = if !Self::is_hub(label) {
            (3, 7)
        } else if Self::is_rush_hour(self.clock.hour()) {
            (7, 9)
        } else {
            (4, 6)
        };
        rng.int_inclusive(lo, hi) as u8
    }
}
