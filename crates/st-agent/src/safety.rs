//! Time-of-day safety score.

use std::ops::RangeInclusive;

use st_core::RandomSource;

/// Local hours counted as daytime (07:00 through 20:59).
pub const DAYTIME_HOURS: RangeInclusive<u32> = 7..=20;

/// Draw a safety score for a journey starting at `hour`.
///
/// Daytime scores fall in 7–9, night-time scores in 4–6.
pub fn safety_score(hour: u32, rng: &mut dyn RandomSource) -> u8 {
    let (lo, hi) = if DAYTIME_HOURS.contains(&hour) { (7, 9) } else { (4, 6) };
    rng.int_inclusive(lo, hi) as u8
}
