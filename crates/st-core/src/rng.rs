//! Injectable random sources.
//!
//! Every simulated number in the planner (crowd level, safety score, line
//! numbers in the itinerary, monitor alerts) is drawn through the
//! [`RandomSource`] trait rather than a global generator.  Production code
//! uses [`PlannerRng`], a seeded `SmallRng`; tests either seed it or replay a
//! fixed sequence with [`ScriptedSource`].
//!
//! Discrete probability tables (the monitor's congestion and delay buckets)
//! are sampled with [`pick_weighted`], which consumes exactly one unit draw.
//! That keeps the mapping from draw to outcome explicit, so a scripted draw
//! of `0.65` always selects the second congestion bucket.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A source of uniform random draws.
///
/// Object safe: collaborators receive it as `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `lo..=hi`.  Callers guarantee `lo <= hi`.
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32;

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p.clamp(0.0, 1.0)
    }
}

/// Sample one value from a discrete `(value, probability)` table.
///
/// Probabilities are walked cumulatively against a single unit draw.  If the
/// table sums to less than one, the residual mass goes to the last entry.
/// Returns `None` only for an empty table.
pub fn pick_weighted<T: Copy>(rng: &mut dyn RandomSource, table: &[(T, f64)]) -> Option<T> {
    let (last, _) = *table.last()?;
    let draw = rng.next_unit();
    let mut acc = 0.0;
    for &(value, p) in table {
        acc += p;
        if draw < acc {
            return Some(value);
        }
    }
    Some(last)
}

// ── PlannerRng ────────────────────────────────────────────────────────────────

/// Default random source backed by `SmallRng`.
///
/// The type is `!Sync` on purpose: each request owns its own generator and
/// passes it down by `&mut`.
pub struct PlannerRng(SmallRng);

impl PlannerRng {
    /// Seed deterministically.  The same seed always yields the same draws.
    pub fn new(seed: u64) -> Self {
        PlannerRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy (non-reproducible runs).
    pub fn from_entropy() -> Self {
        PlannerRng(SmallRng::from_entropy())
    }

    /// Seed from `seed` when given, otherwise from entropy.
    pub fn seeded_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for PlannerRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.gen_range(lo..=hi)
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Replays pre-recorded draws in order.
///
/// Unit draws and integer draws are queued separately.  Integer draws are
/// clamped into the requested range, so a script can say "as high as
/// possible" with `u32::MAX`.  An exhausted queue yields `0.0` for unit draws
/// and `lo` for integer draws.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    units: VecDeque<f64>,
    ints:  VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue unit draws (each should lie in `[0, 1)`).
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Queue integer draws.
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Draws not yet consumed, as `(units, ints)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.units.len(), self.ints.len())
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.ints.pop_front().map_or(lo, |v| v.clamp(lo, hi))
    }
}
