//! Route option generation.
//!
//! [`RouteAgent`] turns one resolved base path into a ranked list of
//! options: the primary route plus synthetic alternatives (see
//! [`crate::variant`]), each enriched with a crowd level, a safety score and
//! a step-by-step itinerary.
//!
//! # Draw order
//!
//! For each variant in index order the agent draws: crowd level, safety
//! score, first bus line, second bus line.  All draws are integer draws, so
//! a `ScriptedSource` with twelve queued integers fully pins a request.

use st_core::{Clock, Priority, RandomSource, TransportMode};
use st_spatial::{BasePath, BasePathSource};

use crate::crowd::CrowdSource;
use crate::error::{AgentError, AgentResult};
use crate::option::{RouteOption, round1};
use crate::safety::safety_score;
use crate::steps::itinerary;
use crate::variant::{VARIANTS, VariantSpec, perturbed};

/// Crowd levels and safety scores are reported on this scale.
const SCORE_MAX: u8 = 10;

// ── RouteRequest ──────────────────────────────────────────────────────────────

/// A validated planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin:      String,
    pub destination: String,
    pub mode:        TransportMode,
    pub priority:    Priority,
}

impl RouteRequest {
    /// Fails when either label is blank.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        mode: TransportMode,
        priority: Priority,
    ) -> AgentResult<Self> {
        let origin = origin.into().trim().to_string();
        let destination = destination.into().trim().to_string();
        if origin.is_empty() {
            return Err(AgentError::MissingLabel("origin"));
        }
        if destination.is_empty() {
            return Err(AgentError::MissingLabel("destination"));
        }
        Ok(Self { origin, destination, mode, priority })
    }

    /// Like [`new`](Self::new), with mode and priority given by display name.
    pub fn parse(origin: &str, destination: &str, mode: &str, priority: &str) -> AgentResult<Self> {
        Self::new(origin, destination, mode.parse()?, priority.parse()?)
    }
}

// ── RouteAgent ────────────────────────────────────────────────────────────────

/// Generates ranked route options.
///
/// Generic over its three collaborators so tests can swap any of them:
/// `P` resolves the base path, `C` answers crowd queries, `K` supplies the
/// local hour for safety scoring.
pub struct RouteAgent<P: BasePathSource, C: CrowdSource, K: Clock> {
    paths: P,
    crowd: C,
    clock: K,
}

impl<P: BasePathSource, C: CrowdSource, K: Clock> RouteAgent<P, C, K> {
    pub fn new(paths: P, crowd: C, clock: K) -> Self {
        Self { paths, crowd, clock }
    }

    pub fn paths(&self) -> &P {
        &self.paths
    }

    /// Resolve a base path and return every variant, ranked by `priority`.
    ///
    /// Returns `None` when no base path can be resolved.
    pub fn recommend(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
        priority: Priority,
        rng: &mut dyn RandomSource,
    ) -> Option<Vec<RouteOption>> {
        let profile = mode.profile();
        if mode.is_approximated() {
            log::debug!("{mode} has no native profile; routing on {profile}");
        }

        let Some(base) = self.paths.resolve(origin, destination, profile) else {
            log::debug!("no base path for {origin} -> {destination} ({profile})");
            return None;
        };

        let mut options = Vec::with_capacity(VARIANTS.len());
        for spec in &VARIANTS {
            options.push(self.enhance(&base, spec, origin, destination, rng));
        }
        rank(&mut options, priority);

        log::debug!(
            "{} options for {origin} -> {destination}, ranked by {priority}",
            options.len()
        );
        Some(options)
    }

    /// [`recommend`](Self::recommend) for a validated request.
    pub fn plan(&self, request: &RouteRequest, rng: &mut dyn RandomSource) -> Option<Vec<RouteOption>> {
        self.recommend(
            &request.origin,
            &request.destination,
            request.mode,
            request.priority,
            rng,
        )
    }

    /// Build one option from the base path.
    ///
    /// Multipliers apply after the km / minute conversion and before rounding.
    fn enhance(
        &self,
        base: &BasePath,
        spec: &VariantSpec,
        origin: &str,
        destination: &str,
        rng: &mut dyn RandomSource,
    ) -> RouteOption {
        let crowd_level = self.crowd.query(origin, rng).min(SCORE_MAX);
        let safety = safety_score(self.clock.hour(), rng).min(SCORE_MAX);
        let steps = itinerary(origin, destination, rng);

        RouteOption {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance_km: round1(base.distance_km() * spec.distance_factor),
            duration_min: round1(base.duration_min() * spec.duration_factor),
            crowd_level,
            safety_score: safety,
            geometry: perturbed(base.points(), spec.index),
            steps,
            variant: spec.index,
        }
    }
}

/// Stable in-place ranking.
///
/// | Priority        | Key                       |
/// |-----------------|---------------------------|
/// | `LeastCrowded`  | crowd level, ascending    |
/// | `Safest`        | safety score, ascending   |
/// | anything else   | duration, ascending       |
///
/// `Safest` sorts the lowest score first.
// TODO: confirm with product whether Safest should sort descending before changing it.
pub fn rank(options: &mut [RouteOption], priority: Priority) {
    match priority {
        Priority::LeastCrowded => options.sort_by_key(|o| o.crowd_level),
        Priority::Safest => options.sort_by_key(|o| o.safety_score),
        Priority::Fastest | Priority::Balanced => {
            options.sort_by(|a, b| a.duration_min.total_cmp(&b.duration_min))
        }
    }
}
