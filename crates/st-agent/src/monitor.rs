//! Simulated in-journey monitoring.
//!
//! Three independent checks run per call, always in the order congestion,
//! safety, delay.  Each consumes exactly one unit draw.

use serde::{Deserialize, Serialize};
use st_core::{RandomSource, pick_weighted};

use crate::option::RouteOption;

/// Congestion delay in minutes and its probability.
pub const CONGESTION_TABLE: [(u32, f64); 4] = [(0, 0.6), (5, 0.25), (10, 0.1), (15, 0.05)];

/// Probability that a safety issue is reported.
pub const SAFETY_ISSUE_P: f64 = 0.2;

/// Extra wait in minutes and its probability.
pub const DELAY_TABLE: [(u32, f64); 3] = [(0, 0.7), (3, 0.2), (8, 0.1)];

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AlertKind {
    Congestion,
    Safety,
    Delay,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Congestion => "congestion",
            AlertKind::Safety     => "safety",
            AlertKind::Delay      => "delay",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One monitor finding.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Alert {
    pub kind:    AlertKind,
    pub message: String,
}

impl Alert {
    fn congestion(minutes: u32) -> Self {
        Self {
            kind: AlertKind::Congestion,
            message: format!(
                "High congestion detected on your route. Estimated delay: {minutes} minutes"
            ),
        }
    }

    fn safety() -> Self {
        Self {
            kind: AlertKind::Safety,
            message: "Potential safety issues detected on your route".to_string(),
        }
    }

    fn delay(minutes: u32) -> Self {
        Self {
            kind: AlertKind::Delay,
            message: format!(
                "Service delays detected. Estimated additional wait time: {minutes} minutes"
            ),
        }
    }
}

/// Which alert kinds the user wants to hear about.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AlertToggles {
    pub congestion: bool,
    pub safety:     bool,
    pub delay:      bool,
}

impl AlertToggles {
    pub const ALL: AlertToggles = AlertToggles { congestion: true, safety: true, delay: true };

    pub fn allows(self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::Congestion => self.congestion,
            AlertKind::Safety     => self.safety,
            AlertKind::Delay      => self.delay,
        }
    }
}

impl Default for AlertToggles {
    fn default() -> Self {
        Self::ALL
    }
}

/// Stateless monitor.  The route is accepted for interface stability; the
/// simulation does not read it.
#[derive(Copy, Clone, Debug, Default)]
pub struct RouteMonitor;

impl RouteMonitor {
    pub fn new() -> Self {
        Self
    }

    /// Run all three checks and return the non-zero findings.
    pub fn monitor(&self, route: &RouteOption, rng: &mut dyn RandomSource) -> Vec<Alert> {
        let mut alerts = Vec::new();

        match pick_weighted(rng, &CONGESTION_TABLE) {
            Some(minutes) if minutes > 0 => alerts.push(Alert::congestion(minutes)),
            _ => {}
        }
        if rng.chance(SAFETY_ISSUE_P) {
            alerts.push(Alert::safety());
        }
        match pick_weighted(rng, &DELAY_TABLE) {
            Some(minutes) if minutes > 0 => alerts.push(Alert::delay(minutes)),
            _ => {}
        }

        log::debug!(
            "monitor {} -> {} (variant {}): {} alert(s)",
            route.origin,
            route.destination,
            route.variant,
            alerts.len()
        );
        alerts
    }

    /// [`monitor`](Self::monitor), keeping only kinds enabled in `toggles`.
    ///
    /// All three checks still draw, so the random stream advances the same
    /// way regardless of the toggles.
    pub fn monitor_filtered(
        &self,
        route: &RouteOption,
        toggles: AlertToggles,
        rng: &mut dyn RandomSource,
    ) -> Vec<Alert> {
        let mut alerts = self.monitor(route, rng);
        alerts.retain(|a| toggles.allows(a.kind));
        alerts
    }
}
