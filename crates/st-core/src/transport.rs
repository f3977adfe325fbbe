//! Transport modes offered to the user and the routing profiles they map to.
//!
//! The directions provider only knows road profiles.  Transit modes are
//! therefore routed on the car profile as an approximation; the mapping
//! lives in one table, [`PROFILE_TABLE`], so plugging in a real transit
//! router later is a one-row change per mode.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The way the user wants to travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    #[default]
    Bus,
    Train,
    /// Any combination of the above, chosen by the planner.
    MultiModal,
    Walking,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::MultiModal,
        TransportMode::Walking,
    ];

    /// Human-readable label, as shown in the mode picker.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Bus        => "Bus",
            TransportMode::Train      => "Train",
            TransportMode::MultiModal => "Multi-modal",
            TransportMode::Walking    => "Walking",
        }
    }

    /// Routing profile used to resolve the base path for this mode.
    pub fn profile(self) -> RoutingProfile {
        lookup(self).1
    }

    /// `true` when the profile only approximates the mode (transit on roads).
    pub fn is_approximated(self) -> bool {
        lookup(self).2
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = CoreError;

    /// Accepts the display labels case-insensitively, plus a few aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bus"                                 => Ok(TransportMode::Bus),
            "train" | "rail"                      => Ok(TransportMode::Train),
            "multi-modal" | "multimodal" | "multi" => Ok(TransportMode::MultiModal),
            "walking" | "walk" | "foot"           => Ok(TransportMode::Walking),
            _ => Err(CoreError::UnknownMode(s.to_string())),
        }
    }
}

// ── RoutingProfile ────────────────────────────────────────────────────────────

/// Profiles understood by the directions provider.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutingProfile {
    DrivingCar,
    FootWalking,
}

impl RoutingProfile {
    /// Path segment used by the OpenRouteService directions endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingProfile::DrivingCar  => "driving-car",
            RoutingProfile::FootWalking => "foot-walking",
        }
    }
}

impl fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Approximation table ───────────────────────────────────────────────────────

/// `(mode, profile, approximated)` for every mode.
///
/// Known limitation: bus, train and multi-modal trips are routed on the car
/// network, so their geometry follows roads and their durations are car
/// durations.
pub const PROFILE_TABLE: [(TransportMode, RoutingProfile, bool); 4] = [
    (TransportMode::Bus,        RoutingProfile::DrivingCar,  true),
    (TransportMode::Train,      RoutingProfile::DrivingCar,  true),
    (TransportMode::MultiModal, RoutingProfile::DrivingCar,  true),
    (TransportMode::Walking,    RoutingProfile::FootWalking, false),
];

fn lookup(mode: TransportMode) -> (TransportMode, RoutingProfile, bool) {
    PROFILE_TABLE
        .iter()
        .copied()
        .find(|(m, _, _)| *m == mode)
        // Every mode has a row.
        .unwrap_or((mode, RoutingProfile::DrivingCar, true))
}
