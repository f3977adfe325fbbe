//! `st-core` — foundational types for the `smart_transit` route planner.
//!
//! This crate is a dependency of every other `st-*` crate.  It has no `st-*`
//! dependencies and few external ones (`rand`, `chrono`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `UserId`, `HistoryId`                                   |
//! | [`geo`]       | `GeoPoint`, interpolation, nudging                      |
//! | [`time`]      | `Clock` trait, `SystemClock`, `FixedClock`              |
//! | [`rng`]       | `RandomSource` trait, `PlannerRng`, `ScriptedSource`    |
//! | [`transport`] | `TransportMode`, `RoutingProfile`, `PROFILE_TABLE`      |
//! | [`priority`]  | `Priority` (route ranking key)                          |
//! | [`config`]    | `PlannerConfig`                                         |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod priority;
pub mod rng;
pub mod time;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{HistoryId, UserId};
pub use priority::Priority;
pub use rng::{PlannerRng, RandomSource, ScriptedSource, pick_weighted};
pub use time::{Clock, FixedClock, SystemClock};
pub use transport::{PROFILE_TABLE, RoutingProfile, TransportMode};
