//! `st-agent` — route option generation and simulated route monitoring.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`generator`] | `RouteAgent` — enhance, vary, sort; `RouteRequest`              |
//! | [`option`]    | `RouteOption`, `CrowdBand`                                      |
//! | [`variant`]   | Per-variant multipliers and coordinate perturbation             |
//! | [`crowd`]     | `CrowdSource` trait, `SimulatedCrowd`                           |
//! | [`safety`]    | Time-of-day safety score draw                                   |
//! | [`steps`]     | Five-step itinerary template                                    |
//! | [`monitor`]   | `RouteMonitor`, `Alert`, `AlertKind`, `AlertToggles`            |
//! | [`alert`]     | `AlertDispatcher` trait, `LogDispatcher`, `AlertRecord`         |
//! | [`voice`]     | `VoicePlayer` trait, `LogVoice`, spoken route summary           |
//! | [`tracking`]  | Position along a route for a given journey progress             |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                                  |
//!
//! # Randomness
//!
//! Nothing here owns a generator.  Every operation that draws takes
//! `&mut dyn RandomSource`, so a seeded `PlannerRng` reproduces a run and a
//! `ScriptedSource` pins individual outcomes.

pub mod alert;
pub mod crowd;
pub mod error;
pub mod generator;
pub mod monitor;
pub mod option;
pub mod safety;
pub mod steps;
pub mod tracking;
pub mod variant;
pub mod voice;


pub use alert::{AlertCategory, AlertDispatcher, AlertRecord, LogDispatcher};
pub use crowd::{CrowdSource, SimulatedCrowd};
pub use error::{AgentError, AgentResult};
pub use generator::{RouteAgent, RouteRequest, rank};
pub use monitor::{Alert, AlertKind, AlertToggles, RouteMonitor};
pub use option::{CrowdBand, RouteOption};
pub use voice::{LogVoice, VoicePlayer};
