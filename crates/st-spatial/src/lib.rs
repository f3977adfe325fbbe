//! `st-spatial` — geocoding, base-path routing, and fallbacks.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`path`]      | `BasePath` — one route geometry plus distance/duration         |
//! | [`geocode`]   | `Geocoder` trait, `NominatimGeocoder`, `FallbackGeocoder`, `StaticGeocoder` |
//! | [`router`]    | `Router` trait, `StraightLineRouter`                           |
//! | [`ors`]       | `OrsRouter` (OpenRouteService directions) and response parsing |
//! | [`resolver`]  | `BasePathSource` trait, `PathResolver`                         |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                             |
//!
//! # Failure model
//!
//! Collaborators that talk to the network return `SpatialResult`.  The
//! fallback layers (`FallbackGeocoder`, `PathResolver`) swallow those errors,
//! log them, and substitute placeholder coordinates or a straight-line path.
//! The only failure the route generator ever sees is "no base path".

pub mod error;
pub mod geocode;
pub mod ors;
pub mod path;
pub mod resolver;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use geocode::{FallbackGeocoder, Geocoder, NominatimGeocoder, StaticGeocoder, fallback_point};
pub use ors::OrsRouter;
pub use path::BasePath;
pub use resolver::{BasePathSource, PathResolver};
pub use router::{Router, StraightLineRouter};
