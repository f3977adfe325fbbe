//! Label-to-path resolution with soft fallbacks.
//!
//! [`BasePathSource`] is the seam the route generator consumes: given two
//! location labels and a profile it yields a [`BasePath`] or nothing.
//! [`PathResolver`] is the production implementation:
//!
//! 1. Geocode both labels.  Either label unresolved → `None`.
//! 2. Ask the live [`Router`].
//! 3. If routing fails for any reason, log it and return the synthetic
//!    straight-line path between the two geocoded points instead.

use st_core::{GeoPoint, RoutingProfile};

use crate::{BasePath, Geocoder, Router, StraightLineRouter};

/// Anything that can turn `(origin, destination, profile)` into a base path.
pub trait BasePathSource {
    /// `None` means "no itinerary found".
    fn resolve(&self, origin: &str, destination: &str, profile: RoutingProfile) -> Option<BasePath>;
}

impl<T: BasePathSource + ?Sized> BasePathSource for &T {
    fn resolve(&self, origin: &str, destination: &str, profile: RoutingProfile) -> Option<BasePath> {
        (**self).resolve(origin, destination, profile)
    }
}

/// Geocoder + router + straight-line fallback.
pub struct PathResolver<G, R> {
    geocoder: G,
    router:   R,
    fallback: StraightLineRouter,
}

impl<G: Geocoder, R: Router> PathResolver<G, R> {
    pub fn new(geocoder: G, router: R) -> Self {
        Self { geocoder, router, fallback: StraightLineRouter::default() }
    }

    /// Replace the synthetic path used when live routing fails.
    pub fn with_fallback(mut self, fallback: StraightLineRouter) -> Self {
        self.fallback = fallback;
        self
    }

    /// Geocode one label; provider errors are logged and count as a miss.
    pub fn locate(&self, label: &str) -> Option<GeoPoint> {
        match self.geocoder.geocode(label) {
            Ok(Some(p)) => Some(p),
            Ok(None) => {
                log::info!("No geocoding result for \"{}\"", label);
                None
            }
            Err(e) => {
                log::warn!("Geocoding \"{}\" failed: {}", label, e);
                None
            }
        }
    }

    /// Route through several labelled waypoints in order.
    ///
    /// Unlike [`resolve`](BasePathSource::resolve) there is no straight-line
    /// fallback: any unresolved label or routing failure yields `None`.
    pub fn resolve_via(&self, labels: &[&str], profile: RoutingProfile) -> Option<BasePath> {
        let points = labels
            .iter()
            .map(|l| self.locate(l))
            .collect::<Option<Vec<_>>>()?;
        match self.router.route(&points, profile) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Routing via {} waypoints failed: {}", points.len(), e);
                None
            }
        }
    }
}

impl<G: Geocoder, R: Router> BasePathSource for PathResolver<G, R> {
    fn resolve(&self, origin: &str, destination: &str, profile: RoutingProfile) -> Option<BasePath> {
        let from = self.locate(origin)?;
        let to = self.locate(destination)?;

        match self.router.route(&[from, to], profile) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!(
                    "Routing {} → {} ({}) failed: {}; using synthetic path",
                    origin,
                    destination,
                    profile,
                    e
                );
                self.fallback.route(&[from, to], profile).ok()
            }
        }
    }
}
