//! Planner configuration.
//!
//! Loaded from environment variables by the application crate and passed to
//! the collaborators it builds.  Every field has a usable default, so an
//! empty environment yields an offline-capable configuration (no API key →
//! the demo falls back to the straight-line router).
//!
//! | Variable        | Field               | Default                                  |
//! |-----------------|---------------------|------------------------------------------|
//! | `ORS_API_KEY`   | `ors_api_key`       | none                                     |
//! | `ORS_BASE_URL`  | `ors_base_url`      | `https://api.openrouteservice.org`       |
//! | `NOMINATIM_URL` | `nominatim_url`     | `https://nominatim.openstreetmap.org`    |
//! | `TRANSIT_DB`    | `db_path`           | `transit.db`                             |
//! | `TRANSIT_SEED`  | `seed`              | none (entropy)                           |
//! | `HTTP_TIMEOUT`  | `http_timeout_secs` | `15`                                     |

use std::path::PathBuf;

use crate::{CoreError, CoreResult};

pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// OpenRouteService API key.  `None` disables live routing.
    pub ors_api_key: Option<String>,
    pub ors_base_url: String,
    pub nominatim_url: String,
    /// SQLite file holding history and preferences.
    pub db_path: PathBuf,
    /// Master RNG seed.  The same seed always produces identical draws.
    pub seed: Option<u64>,
    pub http_timeout_secs: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ors_api_key:       None,
            ors_base_url:      DEFAULT_ORS_BASE_URL.to_string(),
            nominatim_url:     DEFAULT_NOMINATIM_URL.to_string(),
            db_path:           PathBuf::from("transit.db"),
            seed:              None,
            http_timeout_secs: 15,
        }
    }
}

impl PlannerConfig {
    /// Build from the process environment.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.  Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        cfg.ors_api_key = get("ORS_API_KEY");
        if let Some(url) = get("ORS_BASE_URL") {
            cfg.ors_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = get("NOMINATIM_URL") {
            cfg.nominatim_url = url.trim_end_matches('/').to_string();
        }
        if let Some(path) = get("TRANSIT_DB") {
            cfg.db_path = PathBuf::from(path);
        }
        if let Some(raw) = get("TRANSIT_SEED") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| CoreError::Config(format!("TRANSIT_SEED={raw:?}: {e}")))?;
            cfg.seed = Some(seed);
        }
        if let Some(raw) = get("HTTP_TIMEOUT") {
            cfg.http_timeout_secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| CoreError::Config(format!("HTTP_TIMEOUT={raw:?}: {e}")))?;
        }

        Ok(cfg)
    }
}
