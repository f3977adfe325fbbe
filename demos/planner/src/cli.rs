//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use st_core::PlannerConfig;

/// Route planner with simulated crowd, safety and live alerts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PlannerApp {
    /// OpenRouteService API key (overrides ORS_API_KEY)
    #[arg(long, global = true)]
    pub ors_key: Option<String>,

    /// SQLite file for history and preferences (overrides TRANSIT_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// RNG seed for reproducible output (overrides TRANSIT_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Never call external services; use the built-in place table and
    /// straight-line routes
    #[arg(long, global = true)]
    pub offline: bool,

    /// Username; defaults to the built-in default user
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub op: PlannerOperation,
}

#[derive(Subcommand, Debug)]
pub enum PlannerOperation {
    /// Rank route options between two places
    Plan {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Bus, Train, Multi-modal or Walking
        #[arg(short, long, default_value = "Bus")]
        mode: String,

        /// Fastest, Least Crowded, Safest or Balanced
        #[arg(short, long, default_value = "Fastest")]
        priority: String,

        /// Run the simulated monitor on the top option
        #[arg(long)]
        monitor: bool,

        /// Store the top option in the travel history
        #[arg(long)]
        save: bool,
    },

    /// Position along the top option at a journey progress (0–100 %)
    Track {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long)]
        progress: f64,
    },

    /// Travel history with summary statistics
    History {
        /// Also write the history to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show preferences, or set one key
    Prefs {
        /// Preference key, e.g. safety_alerts
        key: Option<String>,

        /// New value, parsed as JSON when possible (true, 12, "text")
        value: Option<String>,
    },

    /// Send the emergency alert
    Sos,
}

impl PlannerApp {
    /// Environment configuration with command-line overrides applied.
    pub fn config(&self, mut config: PlannerConfig) -> PlannerConfig {
        if let Some(key) = &self.ors_key {
            config.ors_api_key = Some(key.clone());
        }
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.offline {
            config.ors_api_key = None;
        }
        config
    }
}
