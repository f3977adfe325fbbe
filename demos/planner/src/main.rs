//! planner — command-line front end for the smart_transit crates.
//!
//! Resolves a base route (OpenRouteService when an API key is configured,
//! a straight line otherwise), ranks the simulated options, and optionally
//! monitors, announces and saves the chosen one.
//!
//!   planner plan --from Andheri --to Churchgate --priority "Least Crowded" --monitor --save
//!   planner --offline --seed 42 plan --from Dadar --to Bandra
//!   planner history --csv history.csv
//!   planner prefs safety_alerts false

mod cli;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use st_agent::alert::{dispatch_all, send_sos};
use st_agent::voice::{announce, route_summary};
use st_agent::{LogDispatcher, LogVoice, RouteAgent, RouteMonitor, RouteOption, RouteRequest, SimulatedCrowd};
use st_core::{PlannerConfig, PlannerRng, Priority, SystemClock, TransportMode, UserId};
use st_spatial::{
    FallbackGeocoder, Geocoder, NominatimGeocoder, OrsRouter, PathResolver, Router,
    StaticGeocoder, StraightLineRouter,
};
use st_store::{Preferences, TransitStore, export_history_csv, summary};

use cli::{PlannerApp, PlannerOperation};

type LiveResolver = PathResolver<Box<dyn Geocoder>, Box<dyn Router>>;
type LiveAgent = RouteAgent<LiveResolver, SimulatedCrowd<SystemClock>, SystemClock>;

fn main() -> Result<()> {
    init_logger();
    let app = PlannerApp::parse();
    let config = app.config(PlannerConfig::from_env()?);

    let store = TransitStore::open(&config.db_path)
        .with_context(|| format!("opening {}", config.db_path.display()))?;
    let user = match &app.user {
        Some(name) => store.ensure_user(name)?,
        None => UserId::DEFAULT,
    };
    let mut rng = PlannerRng::seeded_or_entropy(config.seed);

    match &app.op {
        PlannerOperation::Plan { from, to, mode, priority, monitor, save } => {
            let request = RouteRequest::parse(from, to, mode, priority)?;
            let agent = build_agent(&config, app.offline)?;
            let options = recommend(&agent, &request, &mut rng)?;
            println!("{}", serde_json::to_string_pretty(&options)?);

            let prefs = store.preferences(user)?;
            let top = options.first().context("no route options")?;
            announce(
                &LogVoice::default(),
                prefs.voice_guidance,
                &route_summary(&request.origin, &request.destination, top),
            );

            if *monitor {
                let alerts = RouteMonitor::new().monitor_filtered(top, prefs.alert_toggles(), &mut rng);
                let records = dispatch_all(&LogDispatcher::new(SystemClock), &alerts);
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
            if *save {
                let id = store.save_route(user, &request.origin, &request.destination, top)?;
                log::info!("Route saved to history as {id}");
            }
        }

        PlannerOperation::Track { from, to, progress } => {
            let request = RouteRequest::new(from.as_str(), to.as_str(), TransportMode::Bus, Priority::Fastest)?;
            let agent = build_agent(&config, app.offline)?;
            let options = recommend(&agent, &request, &mut rng)?;
            let top = options.first().context("no route options")?;
            match top.position_at(*progress) {
                Some(p) => println!("{:.0}% complete: {p}", progress.clamp(0.0, 100.0)),
                None => bail!("route has no geometry"),
            }
        }

        PlannerOperation::History { csv } => {
            let entries = store.history(user)?;
            for e in &entries {
                println!(
                    "{}  {} -> {}  {} min",
                    e.timestamp, e.start_location, e.end_location, e.travel_time_min
                );
            }
            println!("{}", serde_json::to_string_pretty(&summary(&entries))?);
            if let Some(path) = csv {
                export_history_csv(&entries, path)?;
                log::info!("History exported to {}", path.display());
            }
        }

        PlannerOperation::Prefs { key, value } => {
            let prefs = store.preferences(user)?;
            match (key, value) {
                (None, _) => println!("{}", serde_json::to_string_pretty(&prefs)?),
                (Some(key), None) => {
                    let all = serde_json::to_value(&prefs)?;
                    println!("{key} = {}", all.get(key.as_str()).unwrap_or(&serde_json::Value::Null));
                }
                (Some(key), Some(value)) => {
                    let updated = set_preference(&prefs, key, value)?;
                    store.save_preferences(user, &updated)?;
                    log::info!("Preferences saved successfully!");
                }
            }
        }

        PlannerOperation::Sos => {
            let record = send_sos(&LogDispatcher::new(SystemClock));
            let prefs = store.preferences(user)?;
            if prefs.has_emergency_contact() {
                log::info!("Emergency contact {} notified", prefs.emergency_contact);
            }
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

/// Stderr logger at `info` unless `RUST_LOG` says otherwise.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_target(false)
        .init();
}

fn build_agent(config: &PlannerConfig, offline: bool) -> Result<LiveAgent> {
    let timeout = Duration::from_secs(config.http_timeout_secs);

    let geocoder: Box<dyn Geocoder> = if offline {
        Box::new(StaticGeocoder::builtin())
    } else {
        Box::new(FallbackGeocoder::new(NominatimGeocoder::new(&config.nominatim_url, timeout)?))
    };
    let router: Box<dyn Router> = match &config.ors_api_key {
        Some(key) => Box::new(OrsRouter::new(key, &config.ors_base_url, timeout)?),
        None => {
            log::info!("No ORS API key configured; using straight-line routes");
            Box::new(StraightLineRouter::default())
        }
    };

    let clock = SystemClock;
    Ok(RouteAgent::new(
        PathResolver::new(geocoder, router),
        SimulatedCrowd::new(clock),
        clock,
    ))
}

fn recommend(agent: &LiveAgent, request: &RouteRequest, rng: &mut PlannerRng) -> Result<Vec<RouteOption>> {
    match agent.plan(request, rng) {
        Some(options) => Ok(options),
        None => bail!(
            "Could not find routes between {} and {}",
            request.origin,
            request.destination
        ),
    }
}

/// Set one key, keeping every other key (known or not) as it was.
fn set_preference(prefs: &Preferences, key: &str, raw: &str) -> Result<Preferences> {
    let parsed = serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
    let mut all = serde_json::to_value(prefs)?;
    let map = all.as_object_mut().context("preferences are not a JSON object")?;
    map.insert(key.to_string(), parsed);
    serde_json::from_value(all).with_context(|| format!("invalid value {raw:?} for {key}"))
}
