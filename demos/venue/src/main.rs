//! venue: route a visitor around the bundled water-park venue.
//!
//! Simulates a visitor tapping an NFC plate and asking for directions to
//! every point of interest, once with any path allowed and once step-free
//! only, then lists the closest destination of each quick-access category
//! and the two nearest help points for the emergency screen.
//!
//! Environment:
//!
//! | Variable    | Effect                                            |
//! |-------------|---------------------------------------------------|
//! | `RUST_LOG`  | log filter (default `info`)                       |
//! | `WF_VENUE`  | path to a venue JSON dataset (default: bundled)   |
//! | `WF_CONFIG` | path to a configuration JSON (default: built-in)  |
//! | `WF_PLATE`  | NFC plate code to start from (default `PLACA-A12`)|

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use wf_core::{AccessMode, GeoProjector, Language, PoiKind, WayfindingConfig};
use wf_route::{RouteService, load_config_json, nearest_pois};
use wf_spatial::{Venue, load_venue_json, load_venue_str};

// ── Constants ─────────────────────────────────────────────────────────────────

const BUNDLED_VENUE: &str = include_str!("../../../data/venue.json");
const DEFAULT_PLATE: &str = "PLACA-A12";
const LANG:          Language = Language::En;

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_venue() -> Result<Venue> {
    match std::env::var_os("WF_VENUE").map(PathBuf::from) {
        Some(path) => load_venue_json(&path)
            .with_context(|| format!("loading venue from {}", path.display())),
        None => load_venue_str(BUNDLED_VENUE).context("loading bundled venue"),
    }
}

fn load_config() -> Result<WayfindingConfig> {
    match std::env::var_os("WF_CONFIG").map(PathBuf::from) {
        Some(path) => load_config_json(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(WayfindingConfig::default()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let venue  = load_venue()?;
    let config = load_config()?;
    let svc    = RouteService::with_dijkstra(venue.graph.clone(), GeoProjector::new(config.display)?);

    let plate_code = std::env::var("WF_PLATE").unwrap_or_else(|_| DEFAULT_PLATE.to_owned());
    let plate = venue
        .sign(&plate_code)
        .with_context(|| format!("unknown NFC plate {plate_code}"))?;
    let origin = plate.location();
    tracing::info!(plate = %plate.code, zone = %plate.zone, %origin, "visitor located");

    println!("=== venue: wayfinding from {} ({}) ===", plate.name.get(LANG), plate.code);
    println!(
        "Graph: {} nodes, {} edges ({} step-free)  |  Walking speed: {} km/h",
        svc.graph().node_count(),
        svc.graph().edge_count(),
        svc.graph().permitted_edge_count(AccessMode::StepFree),
        config.walking.kmh,
    );
    println!();

    // 1. Every POI, both access modes.
    let t0 = Instant::now();
    let any       = svc.route_many(origin, &venue.pois, AccessMode::Any);
    let step_free = svc.route_many(origin, &venue.pois, AccessMode::StepFree);
    let elapsed = t0.elapsed();

    println!("{:<34} {:<10} {:>14} {:>14}", "Destination", "Kind", "Any", "Step-free");
    println!("{}", "-".repeat(75));
    for ((poi, a), s) in venue.pois.iter().zip(&any).zip(&step_free) {
        let fmt = |r: &Result<wf_route::RouteResult, wf_route::RouteError>| match r {
            Ok(route) => format!(
                "{:>5.0} m {:>2} min",
                route.total_distance_m,
                route.walk_minutes(config.walking)
            ),
            Err(e) if e.is_no_route() => "no route".to_owned(),
            Err(e) => format!("error: {e}"),
        };
        println!(
            "{:<34} {:<10} {:>14} {:>14}",
            poi.name.get(LANG),
            poi.kind.attrs().label(LANG),
            fmt(a),
            fmt(s),
        );
    }
    println!();
    println!("Routed {} requests in {:.3} ms", any.len() + step_free.len(), elapsed.as_secs_f64() * 1e3);
    println!();

    // 2. Quick-access categories: nearest reachable destination of each.
    println!("{:<12} {:>5} {:<34} {:>8} {:>8}", "Category", "Count", "Closest (step-free)", "Metres", "Points");
    println!("{}", "-".repeat(71));
    for kind in PoiKind::known().filter(|k| k.attrs().critical) {
        let label = kind.attrs().label(LANG);
        let count = venue.pois_of_kind(&kind).count();
        match svc.closest(origin, &venue.pois, &kind, AccessMode::StepFree) {
            Some((poi, route)) => println!(
                "{:<12} {:>5} {:<34} {:>8.0} {:>8}",
                label,
                count,
                poi.name.get(LANG),
                route.total_distance_m,
                route.points.len(),
            ),
            None => println!("{label:<12} {count:>5} {:<34}", "-"),
        }
    }
    println!();

    // 3. Emergency screen: nearest help points as the crow flies.
    println!("Nearest help points:");
    let help = [PoiKind::AssemblyPoint, PoiKind::FirstAid];
    for (poi, metres) in nearest_pois(origin, &venue.pois, &help, Some(2)) {
        println!("  {:<34} {:>6.0} m", poi.name.get(LANG), metres);
    }

    Ok(())
}
