//! city — interactive least-time routing through a signalised road network.
//!
//! Loads a city snapshot (or the built-in sample), then runs a text menu for
//! rebuilding the city, listing it, finding the fastest route between two
//! junctions and exporting GraphViz, Leaflet and itinerary files.
//!
//! ```text
//! city [--config city.toml] [--snapshot city_data.txt] [--capacity 50] [--sample] [-v]
//! ```
//!
//! Log verbosity follows `RUST_LOG`; each `-v` raises the default level.

mod input;
mod menu;
mod network;


use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tl_core::CityConfig;
use tl_network::load_snapshot;

use menu::{Exit, Session};

#[derive(Parser, Debug)]
#[command(name = "city", version, about = "Least-time routing through traffic-light junctions")]
struct Args {
    /// TOML file with session settings; missing keys use defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// City snapshot to load and save (overrides the config file).
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Maximum number of junctions (overrides the config file).
    #[arg(long)]
    capacity: Option<usize>,

    /// Start from the built-in sample city instead of the snapshot.
    #[arg(long)]
    sample: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(&args)?;
    config.validate()?;

    let graph = if args.sample {
        network::sample_city(config.capacity)?
    } else {
        load_snapshot(&config.snapshot_path, config.capacity)
            .with_context(|| format!("loading {}", config.snapshot_path.display()))?
    };

    println!("=== SMART TRAFFIC MANAGEMENT SYSTEM (AdjList + PQ + India Map) ===");
    let mut session = Session::new(config, graph, io::stdin().lock(), io::stdout().lock());
    let exit = session.run()?;
    info!("session ended: {exit:?}");
    Ok(())
}

/// Config file (if any), then command-line overrides.
fn load_config(args: &Args) -> Result<CityConfig> {
    let mut config = match &args.config {
        Some(path) => parse_config(
            &fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        )
        .with_context(|| format!("parsing {}", path.display()))?,
        None => CityConfig::default(),
    };
    if let Some(snapshot) = &args.snapshot {
        config.snapshot_path = snapshot.clone();
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    Ok(config)
}

fn parse_config(text: &str) -> Result<CityConfig> {
    Ok(toml::from_str(text)?)
}
