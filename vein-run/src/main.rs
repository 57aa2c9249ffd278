//! Headless driver for the leaf venation simulation.
//!
//! Loads a [`SimConfig`] (TOML file or built-in defaults), runs the tick
//! loop for a fixed number of steps and logs growth statistics along the
//! way. All rendering and windowing concerns live outside this repository;
//! a display layer would consume the same per-tick exports this binary
//! only counts.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::fs;
use std::path::PathBuf;
use vein_core::{config::SimConfig, sim::Simulation};

#[derive(Parser, Debug)]
#[command(name = "vein-run", about = "Headless leaf venation growth simulation")]
struct Args {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of simulation ticks to run.
    #[arg(short, long, default_value_t = 500)]
    ticks: u32,

    /// Seed for the sampling RNG; the same seed reproduces the same run.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Log a statistics line every N ticks.
    #[arg(long, default_value_t = 50)]
    report_every: u32,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(SimConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = load_config(&args)?;
    debug!("config: {cfg:#?}");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut sim = Simulation::new(cfg);
    info!(
        "margin initialized with {} points, vein root at {}",
        sim.margin_points().len(),
        sim.margin().anchor(),
    );

    let report_every = args.report_every.max(1);
    let mut consumed_total = 0usize;

    for tick in 1..=args.ticks {
        let stats = sim.step(&mut rng);
        consumed_total += stats.sources_consumed;

        if tick % report_every == 0 {
            info!(
                "tick {tick}: {} nodes (+{}), {} live sources (+{} spawned, -{} consumed), unit {:.4}",
                sim.tree().len(),
                stats.nodes_added,
                sim.sources().len(),
                stats.sources_spawned,
                stats.sources_consumed,
                sim.clock().unit_distance,
            );
        }
    }

    info!(
        "done after {} ticks: {} vein nodes, {} edges, {} live sources, {} consumed in total",
        args.ticks,
        sim.tree().len(),
        sim.edges().len(),
        sim.sources().len(),
        consumed_total,
    );
    Ok(())
}
