use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use render::{render_map, render_trend};
use std::path::PathBuf;
use store::JsonStore;
use workflow::config::SimulationConfig;
use workflow::runner::Runner;

mod render;
mod store;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Wi-Fi hotspot placement and channel-optimization driver")]
struct Args {
    /// Load a simulation config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 5000.0)]
    area_size: f64,
    #[arg(long, default_value_t = 1000)]
    hotspots: usize,
    #[arg(long, default_value_t = 50.0)]
    min_distance: f64,
    #[arg(long, default_value_t = 275.0)]
    interference_distance: f64,
    #[arg(long, default_value_t = 5)]
    channels: u8,
    #[arg(long, default_value_t = 10_000)]
    max_attempts: usize,
    #[arg(long, default_value_t = 100)]
    max_iterations: usize,
    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Directory for placements and rendered charts
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

impl Args {
    fn to_config(&self) -> anyhow::Result<SimulationConfig> {
        if let Some(path) = &self.config {
            return SimulationConfig::load(path);
        }
        Ok(SimulationConfig {
            area_size: self.area_size,
            num_hotspots: self.hotspots,
            min_distance: self.min_distance,
            interference_distance: self.interference_distance,
            num_channels: self.channels,
            max_attempts: self.max_attempts,
            max_iterations: self.max_iterations,
            seed: self.seed,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.to_config()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let runner = Runner::new(config.clone());
    let store = JsonStore::new(&args.output_dir);

    let hotspots = runner.generate(&mut rng).context("generating placement")?;
    store
        .save(&hotspots, "hotspots")
        .context("saving initial placement")?;

    let mut hotspots = store
        .load("hotspots")
        .context("loading initial placement")?;
    let outcome = runner.optimize(&mut hotspots, &mut rng);

    render_trend(&outcome.trend, &args.output_dir.join("interference_trend.svg"))
        .context("rendering interference trend")?;
    render_map(
        &hotspots,
        &outcome.final_report,
        config.area_size,
        config.num_channels,
        &args.output_dir.join("hotspot_map.svg"),
    )
    .context("rendering hotspot map")?;

    store
        .save(&hotspots, "hotspots_optimized")
        .context("saving optimized placement")?;
    let trend_json =
        serde_json::to_string_pretty(&outcome.trend).context("serializing trend")?;
    std::fs::write(args.output_dir.join("interference_trend.json"), trend_json)
        .context("writing trend history")?;

    println!(
        "Run complete -> {} hotspots, {} iterations, {} interfering pairs remaining ({})",
        hotspots.len(),
        outcome.trend.len(),
        outcome.final_report.pairs.len(),
        if outcome.trend.converged() {
            "converged"
        } else {
            "budget exhausted"
        }
    );

    Ok(())
}
