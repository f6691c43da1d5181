//! Grid conquest driver
//!
//! Builds random occupancy worlds, runs conquests with per-empire growth
//! algorithms, renders the final grids to PNG, and writes JSON reports.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use grid_conquest::conquest::ExpansionEngine;
use grid_conquest::core::config::RunConfig;
use grid_conquest::core::error::Result;
use grid_conquest::core::types::EmpireId;
use grid_conquest::{render, report, worldgen};

/// Competitive territorial expansion over random occupancy grids
#[derive(Parser, Debug)]
#[command(name = "grid-conquest")]
#[command(about = "Run empire conquest simulations and report the results")]
struct Args {
    /// World width in cells
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// World height in cells
    #[arg(long, default_value_t = 100)]
    height: usize,

    /// Fraction of the grid that is part of the world
    #[arg(long, default_value_t = 0.6)]
    coverage: f64,

    /// Number of competing empires per run
    #[arg(long, default_value_t = 5)]
    empires: u32,

    /// Turns per conquest run
    #[arg(long, default_value_t = 25000)]
    turns: u32,

    /// Number of multi-empire runs to aggregate over
    #[arg(long, default_value_t = 5)]
    runs: u32,

    /// Random seed for deterministic output
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Output directory for images and reports
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("grid_conquest=info")
        .init();

    let args = Args::parse();
    let config = RunConfig {
        width: args.width,
        height: args.height,
        coverage: args.coverage,
        empires: args.empires,
        turns: args.turns,
        seed: args.seed,
    };
    config.validate()?;
    fs::create_dir_all(&args.out_dir)?;

    let mut world_rng = ChaCha8Rng::seed_from_u64(config.seed);

    // Showcase: one empire per algorithm, each on its own copy of one world.
    let showcase = worldgen::build_flood(config.width, config.height, config.coverage, &mut world_rng)?;
    for algorithm in 1..=3u8 {
        let mut engine = ExpansionEngine::new(
            showcase.clone(),
            config.seed.wrapping_add(u64::from(algorithm)),
        );
        let mapping = BTreeMap::from([(EmpireId(u32::from(algorithm)), algorithm)]);
        engine.conquer(&mapping, config.turns)?;

        let path = args.out_dir.join(format!("conquer{algorithm}_final.png"));
        render::draw_ownership(engine.ownership(), &path)?;
        tracing::info!("algorithm {} showcase rendered to {}", algorithm, path.display());
    }

    // Aggregate runs: a fresh world per run, algorithms assigned round-robin.
    let mut records = Vec::new();
    for run in 1..=args.runs {
        let world =
            worldgen::build_flood(config.width, config.height, config.coverage, &mut world_rng)?;
        let mapping: BTreeMap<EmpireId, u8> = (1..=config.empires)
            .map(|empire| (EmpireId(empire), ((empire - 1) % 3 + 1) as u8))
            .collect();

        let mut engine = ExpansionEngine::new(
            world,
            config.seed.wrapping_add(u64::from(run) * 1000),
        );
        engine.conquer(&mapping, config.turns)?;

        let standings = engine.standings();
        records.extend(report::records_for_run(
            run,
            &format!("world_{run}"),
            &mapping,
            &standings,
        ));
        tracing::info!("run {} finished with {} empires", run, mapping.len());
    }

    report::write_json(&records, &args.out_dir.join("conquest_results.json"))?;
    let summary = report::algorithm_summary(&records);
    report::write_json(&summary, &args.out_dir.join("algorithm_statistics.json"))?;

    println!(
        "Conquest complete: {} runs, {} records",
        args.runs,
        records.len()
    );
    for entry in &summary {
        println!(
            "algorithm {}: mean size {:.1}, mean share {:.2}%",
            entry.algorithm, entry.mean_size, entry.mean_percentage
        );
    }

    Ok(())
}
