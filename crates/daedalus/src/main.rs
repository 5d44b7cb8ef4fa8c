//! Daedalus - Instance Generator for NetJudge
//!
//! Builds a random network instance directory: `network.json`,
//! `start.txt` and a placeholder `expected.txt`.

mod config;
mod generator;
mod random;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use netjudge_common::constants::PLACEHOLDER_EXPECTED_LINE;
use netjudge_common::{HarnessResult, InstanceLayout};

use crate::config::GeneratorConfig;
use crate::generator::GeneratedNetwork;
use crate::random::{RandomSource, RngSource};

#[derive(Parser)]
#[command(name = "daedalus")]
#[command(version, about = "Generate a random network instance")]
struct Cli {
    /// Instance name prefix
    prefix: String,

    /// Probability of each non-backbone edge (0..=1)
    probability: String,

    /// Number of vertices (at least 2)
    vertex_count: String,

    /// RNG seed (deterministic instance)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to create the instance in
    #[arg(long, default_value = ".")]
    into: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    netjudge_common::logging::init("daedalus=info,netjudge_common=info");

    if let Err(e) = run(Cli::parse()).await {
        tracing::debug!(code = e.code(), "Generation aborted");
        return Err(e.into());
    }
    Ok(())
}

async fn run(cli: Cli) -> HarnessResult<()> {
    let config = GeneratorConfig::new(
        cli.prefix,
        &cli.probability,
        &cli.vertex_count,
        cli.seed,
        cli.into,
    )?;

    let (dir, generated) = match config.seed {
        Some(seed) => build_instance(&config, &mut RngSource::seeded(seed)).await?,
        None => build_instance(&config, &mut RngSource::from_entropy()).await?,
    };

    println!(
        "Created {}: {} edges, controller {}, start {}",
        dir.display(),
        generated.network.rows.len(),
        generated.controller_vertex(),
        generated.start_vertex()
    );
    Ok(())
}

/// Generate a network and persist it as a new instance directory
async fn build_instance(
    config: &GeneratorConfig,
    rng: &mut dyn RandomSource,
) -> HarnessResult<(PathBuf, GeneratedNetwork)> {
    let generated = generator::generate(config.vertex_count, config.probability, rng)?;

    let dir = config.instance_dir();
    tracing::info!(
        "Generating {} (n = {}, p = {})",
        dir.display(),
        config.vertex_count,
        config.probability
    );

    InstanceLayout::new(&dir)
        .create(
            &generated.network,
            &generated.start_vertex(),
            &[PLACEHOLDER_EXPECTED_LINE],
        )
        .await?;

    Ok((dir, generated))
}
