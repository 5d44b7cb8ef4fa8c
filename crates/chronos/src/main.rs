//! Chronos - Benchmark Runner for NetJudge
//!
//! A very simple and unscientific benchmark: runs the program under test
//! repeatedly against one instance and reports total and average wall-clock
//! time. Output is not checked.

mod bench;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use netjudge_common::constants::{
    DEFAULT_REPEATS, NETWORK_FILENAME, RESULT_FILENAME, START_FILENAME,
};
use netjudge_common::{HarnessResult, InstanceLayout, TokioCommandRunner};

use crate::bench::Benchmark;
use crate::config::BenchConfig;

#[derive(Parser)]
#[command(name = "chronos")]
#[command(version, about = "Run a very simple and unscientific benchmark")]
struct Cli {
    /// Command to run
    program: PathBuf,

    /// Folder containing a network file and a starting points file
    instance: PathBuf,

    /// Number of repeats
    #[arg(short, long, value_name = "N", default_value = DEFAULT_REPEATS)]
    repeats: String,

    /// Filename of the network
    #[arg(short, long, value_name = "FILE", default_value = NETWORK_FILENAME)]
    network: String,

    /// Filename of the starting points
    #[arg(short, long, value_name = "FILE", default_value = START_FILENAME)]
    start: String,

    /// Filename the program writes its result to, overwritten every run
    #[arg(long, value_name = "FILE", default_value = RESULT_FILENAME)]
    result: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    netjudge_common::logging::init("chronos=info,netjudge_common=info");

    if let Err(e) = run(Cli::parse()).await {
        tracing::debug!(code = e.code(), "Benchmark aborted");
        return Err(e.into());
    }
    Ok(())
}

async fn run(cli: Cli) -> HarnessResult<()> {
    let layout = InstanceLayout::new(&cli.instance)
        .with_network_file(cli.network)
        .with_start_file(cli.start)
        .with_result_file(cli.result);
    let config = BenchConfig::new(cli.program, layout, &cli.repeats)?;

    println!("Testing: {}", config.program.display());
    println!("Running {} ...", config.layout.dir.display());
    tracing::info!("{} repeats", config.repeats);

    let report = Benchmark::new(TokioCommandRunner, config).run().await?;

    print!("{}", report.render());
    Ok(())
}
