//! Minos - Test Runner for NetJudge
//!
//! Runs the program under test against every instance listed in a test
//! catalog, with a per-test timeout, and judges each run PASS, FAIL, ERR or
//! TIME by comparing result and expected line sets.

mod catalog;
mod config;
mod executor;
mod report;
mod verdict;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use netjudge_common::{HarnessResult, TokioCommandRunner};
use netjudge_common::console::Palette;
use netjudge_common::constants::{DEFAULT_TEST_LIST, DEFAULT_TIMEOUT_SECONDS};

use crate::config::RunnerConfig;
use crate::executor::Executor;
use crate::report::Report;

#[derive(Parser)]
#[command(name = "minos")]
#[command(version, about = "Run tests")]
struct Cli {
    /// Command to run
    program: PathBuf,

    /// List of test cases
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TEST_LIST)]
    list: PathBuf,

    /// Timeout of individual cases, in seconds
    #[arg(short, long, value_name = "T", default_value = DEFAULT_TIMEOUT_SECONDS)]
    timeout: String,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    netjudge_common::logging::init("minos=info,netjudge_common=info");

    if let Err(e) = run(Cli::parse()).await {
        tracing::debug!(code = e.code(), "Test run aborted");
        return Err(e.into());
    }
    Ok(())
}

async fn run(cli: Cli) -> HarnessResult<()> {
    let config = RunnerConfig::new(cli.program, cli.list, &cli.timeout)?;
    tracing::debug!("Timeout per test: {:?}", config.timeout);

    let entries = catalog::load_catalog(&config.test_list).await?;

    let palette = if cli.no_color {
        Palette::plain()
    } else {
        Palette::detect()
    };
    let mut report = Report::new(std::io::stdout(), palette);

    // Individual test failures are reported, not turned into an exit status
    Executor::new(TokioCommandRunner, config)
        .execute(&entries, &mut report)
        .await?;

    Ok(())
}
