//! Configuration for the Chronos benchmark runner

use std::path::PathBuf;

use netjudge_common::{HarnessError, HarnessResult, InstanceLayout};

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Program under test
    pub program: PathBuf,

    /// Instance directory and the file names passed to the program
    pub layout: InstanceLayout,

    /// Number of back-to-back runs
    pub repeats: u32,
}

impl BenchConfig {
    pub fn new(program: PathBuf, layout: InstanceLayout, repeats: &str) -> HarnessResult<Self> {
        Ok(Self {
            program,
            layout,
            repeats: parse_repeats(repeats)?,
        })
    }
}

/// Parse a positive iteration count
pub fn parse_repeats(raw: &str) -> HarnessResult<u32> {
    let repeats: u32 = raw.trim().parse().map_err(|_| {
        HarnessError::invalid_argument(format!("Repeats argument is not a number: {}", raw))
    })?;

    if repeats == 0 {
        return Err(HarnessError::invalid_argument(
            "Repeats argument must be at least 1",
        ));
    }
    Ok(repeats)
}
