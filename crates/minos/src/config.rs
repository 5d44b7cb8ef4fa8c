//! Configuration for the Minos test runner

use std::path::PathBuf;
use std::time::Duration;

use netjudge_common::{HarnessError, HarnessResult};

/// Test runner configuration built from command-line arguments
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Program under test
    pub program: PathBuf,

    /// Catalog of instance directories
    pub test_list: PathBuf,

    /// Wall-clock limit per test
    pub timeout: Duration,
}

impl RunnerConfig {
    pub fn new(program: PathBuf, test_list: PathBuf, timeout: &str) -> HarnessResult<Self> {
        Ok(Self {
            program,
            test_list,
            timeout: parse_timeout(timeout)?,
        })
    }
}

/// Parse a non-negative number of seconds
pub fn parse_timeout(raw: &str) -> HarnessResult<Duration> {
    let not_a_number =
        || HarnessError::invalid_argument(format!("Timeout argument is not a number: {}", raw));

    let seconds: f64 = raw.trim().parse().map_err(|_| not_a_number())?;
    Duration::try_from_secs_f64(seconds).map_err(|_| not_a_number())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("1").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_timeout("0.25").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_timeout("0").unwrap(), Duration::ZERO);

        for raw in ["soon", "", "-1", "NaN", "inf"] {
            assert!(
                matches!(parse_timeout(raw), Err(HarnessError::InvalidArgument(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_bare_program_name_is_kept() {
        let config =
            RunnerConfig::new("solver".into(), "test_list.txt".into(), "2").unwrap();
        assert_eq!(config.program, PathBuf::from("solver"));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_relative_program_path_is_kept() {
        let config =
            RunnerConfig::new("./solver".into(), "test_list.txt".into(), "1").unwrap();
        assert_eq!(config.program, PathBuf::from("./solver"));
    }
}
