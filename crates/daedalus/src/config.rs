//! Generator configuration built from command-line arguments

use std::path::PathBuf;

use netjudge_common::constants::MIN_VERTEX_COUNT;
use netjudge_common::{HarnessError, HarnessResult};

use crate::generator::instance_name;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Instance name prefix
    pub prefix: String,
    /// Probability of each non-backbone edge
    pub probability: f64,
    /// Number of vertices
    pub vertex_count: usize,
    /// Seed for a reproducible instance
    pub seed: Option<u64>,
    /// Directory the instance directory is created in
    pub parent_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(
        prefix: String,
        probability: &str,
        vertex_count: &str,
        seed: Option<u64>,
        parent_dir: PathBuf,
    ) -> HarnessResult<Self> {
        Ok(Self {
            prefix,
            probability: parse_probability(probability)?,
            vertex_count: parse_vertex_count(vertex_count)?,
            seed,
            parent_dir,
        })
    }

    pub fn instance_dir(&self) -> PathBuf {
        self.parent_dir
            .join(instance_name(&self.prefix, self.probability, self.vertex_count))
    }
}

fn parse_probability(raw: &str) -> HarnessResult<f64> {
    let p: f64 = raw.trim().parse().map_err(|_| {
        HarnessError::invalid_argument(format!("Probability argument is not a number: {}", raw))
    })?;

    if !(0.0..=1.0).contains(&p) {
        return Err(HarnessError::invalid_argument(format!(
            "Probability must be between 0 and 1: {}",
            raw
        )));
    }
    Ok(p)
}

fn parse_vertex_count(raw: &str) -> HarnessResult<usize> {
    // Parsed as signed so that "-3" reports the minimum rather than a parse failure
    let n: i64 = raw.trim().parse().map_err(|_| {
        HarnessError::invalid_argument(format!("Vertex count is not an integer: {}", raw))
    })?;

    if n < MIN_VERTEX_COUNT as i64 {
        return Err(HarnessError::invalid_argument(format!(
            "n needs to be at least {}",
            MIN_VERTEX_COUNT
        )));
    }
    usize::try_from(n)
        .map_err(|_| HarnessError::invalid_argument(format!("Vertex count too large: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(p: &str, n: &str) -> HarnessResult<GeneratorConfig> {
        GeneratorConfig::new("rand".into(), p, n, None, PathBuf::from("out"))
    }

    #[test]
    fn test_valid_arguments() {
        let cfg = config("0.25", "8").unwrap();
        assert_eq!(cfg.vertex_count, 8);
        assert_eq!(cfg.instance_dir(), PathBuf::from("out/rand_25_8"));
    }

    #[test]
    fn test_rejects_bad_vertex_count() {
        for n in ["1", "0", "-3", "ten", "2.5"] {
            assert!(
                matches!(config("0.5", n), Err(HarnessError::InvalidArgument(_))),
                "accepted n = {}",
                n
            );
        }
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in ["-0.1", "1.5", "often", "NaN"] {
            assert!(
                matches!(config(p, "5"), Err(HarnessError::InvalidArgument(_))),
                "accepted p = {}",
                p
            );
        }
    }
}
