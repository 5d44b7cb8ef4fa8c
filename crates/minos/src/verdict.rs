//! Verdict types and batch summary

use std::time::Duration;

/// Outcome of one catalog test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Result line set equals the expected line set
    Pass,
    /// Program succeeded but its output differs
    Fail,
    /// Program exited non-zero or could not be started
    Error,
    /// Program ran past the timeout and was killed
    Timeout,
}

impl Verdict {
    /// Get short code for verdict
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Error => "ERR",
            Verdict::Timeout => "TIME",
        }
    }

    /// Code padded to the report column width
    pub fn label(&self) -> String {
        format!("{:<4}", self.code())
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Verdict::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of running one instance
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Instance directory as written in the catalog
    pub instance: String,

    pub verdict: Verdict,

    /// Wall-clock time of the run, when it finished
    pub elapsed: Option<Duration>,

    /// Why the run did not pass
    pub detail: Option<String>,
}

impl TestResult {
    pub fn pass(instance: &str, elapsed: Duration) -> Self {
        Self {
            instance: instance.to_string(),
            verdict: Verdict::Pass,
            elapsed: Some(elapsed),
            detail: None,
        }
    }

    pub fn fail(instance: &str, elapsed: Duration, detail: Option<String>) -> Self {
        Self {
            instance: instance.to_string(),
            verdict: Verdict::Fail,
            elapsed: Some(elapsed),
            detail,
        }
    }

    pub fn error(instance: &str, elapsed: Option<Duration>, message: String) -> Self {
        Self {
            instance: instance.to_string(),
            verdict: Verdict::Error,
            elapsed,
            detail: Some(message),
        }
    }

    pub fn timeout(instance: &str, limit: Duration) -> Self {
        Self {
            instance: instance.to_string(),
            verdict: Verdict::Timeout,
            elapsed: None,
            detail: Some(format!("Exceeded {:.3}s", limit.as_secs_f64())),
        }
    }
}

/// Tally over a whole catalog run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub timeouts: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let count = |v: Verdict| results.iter().filter(|r| r.verdict == v).count();

        Self {
            total: results.len(),
            passed: count(Verdict::Pass),
            failed: count(Verdict::Fail),
            errors: count(Verdict::Error),
            timeouts: count(Verdict::Timeout),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tests: {} PASS, {} FAIL, {} ERR, {} TIME",
            self.total, self.passed, self.failed, self.errors, self.timeouts
        )
    }
}
