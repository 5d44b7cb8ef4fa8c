//! Repeated timing of the program under test

use std::time::{Duration, Instant};

use netjudge_common::{CommandRunner, ExecutionOutcome, HarnessError, HarnessResult};

use crate::config::BenchConfig;

/// Timings of a complete benchmark series
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Wall-clock time of the whole series
    pub total: Duration,

    /// Wall-clock time of each run, in order
    pub iterations: Vec<Duration>,
}

impl BenchmarkReport {
    pub fn repeats(&self) -> usize {
        self.iterations.len()
    }

    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Mean seconds per run over the whole series
    pub fn average_secs(&self) -> f64 {
        self.total_secs() / self.repeats() as f64
    }

    pub fn fastest(&self) -> Option<Duration> {
        self.iterations.iter().min().copied()
    }

    pub fn slowest(&self) -> Option<Duration> {
        self.iterations.iter().max().copied()
    }

    pub fn render(&self) -> String {
        let mut text = format!(
            "   Time: {}\nAverage: {}\n",
            self.total_secs(),
            self.average_secs()
        );
        if let (Some(fastest), Some(slowest)) = (self.fastest(), self.slowest()) {
            text.push_str(&format!(
                "Fastest: {}\nSlowest: {}\n",
                fastest.as_secs_f64(),
                slowest.as_secs_f64()
            ));
        }
        text
    }
}

pub struct Benchmark<R> {
    runner: R,
    config: BenchConfig,
}

impl<R: CommandRunner> Benchmark<R> {
    pub fn new(runner: R, config: BenchConfig) -> Self {
        Self { runner, config }
    }

    /// Run the program `repeats` times back to back without a time limit.
    ///
    /// Any unsuccessful run aborts the series; no partial timings are
    /// returned.
    pub async fn run(&self) -> HarnessResult<BenchmarkReport> {
        let invocation = self.config.layout.invocation(&self.config.program);
        let repeats = self.config.repeats;
        let mut iterations = Vec::with_capacity(repeats as usize);

        let start = Instant::now();

        for i in 1..=repeats {
            let iteration_start = Instant::now();

            match self.runner.run(&invocation, None).await? {
                ExecutionOutcome::Success { .. } => {
                    let elapsed = iteration_start.elapsed();
                    tracing::debug!("Iteration {}/{}: {:?}", i, repeats, elapsed);
                    iterations.push(elapsed);
                }
                ExecutionOutcome::Failed {
                    exit_code, message, ..
                } => {
                    return Err(HarnessError::ExecutionFailed(format!(
                        "iteration {} of {} exited with code {}: {}",
                        i, repeats, exit_code, message
                    )));
                }
                ExecutionOutcome::TimedOut { limit } => {
                    return Err(HarnessError::ExecutionFailed(format!(
                        "iteration {} of {} timed out after {:?}",
                        i, repeats, limit
                    )));
                }
            }
        }

        Ok(BenchmarkReport {
            total: start.elapsed(),
            iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use mockall::mock;
    use netjudge_common::{InstanceLayout, Invocation};

    use super::*;

    mock! {
        pub Runner {}

        #[async_trait]
        impl CommandRunner for Runner {
            async fn run(
                &self,
                invocation: &Invocation,
                limit: Option<Duration>,
            ) -> HarnessResult<ExecutionOutcome>;
        }
    }

    fn config(repeats: &str) -> BenchConfig {
        let layout = InstanceLayout::new("rand_50_100")
            .with_network_file("net.json")
            .with_start_file("s.txt");
        BenchConfig::new("solver".into(), layout, repeats).unwrap()
    }

    fn instant_success() -> HarnessResult<ExecutionOutcome> {
        Ok(ExecutionOutcome::Success {
            elapsed: Duration::ZERO,
        })
    }

    #[tokio::test]
    async fn test_average_is_total_over_repeats() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .withf(|invocation, limit| {
                limit.is_none()
                    && invocation.args == ["net.json", "s.txt", "result.txt"]
                    && invocation.working_dir.ends_with("rand_50_100")
            })
            .times(5)
            .returning(|_, _| instant_success());

        let report = Benchmark::new(runner, config("5")).run().await.unwrap();

        assert_eq!(report.repeats(), 5);
        assert!(report.average_secs() >= 0.0);
        assert_eq!(report.average_secs(), report.total_secs() / 5.0);
        assert!(report.fastest().unwrap() <= report.slowest().unwrap());
        assert!(report.iterations.iter().sum::<Duration>() <= report.total);
    }

    #[tokio::test]
    async fn test_failure_aborts_series() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let mut runner = MockRunner::new();
        runner.expect_run().returning(move |_, _| {
            if counter.fetch_add(1, Ordering::SeqCst) == 2 {
                Ok(ExecutionOutcome::Failed {
                    exit_code: 139,
                    message: "Killed by signal 11".into(),
                    elapsed: Duration::ZERO,
                })
            } else {
                instant_success()
            }
        });

        let err = Benchmark::new(runner, config("20")).run().await.unwrap_err();

        assert!(matches!(err, HarnessError::ExecutionFailed(_)));
        assert!(err.to_string().contains("iteration 3 of 20"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_spawn_failure_aborts() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_, _| Err(HarnessError::Spawn("solver: not found".into())));

        let err = Benchmark::new(runner, config("4")).run().await.unwrap_err();
        assert!(matches!(err, HarnessError::Spawn(_)));
    }

    #[test]
    fn test_render() {
        let report = BenchmarkReport {
            total: Duration::from_millis(1000),
            iterations: vec![
                Duration::from_millis(100),
                Duration::from_millis(400),
                Duration::from_millis(500),
                Duration::from_millis(0),
            ],
        };

        assert_eq!(
            report.render(),
            "   Time: 1\nAverage: 0.25\nFastest: 0\nSlowest: 0.5\n"
        );
    }
}
