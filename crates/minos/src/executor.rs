//! Catalog executor: runs the program against each instance and judges it

use std::io::{ErrorKind, Write};

use netjudge_common::instance::read_line_set;
use netjudge_common::{CommandRunner, ExecutionOutcome, HarnessResult, InstanceLayout};
use tokio::fs;

use crate::catalog::CatalogEntry;
use crate::config::RunnerConfig;
use crate::report::Report;
use crate::verdict::{BatchSummary, TestResult};

pub struct Executor<R> {
    runner: R,
    config: RunnerConfig,
}

impl<R: CommandRunner> Executor<R> {
    pub fn new(runner: R, config: RunnerConfig) -> Self {
        Self { runner, config }
    }

    /// Run every test entry of the catalog in order.
    ///
    /// Test outcomes never abort the batch; only report I/O errors do.
    pub async fn execute<W: Write>(
        &self,
        entries: &[CatalogEntry],
        report: &mut Report<W>,
    ) -> HarnessResult<BatchSummary> {
        report.header(&self.config.program)?;

        let mut results = Vec::new();

        for entry in entries {
            match entry {
                CatalogEntry::Blank => report.blank()?,
                CatalogEntry::Section(line) => report.section(line)?,
                CatalogEntry::Test {
                    instance,
                    annotation,
                } => {
                    if let Some(note) = annotation {
                        tracing::debug!("{}: {}", instance, note);
                    }

                    report.begin_test(instance)?;
                    let result = self.run_instance(instance).await;
                    report.finish_test(result.verdict)?;

                    if result.verdict.is_failure() {
                        tracing::info!(
                            "{}: {} ({})",
                            result.instance,
                            result.verdict,
                            result.detail.as_deref().unwrap_or("no detail")
                        );
                    } else {
                        tracing::debug!("{}: {:?}", result.instance, result.elapsed);
                    }
                    results.push(result);
                }
            }
        }

        let summary = BatchSummary::from_results(&results);
        report.summary(&summary)?;

        if summary.all_passed() {
            tracing::info!("Finished catalog {}: {}", self.config.test_list.display(), summary);
        } else {
            tracing::warn!("Finished catalog {}: {}", self.config.test_list.display(), summary);
        }

        Ok(summary)
    }

    /// Run and judge a single instance directory
    pub async fn run_instance(&self, instance: &str) -> TestResult {
        let layout = InstanceLayout::new(instance);
        let invocation = layout.invocation(&self.config.program);

        // A result left over from an earlier run must not be judged
        if let Err(e) = fs::remove_file(layout.result_path()).await {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("Could not clear {}: {}", layout.result_path().display(), e);
            }
        }

        let outcome = match self.runner.run(&invocation, Some(self.config.timeout)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("{}: {}", instance, e);
                return TestResult::error(instance, None, e.to_string());
            }
        };

        match outcome {
            ExecutionOutcome::TimedOut { limit } => {
                tracing::debug!("{}: timed out after {:?}", instance, limit);
                TestResult::timeout(instance, limit)
            }
            ExecutionOutcome::Failed {
                exit_code,
                message,
                elapsed,
            } => {
                tracing::debug!("{}: exit code {}: {}", instance, exit_code, message);
                TestResult::error(instance, Some(elapsed), message)
            }
            ExecutionOutcome::Success { elapsed } => {
                let result = read_line_set(&layout.result_path()).await;
                let expected = read_line_set(&layout.expected_path()).await;

                match (result, expected) {
                    (Ok(result), Ok(expected)) if result == expected => {
                        tracing::debug!("{}: passed in {:?}", instance, elapsed);
                        TestResult::pass(instance, elapsed)
                    }
                    (Ok(result), Ok(expected)) => {
                        let missing = expected.difference(&result).count();
                        let extra = result.difference(&expected).count();
                        let detail = format!("{} lines missing, {} unexpected", missing, extra);
                        tracing::debug!("{}: {}", instance, detail);
                        TestResult::fail(instance, elapsed, Some(detail))
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        tracing::warn!("{}: could not compare output: {}", instance, e);
                        TestResult::fail(instance, elapsed, Some(e.to_string()))
                    }
                }
            }
        }
    }
}
