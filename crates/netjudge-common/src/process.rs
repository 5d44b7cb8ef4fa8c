//! Running the program under test as a subprocess

use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::{ChildStderr, Command};
use tokio::time::timeout;

use crate::constants::STDERR_EXCERPT_CHARS;
use crate::error::{HarnessError, HarnessResult};

/// How long to wait for stderr after a failed program has exited
const STDERR_GRACE: Duration = Duration::from_millis(200);

/// One invocation of an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// How a finished (or abandoned) invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Exited with status zero
    Success { elapsed: Duration },
    /// Exited non-zero or was killed by a signal
    Failed {
        exit_code: i32,
        message: String,
        elapsed: Duration,
    },
    /// Ran past its wall-clock limit and was killed
    TimedOut { limit: Duration },
}

/// Runs an external command, optionally bounded by a wall-clock limit.
///
/// `Err` is reserved for failures to start the program at all.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        invocation: &Invocation,
        limit: Option<Duration>,
    ) -> HarnessResult<ExecutionOutcome>;
}

/// [`CommandRunner`] backed by `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        limit: Option<Duration>,
    ) -> HarnessResult<ExecutionOutcome> {
        // A relative program path resolves inside the working directory
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                HarnessError::Spawn(format!(
                    "{} in {}: {}",
                    invocation.program.display(),
                    invocation.working_dir.display(),
                    e
                ))
            })?;

        let start = Instant::now();
        let mut stderr_reader = child
            .stderr
            .take()
            .map(|stderr| tokio::spawn(drain_excerpt(stderr)));

        // Only the program's own exit counts; descendants holding stderr open are ignored
        let status = match limit {
            Some(limit) => match timeout(limit, child.wait()).await {
                Ok(status) => status?,
                Err(_) => {
                    child.kill().await?;
                    if let Some(reader) = stderr_reader {
                        reader.abort();
                    }
                    tracing::debug!(
                        "{} exceeded {:?}, killed",
                        invocation.program.display(),
                        limit
                    );
                    return Ok(ExecutionOutcome::TimedOut { limit });
                }
            },
            None => child.wait().await?,
        };

        let elapsed = start.elapsed();

        if status.success() {
            if let Some(reader) = stderr_reader {
                reader.abort();
            }
            return Ok(ExecutionOutcome::Success { elapsed });
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                if let Some(reader) = stderr_reader {
                    reader.abort();
                }
                return Ok(ExecutionOutcome::Failed {
                    exit_code: -signal,
                    message: format!("Killed by signal {}", signal),
                    elapsed,
                });
            }
        }

        let stderr = match stderr_reader.as_mut() {
            Some(reader) => match timeout(STDERR_GRACE, &mut *reader).await {
                Ok(Ok(excerpt)) => excerpt,
                _ => {
                    reader.abort();
                    String::new()
                }
            },
            None => String::new(),
        };

        let exit_code = status.code().unwrap_or(-1);
        let message = if stderr.trim().is_empty() {
            format!("Process exited with code {}", exit_code)
        } else {
            stderr
        };

        Ok(ExecutionOutcome::Failed {
            exit_code,
            message,
            elapsed,
        })
    }
}

/// Read stderr to EOF so the program never blocks on a full pipe, keeping
/// only the first `STDERR_EXCERPT_CHARS` characters.
async fn drain_excerpt(mut stderr: ChildStderr) -> String {
    let mut kept = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        match stderr.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let room = (STDERR_EXCERPT_CHARS * 4).saturating_sub(kept.len());
                kept.extend_from_slice(&chunk[..n.min(room)]);
            }
        }
    }

    String::from_utf8_lossy(&kept)
        .chars()
        .take(STDERR_EXCERPT_CHARS)
        .collect()
}
