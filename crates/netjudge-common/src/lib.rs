//! Common types, errors, and utilities for the NetJudge tools.
//!
//! Shared by the instance generator (Daedalus), the test runner (Minos)
//! and the benchmark runner (Chronos). All three agree on the instance
//! directory layout and on how the program under test is invoked.

pub mod console;
pub mod constants;
pub mod error;
pub mod instance;
pub mod logging;
pub mod network;
pub mod process;

pub use error::{HarnessError, HarnessResult};
pub use instance::InstanceLayout;
pub use network::{Controller, Edge, Network};
pub use process::{CommandRunner, ExecutionOutcome, Invocation, TokioCommandRunner};
