//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the repository facade and the
//! outside world (process execution, filesystem). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod runner;

pub use filesystem::FileSystem;
pub use runner::{CommandRunner, RunOutput, RunnerError};
