//! Cassettes: recorded port interactions used to replay tool output in tests.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
