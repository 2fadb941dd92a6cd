//! Adapter implementations of the port traits.
//!
//! - `live`: real process execution and disk access.
//! - `recording`: wraps a live adapter and captures every interaction.
//! - `replaying`: serves captured interactions back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
