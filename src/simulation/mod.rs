//! Replaying one deal under every possible knocker.
pub mod record;
pub use record::*;

pub mod simulator;
pub use simulator::*;
