//! Dealing, turns, the knock protocol and chip penalties.
pub mod game;
pub use game::*;

pub mod phase;
pub use phase::*;

pub mod resolution;
pub use resolution::*;

pub mod rules;
pub use rules::*;

pub mod seat;
pub use seat::*;
