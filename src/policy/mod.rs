//! How a player decides whether to trade for an offered card.
pub mod decision;
pub use decision::*;

pub mod heuristic;
pub use heuristic::*;

pub mod potential;
pub use potential::*;

use crate::cards::Card;
use crate::cards::Hand;

/// A swap rule. Pure: the same hand and offer always yield the same decision.
pub trait Policy: Send + Sync {
    /// Whether to take `offer`, and if so which card of `hand` to give up.
    fn decide(&self, hand: &Hand, offer: Card) -> Decision;
}
