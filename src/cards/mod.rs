//! Cards, piles, hands and hand scoring.
//!
//! - [`Card`]: a `(Rank, Suit)` pair encoded in one byte, canonically ordered
//! - [`Pile`]: an ordered stack: the deck, the discard pile
//! - [`Hand`]: exactly three cards
//! - [`Score`]: what a hand is worth, with the three-of-a-kind sentinel
pub mod card;
pub use card::*;

pub mod hand;
pub use hand::*;

pub mod pile;
pub use pile::*;

pub mod rank;
pub use rank::*;

pub mod score;
pub use score::*;

pub mod suit;
pub use suit::*;
