//! Precomputed hand scores keyed by two fixed cards and a varying third.
//!
//! The heuristic never scores hypothetical hands itself; it asks a
//! [`Lookup`]. Production runs share one [`HandScores`] table per process,
//! tests can hand in any closure with the same signature.
pub mod table;
pub use table::*;

use crate::cards::Card;
use crate::cards::Score;

/// Read-only access to hand scores.
pub trait Lookup: Send + Sync {
    /// Score of the hand `{fixed.0, fixed.1, third}`, if the table knows it.
    fn lookup(&self, fixed: (Card, Card), third: Card) -> Option<Score>;
}

impl<F> Lookup for F
where
    F: Fn((Card, Card), Card) -> Option<Score> + Send + Sync,
{
    fn lookup(&self, fixed: (Card, Card), third: Card) -> Option<Score> {
        self(fixed, third)
    }
}
