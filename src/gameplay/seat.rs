use crate::Chips;
use crate::Error;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Score;

/// A player's state at the table.
///
/// # Fields
///
/// - `hand`: the three cards held
/// - `chips`: lives left; a player at zero is out, though the engine
///   keeps dealing them in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    hand: Hand,
    chips: Chips,
}

impl From<(Hand, Chips)> for Seat {
    fn from((hand, chips): (Hand, Chips)) -> Self {
        Self { hand, chips }
    }
}

impl Seat {
    pub fn hand(&self) -> Hand {
        self.hand
    }
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn score(&self) -> Score {
        self.hand.score()
    }
    pub fn is_eliminated(&self) -> bool {
        self.chips == 0
    }
    /// Trades `old` for `new` in place.
    pub fn swap(&mut self, old: Card, new: Card) -> Result<(), Error> {
        self.hand.swap(old, new)
    }
    /// Pays one chip, never going below zero.
    pub fn lose(&mut self) {
        self.chips = self.chips.saturating_sub(1);
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:>4} ${}", self.hand, self.score(), self.chips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lose_floors_at_zero() {
        let hand = Hand::try_from("2C 5D 9H").unwrap();
        let mut seat = Seat::from((hand, 1));
        seat.lose();
        assert!(seat.chips() == 0);
        assert!(seat.is_eliminated());
        seat.lose();
        assert!(seat.chips() == 0);
    }
}
