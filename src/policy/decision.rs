use crate::cards::Card;

/// Outcome of offering a card to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Decline the offer.
    Keep,
    /// Take the offer, discarding this card from the hand.
    Swap(Card),
}

impl Decision {
    pub fn is_swap(&self) -> bool {
        matches!(self, Self::Swap(_))
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Decision::Keep => write!(f, "keep"),
            Decision::Swap(card) => write!(f, "swap {}", card),
        }
    }
}
