use super::card::Card;
use super::pile::Pile;
use super::score::Score;
use crate::Arbitrary;
use crate::Error;
use crate::HAND_SIZE;
use crate::lookup::Lookup;
use crate::policy::Potential;

/// Exactly three cards.
///
/// Cards keep the position they were dealt into; a swap replaces a card in
/// place. Position matters only for breaking ties between equally weak
/// cards, see [`Potential::worst`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn score(&self) -> Score {
        Score::from(self.0)
    }
    /// Replaces `old` with `new`, keeping its position.
    pub fn swap(&mut self, old: Card, new: Card) -> Result<(), Error> {
        *self = self.with(old, new)?;
        Ok(())
    }
    /// The hand we would hold after swapping `old` for `new`.
    pub fn with(&self, old: Card, new: Card) -> Result<Self, Error> {
        debug_assert!(old == new || !self.contains(&new));
        let mut cards = self.0;
        let slot = cards
            .iter_mut()
            .find(|c| **c == old)
            .ok_or(Error::CardNotFound(old))?;
        *slot = new;
        Ok(Self(cards))
    }
    /// Expected score after replacing each card with an unseen one.
    pub fn potentials(&self, table: &dyn Lookup) -> Potential {
        Potential::from((self, table))
    }
    /// The card whose replacement promises the most.
    pub fn worst(&self, table: &dyn Lookup) -> Card {
        self.potentials(table).worst()
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        debug_assert!(cards[0] != cards[1] && cards[1] != cards[2] && cards[0] != cards[2]);
        Self(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let n = cards.len();
        let cards = <[Card; HAND_SIZE]>::try_from(cards).map_err(|_| Error::InvalidHandSize(n))?;
        Card::distinct(&cards)?;
        Ok(Self::from(cards))
    }
}

impl TryFrom<Pile> for Hand {
    type Error = Error;
    fn try_from(pile: Pile) -> Result<Self, Self::Error> {
        Self::try_from(Vec::<Card>::from(pile))
    }
}

/// str isomorphism
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        let mut pile = Pile::full();
        pile.shuffle(&mut rand::rng());
        let cards = Vec::from(pile).into_iter().take(HAND_SIZE).collect::<Vec<_>>();
        Self::try_from(cards).expect("three cards off a full deck")
    }
}

/// sorted, so equal hands print alike
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut cards = self.0;
        cards.sort();
        write!(f, "[{}, {}, {}]", cards[0], cards[1], cards[2])
    }
}
