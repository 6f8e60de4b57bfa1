use super::card::Card;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered stack of distinct cards. The top is the end of the sequence.
///
/// Serves as the draw deck, the face-up discard pile, or a scratch stack
/// while dealing. A pile never holds the same card twice, though keeping
/// cards unique across piles and hands is up to whoever deals them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pile(Vec<Card>);

impl Pile {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    /// All 52 cards, in canonical order (ace of spades on top).
    pub fn full() -> Self {
        Self(Card::all().collect())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
    /// Looks at the top card without taking it.
    pub fn top(&self) -> Option<Card> {
        self.0.last().copied()
    }
    /// Takes the top card. `None` once the pile is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Takes one specific card from wherever it sits.
    pub fn remove(&mut self, card: Card) -> Result<(), Error> {
        match self.0.iter().position(|c| *c == card) {
            Some(i) => {
                self.0.remove(i);
                Ok(())
            }
            None => Err(Error::CardNotFound(card)),
        }
    }
    /// Puts a card on top.
    pub fn push(&mut self, card: Card) {
        debug_assert!(!self.contains(&card), "{} already in pile", card);
        self.0.push(card);
    }
    /// Moves every card of `other` on top, keeping their order.
    pub fn append(&mut self, other: &mut Pile) {
        debug_assert!(other.iter().all(|c| !self.contains(c)));
        self.0.append(&mut other.0);
    }
    /// Uniform permutation in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Sorted copy of the cards, for display.
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.0.clone();
        cards.sort();
        cards
    }
}

impl Extend<Card> for Pile {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        for card in cards {
            self.push(card);
        }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut pile = Self::empty();
        pile.extend(cards);
        pile
    }
}

/// Vec<Card> isomorphism, bottom to top
impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl From<Pile> for Vec<Card> {
    fn from(pile: Pile) -> Self {
        pile.0
    }
}

impl From<Card> for Pile {
    fn from(card: Card) -> Self {
        Self(vec![card])
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pile(s: &str) -> Pile {
        Pile::from(Card::parse(s).unwrap())
    }

    #[test]
    fn draw_from_top() {
        let mut pile = pile("2C 3C 4C");
        assert!(pile.top() == Card::try_from("4C").ok());
        assert!(pile.draw() == Card::try_from("4C").ok());
        assert!(pile.draw() == Card::try_from("3C").ok());
        assert!(pile.len() == 1);
    }

    #[test]
    fn draw_empty_is_none() {
        let mut pile = Pile::empty();
        assert!(pile.draw().is_none());
        assert!(pile.top().is_none());
    }

    #[test]
    fn remove_specific() {
        let mut pile = pile("2C 3C 4C");
        let card = Card::try_from("3C").unwrap();
        assert_eq!(pile.remove(card), Ok(()));
        assert!(!pile.contains(&card));
        assert_eq!(pile.remove(card), Err(Error::CardNotFound(card)));
        assert!(pile.to_string() == "[2C, 4C]");
    }

    #[test]
    fn append_keeps_batch_order() {
        let mut lower = pile("2C 3C");
        let mut upper = pile("AS KS");
        lower.append(&mut upper);
        assert!(upper.is_empty());
        assert!(lower.to_string() == "[2C, 3C, AS, KS]");
        assert!(lower.draw() == Card::try_from("KS").ok());
    }

    #[test]
    fn full_universe() {
        let pile = Pile::full();
        assert!(pile.len() == crate::DECK_SIZE);
        assert!(pile.top() == Card::try_from("AS").ok());
    }

    #[test]
    fn shuffle_permutes() {
        let ref mut rng = SmallRng::seed_from_u64(31);
        let mut pile = Pile::full();
        pile.shuffle(rng);
        assert!(pile.len() == crate::DECK_SIZE);
        assert!(pile != Pile::full());
        assert!(pile.sorted() == Vec::<Card>::from(Pile::full()));
    }
}
