use super::Decision;
use super::Policy;
use crate::cards::Card;
use crate::cards::Hand;
use crate::lookup::Lookup;
use std::sync::Arc;

/// Greedy single-card improvement.
///
/// Pairs the offered card with the hand's [`worst`](Hand::worst) card and
/// takes the offer whenever the resulting hand scores at least as well as
/// the current one. Ties favor the new card.
#[derive(Clone)]
pub struct Heuristic(Arc<dyn Lookup>);

impl Heuristic {
    pub fn new(table: impl Lookup + 'static) -> Self {
        Self(Arc::new(table))
    }
    pub fn table(&self) -> &dyn Lookup {
        self.0.as_ref()
    }
}

impl From<Arc<dyn Lookup>> for Heuristic {
    fn from(table: Arc<dyn Lookup>) -> Self {
        Self(table)
    }
}

impl Policy for Heuristic {
    fn decide(&self, hand: &Hand, offer: Card) -> Decision {
        let worst = hand.worst(self.table());
        match hand.with(worst, offer) {
            Ok(next) if next.score() >= hand.score() => Decision::Swap(worst),
            _ => Decision::Keep,
        }
    }
}

impl std::fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Heuristic").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Score;
    use crate::lookup::HandScores;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }
    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }
    /// Marks `weak` as the card to replace in any hand holding it.
    fn marking(weak: Card) -> Heuristic {
        Heuristic::new(move |(a, b): (Card, Card), _: Card| {
            Some(if a != weak && b != weak { Score::MAX } else { Score::from(8) })
        })
    }

    #[test]
    fn takes_improvement() {
        let policy = marking(card("2C"));
        assert!(policy.decide(&hand("2C 5D 9H"), card("TH")) == Decision::Swap(card("2C")));
    }

    #[test]
    fn ties_take_new_card() {
        let policy = marking(card("2C"));
        assert!(policy.decide(&hand("2C 5D 9H"), card("3C")) == Decision::Swap(card("2C")));
    }

    #[test]
    fn declines_downgrade() {
        let policy = marking(card("9S"));
        assert!(policy.decide(&hand("AS KS 9S"), card("2C")) == Decision::Keep);
    }

    #[test]
    fn completes_thirty_one() {
        let policy = Heuristic::new(HandScores::grow());
        assert!(policy.decide(&hand("AS KS 2D"), card("QS")) == Decision::Swap(card("2D")));
    }

    #[test]
    fn pure() {
        let policy = Heuristic::new(HandScores::grow());
        let hand = hand("7C 8D 3H");
        let offer = card("JC");
        assert!(policy.decide(&hand, offer) == policy.decide(&hand, offer));
    }
}
