use crate::POTENTIAL_PRECISION;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Hand;
use crate::lookup::Lookup;

/// Expected hand score if one card were traded for an unseen one.
///
/// For every card of a hand, in hand order, the other two are held fixed
/// and the table is averaged over every third card of the universe that is
/// neither of them nor the card being replaced. A high average means the
/// card contributes little to what the hand could become.
#[derive(Debug, Clone, PartialEq)]
pub struct Potential(Vec<(Card, Utility)>);

impl Potential {
    /// The card with the highest average: the one to give up.
    /// Ties go to the card dealt first.
    pub fn worst(&self) -> Card {
        self.0
            .iter()
            .fold(None, |best: Option<(Card, Utility)>, &(card, x)| match best {
                Some((_, y)) if y >= x => best,
                _ => Some((card, x)),
            })
            .map(|(card, _)| card)
            .expect("potential of a non-empty hand")
    }
    pub fn get(&self, card: &Card) -> Option<Utility> {
        self.0.iter().find(|(c, _)| c == card).map(|(_, x)| *x)
    }
    pub fn iter(&self) -> impl Iterator<Item = &(Card, Utility)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn average(table: &dyn Lookup, fixed: (Card, Card), replaced: Card) -> Utility {
        let (sum, n) = Card::all()
            .filter(|c| *c != replaced && *c != fixed.0 && *c != fixed.1)
            .filter_map(|c| table.lookup(fixed, c))
            .map(Utility::from)
            .fold((0.0, 0usize), |(sum, n), x| (sum + x, n + 1));
        match n {
            0 => 0.0,
            n => (sum / n as Utility * POTENTIAL_PRECISION).round() / POTENTIAL_PRECISION,
        }
    }
}

impl From<(&Hand, &dyn Lookup)> for Potential {
    fn from((hand, table): (&Hand, &dyn Lookup)) -> Self {
        let [a, b, c] = *hand.cards();
        Self(
            [(a, (b, c)), (b, (a, c)), (c, (a, b))]
                .into_iter()
                .map(|(replaced, fixed)| (replaced, Self::average(table, fixed, replaced)))
                .collect(),
        )
    }
}

impl std::fmt::Display for Potential {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (card, x)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:.3}", card, x)?;
        }
        write!(f, "}}")
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

    #[test]
    fn one_entry_per_card() {
        use crate::Arbitrary;
        let ref table = HandScores::grow();
        for _ in 0..300 {
            let hand = Hand::random();
            let potential = hand.potentials(table);
            assert!(potential.len() == 3);
            for (card, x) in potential.iter() {
                assert!(hand.contains(card));
                assert!(*x >= 0.0 && *x <= 31.0);
            }
        }
    }

    #[test]
    fn worst_breaks_the_suit() {
        let ref table = HandScores::grow();
        let hand = Hand::try_from("AS KS 2D").unwrap();
        assert!(hand.worst(table) == card("2D"));
    }

    #[test]
    fn worst_is_highest_average() {
        let two = card("2C");
        let table = move |(a, b): (Card, Card), _: Card| {
            Some(if a != two && b != two { Score::MAX } else { Score::from(8) })
        };
        let hand = Hand::try_from("5D 2C 9H").unwrap();
        let potential = hand.potentials(&table);
        assert!(potential.get(&two) == Some(31.0));
        assert!(potential.get(&card("5D")) == Some(4.0));
        assert!(potential.worst() == two);
    }

    #[test]
    fn ties_go_to_first_card() {
        let table = |_: (Card, Card), _: Card| Some(Score::from(20));
        let hand = Hand::try_from("9H 2C 5D").unwrap();
        assert!(hand.worst(&table) == card("9H"));
    }

    #[test]
    fn missing_rows_average_zero() {
        let table = |_: (Card, Card), _: Card| -> Option<Score> { None };
        let hand = Hand::try_from("9H 2C 5D").unwrap();
        let potential = hand.potentials(&table);
        assert!(potential.iter().all(|(_, x)| *x == 0.0));
        assert!(potential.worst() == card("9H"));
    }

    #[test]
    fn averages_skip_held_cards() {
        // AS is always held or replaced, so its 31 never counts
        let ace = card("AS");
        let table = move |_: (Card, Card), c: Card| {
            Some(if c == ace { Score::MAX } else { Score::from(10) })
        };
        let hand = Hand::try_from("AS KS QS").unwrap();
        assert!(hand.potentials(&table).iter().all(|(_, x)| *x == 5.0));
    }

    #[test]
    fn rounded_to_thousandths() {
        let ref table = HandScores::grow();
        let hand = Hand::try_from("7C 8D 3H").unwrap();
        for (_, x) in hand.potentials(table).iter() {
            assert!(((x * 1000.0).round() - x * 1000.0).abs() < 1e-2);
        }
    }
}
