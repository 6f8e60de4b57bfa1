use crate::Chips;
use crate::Position;
use crate::Utility;
use crate::gameplay::Game;
use serde::Serialize;

/// One replayed game, flattened for output.
///
/// Cards are written as their two-character codes so a row reads the same
/// as the rendered game. `iteration` is the knocker's seat: every deal is
/// replayed once per seat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub created: u64,
    pub game_id: usize,
    pub iteration: usize,
    pub players: usize,
    pub rounds: usize,
    pub turns: usize,
    pub knocker: Position,
    pub knocker_score: Utility,
    pub knocker_hand: String,
    pub knocker_survived: Option<bool>,
    pub resolution: Option<String>,
    pub scores: Vec<Utility>,
    pub hands: Vec<String>,
    pub chips: Vec<Chips>,
    pub deck: String,
    pub discard: String,
}

impl From<(usize, Position, &Game)> for Record {
    fn from((game_id, knocker, game): (usize, Position, &Game)) -> Self {
        debug_assert!(knocker < game.n());
        let ref seat = game.seats()[knocker];
        Self {
            created: crate::timestamp(),
            game_id,
            iteration: knocker,
            players: game.n(),
            rounds: game.round(),
            turns: game.turns(),
            knocker,
            knocker_score: Utility::from(seat.score()),
            knocker_hand: seat.hand().to_string(),
            knocker_survived: game.knocker_survived(),
            resolution: game.resolution().map(|r| r.to_string()),
            scores: game.scores().into_iter().map(Utility::from).collect(),
            hands: game.hands().iter().map(|h| h.to_string()).collect(),
            chips: game.chips(),
            deck: game.deck().to_string(),
            discard: game.discard().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;
    use crate::policy::Decision;
    use crate::policy::Policy;
    use std::sync::Arc;

    struct Keep;
    impl Policy for Keep {
        fn decide(&self, _: &Hand, _: Card) -> Decision {
            Decision::Keep
        }
    }

    #[test]
    fn flattens_a_knocked_game() {
        let hands = ["2C 3D 4H", "AS KS QD"]
            .map(|s| Hand::try_from(s).unwrap())
            .to_vec();
        let discard = Pile::from(Card::try_from("5S").unwrap());
        let deck = Card::all()
            .filter(|c| !discard.contains(c))
            .filter(|c| !hands.iter().any(|h| h.contains(c)))
            .collect::<Pile>();
        let mut game = Game::arrange(hands, deck, discard, 3, Arc::new(Keep)).unwrap();
        game.play(0).unwrap();
        let record = Record::from((7, 0, &game));
        assert!(record.game_id == 7);
        assert!(record.iteration == 0);
        assert!(record.players == 2);
        assert!(record.turns == 2);
        assert!(record.rounds == 1);
        assert!(record.knocker_score == 4.0);
        assert!(record.knocker_survived == Some(false));
        assert!(record.scores == vec![4.0, 21.0]);
        assert!(record.hands.len() == 2);
        assert!(record.resolution == Some("knock by 0".to_string()));
    }

    #[test]
    fn serializes_one_line() {
        let record = Record {
            created: 0,
            game_id: 0,
            iteration: 1,
            players: 2,
            rounds: 1,
            turns: 3,
            knocker: 1,
            knocker_score: 30.5,
            knocker_hand: "[7C, 7D, 7H]".to_string(),
            knocker_survived: Some(true),
            resolution: None,
            scores: vec![12.0, 30.5],
            hands: vec![],
            chips: vec![3, 3],
            deck: "[]".to_string(),
            discard: "[]".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"knocker_score\":30.5"));
        assert!(json.contains("\"resolution\":null"));
    }
}
