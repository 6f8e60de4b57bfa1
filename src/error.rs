use crate::Position;
use crate::cards::Card;
use thiserror::Error;

/// Everything the engine refuses to do.
///
/// Running out of deck cards mid-turn is not here: it ends the game
/// by exhaustion (see [`Resolution`](crate::gameplay::Resolution)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid card token: {0:?}")]
    InvalidCard(String),

    #[error("card not found: {0}")]
    CardNotFound(Card),

    #[error("a hand holds exactly 3 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("cannot deal for {0} players")]
    InvalidPlayerCount(usize),

    #[error("hands, deck and discard pile do not hold each card exactly once")]
    InconsistentDeal,

    #[error("knocker {knocker} is not one of {players} players")]
    InvalidKnocker { knocker: Position, players: usize },

    #[error("game already resolved")]
    GameAlreadyResolved,
}
