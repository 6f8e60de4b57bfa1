use super::*;
use crate::Chips;
use crate::DECK_SIZE;
use crate::Error;
use crate::HAND_SIZE;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::Position;
use crate::cards::*;
use crate::policy::Decision;
use crate::policy::Policy;
use rand::Rng;
use std::sync::Arc;

/// One game of Thirty-One, from the deal to its resolution.
///
/// `Game` owns every card in play: the seats' hands, the face-down deck and
/// the face-up discard pile. Between turns these always partition the
/// 52-card universe. Cloning copies all of them, so a freshly dealt game can
/// be replayed once per candidate knocker from the identical deal. The
/// [`Policy`] is shared, not copied: it is read-only.
///
/// # Turns
///
/// Players act in the fixed cycle `0, 1, .., N-1, 0, ..`. On a turn the
/// actor is offered the top of the discard pile, then, if they decline, the
/// top of the deck. [`play_hand`](Self::play_hand) takes one turn,
/// [`play`](Self::play) runs the knock protocol to the end.
#[derive(Clone)]
pub struct Game {
    seats: Vec<Seat>,
    deck: Pile,
    discard: Pile,
    turns: usize,
    round: usize,
    current: Position,
    knocker: Option<Position>,
    phase: Phase,
    resolution: Option<Resolution>,
    rules: Rules,
    policy: Arc<dyn Policy>,
}

/// Dealing.
impl Game {
    /// Shuffles a fresh deck and deals a game.
    pub fn new(players: usize, chips: Chips, policy: Arc<dyn Policy>) -> Result<Self, Error> {
        Self::deal(players, chips, policy, &mut rand::rng())
    }
    /// Shuffles a fresh deck with `rng`, deals three rounds of one card per
    /// player, and turns the next card face up to start the discard pile.
    pub fn deal<R>(
        players: usize,
        chips: Chips,
        policy: Arc<dyn Policy>,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        Self::validate(players)?;
        let mut deck = Pile::full();
        deck.shuffle(rng);
        let mut stacks = vec![Pile::empty(); players];
        for _ in 0..HAND_SIZE {
            for stack in stacks.iter_mut() {
                stack.push(deck.draw().expect("enough cards for every hand"));
            }
        }
        let hands = stacks
            .into_iter()
            .map(Hand::try_from)
            .collect::<Result<Vec<Hand>, Error>>()?;
        let discard = Pile::from(deck.draw().expect("a card left to turn up"));
        Self::arrange(hands, deck, discard, chips, policy)
    }
    /// Sets up a game from a known position.
    ///
    /// The hands, deck and discard pile must partition the universe,
    /// otherwise this fails with [`Error::InconsistentDeal`].
    pub fn arrange(
        hands: Vec<Hand>,
        deck: Pile,
        discard: Pile,
        chips: Chips,
        policy: Arc<dyn Policy>,
    ) -> Result<Self, Error> {
        Self::validate(hands.len())?;
        let game = Self {
            seats: hands.into_iter().map(|h| Seat::from((h, chips))).collect(),
            deck,
            discard,
            turns: 0,
            round: 0,
            current: 0,
            knocker: None,
            phase: Phase::Dealt,
            resolution: None,
            rules: Rules::default(),
            policy,
        };
        match game.is_consistent() {
            true => Ok(game),
            false => Err(Error::InconsistentDeal),
        }
    }
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
    fn validate(players: usize) -> Result<(), Error> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            Ok(())
        } else {
            Err(Error::InvalidPlayerCount(players))
        }
    }
}

/// Public state accessors.
impl Game {
    /// Number of players.
    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn hands(&self) -> Vec<Hand> {
        self.seats.iter().map(Seat::hand).collect()
    }
    pub fn chips(&self) -> Vec<Chips> {
        self.seats.iter().map(Seat::chips).collect()
    }
    pub fn deck(&self) -> &Pile {
        &self.deck
    }
    pub fn discard(&self) -> &Pile {
        &self.discard
    }
    /// Turns taken so far, the knock included.
    pub fn turns(&self) -> usize {
        self.turns
    }
    /// Completed passes through the player order.
    pub fn round(&self) -> usize {
        self.round
    }
    /// The player to act next.
    pub fn current(&self) -> Position {
        self.current
    }
    pub fn knocker(&self) -> Option<Position> {
        self.knocker
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }
}

/// Scoring.
impl Game {
    pub fn scores(&self) -> Vec<Score> {
        self.seats.iter().map(Seat::score).collect()
    }
    /// The lowest score at the table.
    pub fn bottom_score(&self) -> Score {
        self.scores()
            .into_iter()
            .min()
            .expect("at least two seats")
    }
    /// Everyone holding the lowest score, in turn order.
    pub fn bottom_players(&self) -> Vec<Position> {
        let bottom = self.bottom_score();
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.score() == bottom)
            .map(|(p, _)| p)
            .collect()
    }
    /// Whether the knocker escaped holding the lowest hand alone.
    ///
    /// `None` until someone knocks. A knocker tied for the bottom survives.
    pub fn knocker_survived(&self) -> Option<bool> {
        self.knocker.map(|knocker| {
            let bottom = self.bottom_players();
            !bottom.contains(&knocker) || bottom.len() > 1
        })
    }
}

/// Turns.
impl Game {
    /// Takes the current player's turn.
    ///
    /// A player already holding 31 wins without touching the cards.
    /// Otherwise they consider the discard pile's top card, then the deck's;
    /// declining both with the deck empty ends the game by exhaustion.
    /// Reaching 31 through the exchange wins as well.
    pub fn play_hand(&mut self) -> Result<(), Error> {
        if self.is_resolved() {
            return Err(Error::GameAlreadyResolved);
        }
        if self.phase == Phase::Dealt {
            self.phase = Phase::Playing;
        }
        let actor = self.current;
        if self.seats[actor].score() == Score::MAX {
            self.resolve(Resolution::Winner(actor));
            return Ok(());
        }
        self.exchange(actor)?;
        if !self.is_resolved() && self.seats[actor].score() == Score::MAX {
            self.resolve(Resolution::Winner(actor));
        }
        self.advance();
        debug_assert!(self.is_consistent(), "lost track of a card:\n{}", self);
        Ok(())
    }
    /// Runs the knock protocol with `knocker` as the designated knocker.
    ///
    /// Everyone ahead of the knocker plays a turn, the knocker knocks (a
    /// turn without touching any cards), then every other player gets
    /// exactly one final turn. The game resolves when the order comes back
    /// to the knocker, or sooner if someone hits 31 or the deck runs out.
    pub fn play(&mut self, knocker: Position) -> Result<(), Error> {
        if knocker >= self.n() {
            return Err(Error::InvalidKnocker {
                knocker,
                players: self.n(),
            });
        }
        if self.is_resolved() {
            return Err(Error::GameAlreadyResolved);
        }
        self.knocker = Some(knocker);
        self.play_until(knocker)?;
        if self.is_resolved() {
            return Ok(());
        }
        self.knock();
        self.play_until(knocker)?;
        if !self.is_resolved() {
            self.resolve(Resolution::Knocked(knocker));
        }
        Ok(())
    }
    fn play_until(&mut self, player: Position) -> Result<(), Error> {
        while self.current != player && !self.is_resolved() {
            self.play_hand()?;
        }
        Ok(())
    }
    fn knock(&mut self) {
        log::trace!("player {} knocks on turn {}", self.current, self.turns);
        self.phase = Phase::Knocked;
        self.advance();
    }
    /// Offers the discard pile, then the deck.
    fn exchange(&mut self, actor: Position) -> Result<(), Error> {
        let hand = self.seats[actor].hand();
        if let Some(offer) = self.discard.top() {
            if let Decision::Swap(worst) = self.policy.decide(&hand, offer) {
                self.seats[actor].swap(worst, offer)?;
                self.discard.draw();
                self.discard.push(worst);
                log::trace!("player {} takes {} for {} from discard", actor, offer, worst);
                return Ok(());
            }
        }
        match self.deck.top() {
            Some(offer) => match self.policy.decide(&hand, offer) {
                Decision::Swap(worst) => {
                    self.seats[actor].swap(worst, offer)?;
                    self.deck.draw();
                    self.discard.push(worst);
                    log::trace!("player {} takes {} for {} from deck", actor, offer, worst);
                }
                Decision::Keep => {
                    self.deck.draw();
                    self.discard.push(offer);
                    log::trace!("player {} passes on {}", actor, offer);
                }
            },
            None => self.resolve(Resolution::Exhausted),
        }
        Ok(())
    }
    /// Moves the turn to the next player in the cycle.
    fn advance(&mut self) {
        let actor = self.current;
        self.turns += 1;
        if actor == self.n() - 1 {
            self.round += 1;
        }
        self.current = (actor + 1) % self.n();
    }
}

/// Resolution and chips.
impl Game {
    /// Charges chips for the way a game ended.
    ///
    /// - a 31-win costs every other player a chip
    /// - a knock costs every bottom scorer but the knocker a chip
    /// - exhaustion costs nothing
    ///
    /// Chips never drop below zero.
    pub fn settle(&mut self, resolution: &Resolution) {
        match *resolution {
            Resolution::Winner(winner) => self
                .seats
                .iter_mut()
                .enumerate()
                .filter(|(p, _)| *p != winner)
                .for_each(|(_, seat)| seat.lose()),
            Resolution::Knocked(knocker) => self
                .bottom_players()
                .into_iter()
                .filter(|p| *p != knocker)
                .for_each(|p| self.seats[p].lose()),
            Resolution::Exhausted => {}
        }
    }
    fn resolve(&mut self, resolution: Resolution) {
        debug_assert!(!self.is_resolved());
        log::debug!(
            "resolved ({}) on turn {} of round {}",
            resolution,
            self.turns,
            self.round
        );
        match resolution {
            Resolution::Knocked(_) if !self.rules.knock_penalty => {}
            _ => self.settle(&resolution),
        }
        self.resolution = Some(resolution);
        self.phase = Phase::Resolved;
    }
}

/// Invariants.
impl Game {
    /// True if deck, discard pile and hands hold each of the 52 cards once.
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0u64;
        let mut count = 0usize;
        for card in self
            .deck
            .iter()
            .chain(self.discard.iter())
            .copied()
            .chain(self.seats.iter().flat_map(|s| *s.hand().cards()))
        {
            seen |= 1u64 << u8::from(card);
            count += 1;
        }
        count == DECK_SIZE && seen.count_ones() as usize == DECK_SIZE
    }
}

/// Rendering.
impl Game {
    /// Status codes: `*` acts next, `k` knocked, `b` holds the lowest score.
    pub fn status(&self, player: Position) -> String {
        let mut code = String::new();
        if player == self.current {
            code.push('*');
        }
        if Some(player) == self.knocker {
            code.push('k');
        }
        if self.bottom_players().contains(&player) {
            code.push('b');
        }
        match code.is_empty() {
            true => player.to_string(),
            false => format!("{}({})", player, code),
        }
    }
    fn table(&self) -> Vec<[String; 4]> {
        std::iter::once(["player", "chips", "hand", "score"].map(String::from))
            .chain(self.seats.iter().enumerate().map(|(p, seat)| {
                [
                    self.status(p),
                    seat.chips().to_string(),
                    seat.hand().to_string(),
                    seat.score().to_string(),
                ]
            }))
            .collect()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let knocker = self.knocker.map_or("none".to_string(), |k| k.to_string());
        let survived = self
            .knocker_survived()
            .map_or("none".to_string(), |s| s.to_string());
        let resolution = self
            .resolution
            .map_or("none".to_string(), |r| r.to_string());
        writeln!(f, "1. Game Info:")?;
        writeln!(f, "num_players: {}", self.n())?;
        writeln!(f, "deck (unsorted) ({}): {}", self.deck.len(), self.deck)?;
        writeln!(f, "deck (sorted) ({}): {}", self.deck.len(), Pile::from(self.deck.sorted()))?;
        writeln!(f, "discard ({}): {}", self.discard.len(), self.discard)?;
        writeln!(f, "round: {}", self.round)?;
        writeln!(f, "turns: {}", self.turns)?;
        writeln!(f, "phase: {}", self.phase)?;
        writeln!(f, "resolution: {}", resolution)?;
        writeln!(f, "knocker: {}", knocker)?;
        writeln!(f, "knocker_survived: {}", survived)?;
        writeln!(f)?;
        writeln!(f, "2. Player Info:")?;
        let table = self.table();
        let widths = (0..4)
            .map(|i| table.iter().map(|row| row[i].len()).max().unwrap_or(0))
            .collect::<Vec<usize>>();
        for (r, row) in table.iter().enumerate() {
            for (cell, w) in row.iter().zip(widths.iter()) {
                write!(f, "| {:^w$} ", cell, w = *w)?;
            }
            writeln!(f, "|")?;
            if r == 0 {
                for w in widths.iter() {
                    write!(f, "|:{}:", "-".repeat(*w))?;
                }
                writeln!(f, "|")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("seats", &self.seats)
            .field("deck", &self.deck)
            .field("discard", &self.discard)
            .field("turns", &self.turns)
            .field("round", &self.round)
            .field("current", &self.current)
            .field("knocker", &self.knocker)
            .field("phase", &self.phase)
            .field("resolution", &self.resolution)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
