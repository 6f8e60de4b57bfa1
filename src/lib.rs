//! Simulation engine for Thirty-One.
//!
//! Every player holds three cards and, turn by turn, trades one of them with
//! the discard pile or the deck. A hand scores the largest single-suit total
//! of its cards (aces 11, faces 10), three of a kind score
//! [`Score::TRIPS`](cards::Score::TRIPS), and a hand worth 31 wins outright.
//! A designated player may knock, granting everyone else one last turn.
//!
//! - [`cards`]: cards, piles, hands and scoring
//! - [`lookup`]: the precomputed hand score table
//! - [`policy`]: the swap heuristic every player follows
//! - [`gameplay`]: dealing, turns, the knock protocol and chip penalties
//! - [`simulation`]: replaying one deal under every possible knocker
#![allow(dead_code)]

pub mod cards;
pub mod error;
pub mod gameplay;
pub mod lookup;
pub mod policy;
pub mod simulation;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Life tokens. A player with none left is eliminated.
pub type Chips = u16;
/// Seat index around the table, in turn order.
pub type Position = usize;
/// Expected hand scores and other averaged quantities.
pub type Utility = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Cards in the universe.
pub const DECK_SIZE: usize = 52;
/// Cards in every hand.
pub const HAND_SIZE: usize = 3;
/// Fewest players a game can be dealt for.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game can be dealt for (every hand plus the first discard).
pub const MAX_PLAYERS: usize = (DECK_SIZE - 1) / HAND_SIZE;
/// Chips each player starts with.
pub const CHIPS: Chips = 3;

// ============================================================================
// HEURISTIC
// ============================================================================
/// Potential scores are rounded to this many parts per point before
/// comparison, so near-equal averages tie.
pub const POTENTIAL_PRECISION: Utility = 1000.0;

// ============================================================================
// SIMULATION
// ============================================================================
/// Deals simulated per player count.
pub const GAMES_PER_SIMULATION: usize = 10000;
/// Smallest table size swept by the simulator.
pub const SIMULATION_MIN_PLAYERS: usize = 2;
/// Largest table size swept by the simulator.
pub const SIMULATION_MAX_PLAYERS: usize = 6;
/// Where the hand score table lives on disk.
pub const HAND_SCORES_PATH: &str = "assets/hand_scores.csv";
/// Where simulation records are written.
pub const OUTPUT_DIR: &str = "output";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", timestamp())).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Seconds since the unix epoch.
pub fn timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs()
}
