//! Simulation Binary
//!
//! Deals Thirty-One games for a range of table sizes, replays each deal
//! under every knocker, and writes one JSON line per replayed game.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use thirtyone::gameplay::Rules;
use thirtyone::lookup::HandScores;
use thirtyone::lookup::Lookup;
use thirtyone::policy::Heuristic;
use thirtyone::policy::Policy;
use thirtyone::simulation::Simulator;
use thirtyone::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = GAMES_PER_SIMULATION, help = "Deals per table size")]
    games: usize,
    #[arg(long, default_value_t = SIMULATION_MIN_PLAYERS, help = "Smallest table size")]
    min: usize,
    #[arg(long, default_value_t = SIMULATION_MAX_PLAYERS, help = "Largest table size")]
    max: usize,
    #[arg(long, default_value_t = CHIPS, help = "Chips each player starts with")]
    chips: Chips,
    #[arg(long, help = "Seed for reproducible deals")]
    seed: Option<u64>,
    #[arg(long, default_value = HAND_SCORES_PATH, help = "Hand score table, built if missing")]
    table: PathBuf,
    #[arg(long, default_value = OUTPUT_DIR, help = "Directory for record files")]
    output: PathBuf,
    #[arg(long, help = "Charge bottom scorers when a knock resolves")]
    knock_penalty: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    anyhow::ensure!(
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&args.min) && args.min <= args.max,
        "player range {}..={} outside {}..={}",
        args.min,
        args.max,
        MIN_PLAYERS,
        MAX_PLAYERS
    );
    anyhow::ensure!(args.max <= MAX_PLAYERS, "at most {} players", MAX_PLAYERS);
    let table = Arc::new(HandScores::open(&args.table)?) as Arc<dyn Lookup>;
    let policy = Arc::new(Heuristic::from(table)) as Arc<dyn Policy>;
    let rules = Rules::default().with_knock_penalty(args.knock_penalty);
    let ref path = args.output.join(format!("{}.jsonl", timestamp()));
    let mut simulator = Simulator::from(policy)
        .with_rules(rules)
        .with_chips(args.chips)
        .with_output(path)?;
    if let Some(seed) = args.seed {
        simulator = simulator.with_seed(seed);
    }
    let records = simulator.sweep(args.min, args.max, args.games)?;
    log::info!("wrote {} records from {} deals", records, simulator.dealt());
    Ok(())
}
