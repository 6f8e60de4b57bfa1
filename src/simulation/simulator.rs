use super::Record;
use crate::CHIPS;
use crate::Chips;
use crate::gameplay::Game;
use crate::gameplay::Rules;
use crate::policy::Policy;
use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Deals games and replays each one under every possible knocker.
///
/// Every deal is cloned once per seat, so the N records it produces start
/// from the same hands, deck and discard pile and differ only in who knocks.
/// Records are returned and, when an output file is attached, appended to
/// it as JSON lines.
pub struct Simulator {
    policy: Arc<dyn Policy>,
    rules: Rules,
    chips: Chips,
    dealt: usize,
    rng: SmallRng,
    output: Option<BufWriter<File>>,
}

impl From<Arc<dyn Policy>> for Simulator {
    fn from(policy: Arc<dyn Policy>) -> Self {
        Self {
            policy,
            rules: Rules::default(),
            chips: CHIPS,
            dealt: 0,
            rng: SmallRng::from_rng(&mut rand::rng()),
            output: None,
        }
    }
}

/// Configuration.
impl Simulator {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
    pub fn with_chips(mut self, chips: Chips) -> Self {
        self.chips = chips;
        self
    }
    /// Appends every record to `path`, creating parent directories.
    pub fn with_output(mut self, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
        }
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open output file {}", path.display()))?;
        log::info!("writing records to {}", path.display());
        self.output = Some(BufWriter::new(file));
        Ok(self)
    }
    /// Deals started so far. Doubles as the next game id.
    pub fn dealt(&self) -> usize {
        self.dealt
    }
}

/// Running.
impl Simulator {
    /// Deals one game for `players` and plays it out once per knocker.
    pub fn simulate(&mut self, players: usize) -> anyhow::Result<Vec<Record>> {
        let game_id = self.dealt;
        let base = Game::deal(players, self.chips, self.policy.clone(), &mut self.rng)?
            .with_rules(self.rules);
        self.dealt += 1;
        let mut records = Vec::with_capacity(players);
        for knocker in 0..players {
            log::info!(
                "game_id = {:06}, num_players = {}, knocker = {}",
                game_id,
                players,
                knocker
            );
            let mut game = base.clone();
            game.play(knocker)?;
            log::debug!("\n{}", game);
            let record = Record::from((game_id, knocker, &game));
            self.write(&record)?;
            records.push(record);
        }
        Ok(records)
    }
    /// Simulates `games` deals for every table size in `min..=max`.
    /// Returns the number of records produced.
    pub fn sweep(&mut self, min: usize, max: usize, games: usize) -> anyhow::Result<usize> {
        let mut count = 0;
        for players in min..=max {
            log::info!("simulating {} games with {} players", games, players);
            for _ in 0..games {
                count += self.simulate(players)?.len();
            }
            self.flush()?;
        }
        Ok(count)
    }
    pub fn flush(&mut self) -> anyhow::Result<()> {
        if let Some(output) = self.output.as_mut() {
            output.flush().context("flush records")?;
        }
        Ok(())
    }
    fn write(&mut self, record: &Record) -> anyhow::Result<()> {
        if let Some(output) = self.output.as_mut() {
            serde_json::to_writer(&mut *output, record).context("serialize record")?;
            writeln!(output).context("write record")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("rules", &self.rules)
            .field("chips", &self.chips)
            .field("dealt", &self.dealt)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cards::Card;
    use crate::cards::Hand;
    use crate::policy::Decision;

    struct Keep;
    impl Policy for Keep {
        fn decide(&self, _: &Hand, _: Card) -> Decision {
            Decision::Keep
        }
    }

    fn simulator() -> Simulator {
        Simulator::from(Arc::new(Keep) as Arc<dyn Policy>).with_seed(31)
    }

    #[test]
    fn one_record_per_knocker() {
        let mut sim = simulator();
        for players in 2..=6 {
            let records = sim.simulate(players).unwrap();
            assert!(records.len() == players);
            assert!(records.iter().all(|r| r.players == players));
            assert!(records.iter().enumerate().all(|(i, r)| r.knocker == i));
        }
        assert!(sim.dealt() == 5);
    }

    #[test]
    fn game_ids_count_deals() {
        let mut sim = simulator();
        let first = sim.simulate(3).unwrap();
        let second = sim.simulate(3).unwrap();
        assert!(first.iter().all(|r| r.game_id == 0));
        assert!(second.iter().all(|r| r.game_id == 1));
    }

    #[test]
    fn seeds_reproduce_deals() {
        let a = simulator().simulate(4).unwrap();
        let b = simulator().simulate(4).unwrap();
        let hands = |records: &[Record]| {
            records
                .iter()
                .map(|r| r.hands.clone())
                .collect::<Vec<Vec<String>>>()
        };
        assert!(hands(&a) == hands(&b));
    }

    #[test]
    fn rejects_bad_tables() {
        let err = simulator().simulate(1).unwrap_err();
        assert!(err.downcast_ref::<Error>() == Some(&Error::InvalidPlayerCount(1)));
    }

    #[test]
    fn sweep_counts_records() {
        let count = simulator().sweep(2, 4, 3).unwrap();
        assert!(count == 3 * (2 + 3 + 4));
    }

    #[test]
    fn writes_json_lines() {
        let path = std::env::temp_dir()
            .join(format!("thirtyone-{}", std::process::id()))
            .join("records.jsonl");
        let _ = std::fs::remove_file(&path);
        let mut sim = simulator().with_output(&path).unwrap();
        sim.simulate(3).unwrap();
        sim.flush().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.lines().count() == 3);
        assert!(text.lines().all(|l| l.starts_with('{') && l.ends_with('}')));
        let _ = std::fs::remove_file(&path);
    }
}
