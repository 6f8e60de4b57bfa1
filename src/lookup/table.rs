use super::Lookup;
use crate::DECK_SIZE;
use crate::cards::Card;
use crate::cards::Score;
use anyhow::Context;
use rayon::prelude::*;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;

/// Dense score table over every ordered triple of distinct cards.
///
/// One byte per `(card_one, card_two, card_three)` slot, indexed by the
/// cards' canonical bytes. A zero byte marks a slot the table holds no score
/// for: repeated cards, or rows missing from a partial file.
///
/// # Disk
///
/// Text file with a `card_one,card_two,card_three,score` header and one row
/// per triple, e.g. `AS,KS,QS,31` or `7C,7D,7H,30.5`.
#[derive(Clone, PartialEq, Eq)]
pub struct HandScores(Vec<u8>);

impl HandScores {
    const SLOTS: usize = DECK_SIZE * DECK_SIZE * DECK_SIZE;
    const HEADER: &'static str = "card_one,card_two,card_three,score";

    pub fn empty() -> Self {
        Self(vec![0; Self::SLOTS])
    }
    /// Scores every ordered triple of distinct cards from scratch.
    pub fn grow() -> Self {
        Self(
            (0..Self::SLOTS)
                .into_par_iter()
                .map(Self::unindex)
                .map(|(a, b, c)| {
                    if a != b && b != c && a != c {
                        u8::from(Score::from([a, b, c]))
                    } else {
                        0
                    }
                })
                .collect(),
        )
    }
    /// Read from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open hand scores {}", path.display()))?;
        let mut table = Self::empty();
        for (i, line) in std::io::BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("read line {}", i + 1))?;
            let line = line.trim();
            if line.is_empty() || line == Self::HEADER {
                continue;
            }
            let (key, score) = Self::row(line).with_context(|| format!("parse line {}", i + 1))?;
            table.insert(key, score);
        }
        log::debug!("loaded {} hand scores from {}", table.len(), path.display());
        Ok(table)
    }
    /// Write to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("create hand scores {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        writeln!(writer, "{}", Self::HEADER)?;
        for ((a, b, c), score) in self.rows() {
            writeln!(writer, "{},{},{},{}", a, b, c, score)?;
        }
        writer.flush()?;
        log::debug!("saved {} hand scores to {}", self.len(), path.display());
        Ok(())
    }
    /// Load if the file exists, otherwise grow (and keep) a fresh table.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("no hand scores at {}, growing", path.display());
            let table = Self::grow();
            table.save(path)?;
            Ok(table)
        }
    }
    pub fn insert(&mut self, (a, b, c): (Card, Card, Card), score: Score) {
        self.0[Self::index(a, b, c)] = u8::from(score);
    }
    /// Number of triples with a score.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|x| **x > 0).count()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Every scored triple, in canonical order.
    pub fn rows(&self) -> impl Iterator<Item = ((Card, Card, Card), Score)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, x)| **x > 0)
            .map(|(i, x)| (Self::unindex(i), Score::from(*x)))
    }

    fn row(line: &str) -> anyhow::Result<((Card, Card, Card), Score)> {
        let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
        match fields.as_slice() {
            [a, b, c, score] => {
                let a = Card::try_from(*a)?;
                let b = Card::try_from(*b)?;
                let c = Card::try_from(*c)?;
                let score = score
                    .parse::<f32>()
                    .map_err(anyhow::Error::from)
                    .and_then(|x| Score::try_from(x).map_err(anyhow::Error::msg))?;
                anyhow::ensure!(a != b && b != c && a != c, "repeated card in {}", line);
                Ok(((a, b, c), score))
            }
            _ => Err(anyhow::anyhow!("expected 4 fields in {:?}", line)),
        }
    }
    fn index(a: Card, b: Card, c: Card) -> usize {
        (u8::from(a) as usize * DECK_SIZE + u8::from(b) as usize) * DECK_SIZE + u8::from(c) as usize
    }
    fn unindex(i: usize) -> (Card, Card, Card) {
        (
            Card::from((i / DECK_SIZE / DECK_SIZE) as u8),
            Card::from((i / DECK_SIZE % DECK_SIZE) as u8),
            Card::from((i % DECK_SIZE) as u8),
        )
    }
}

impl Lookup for HandScores {
    fn lookup(&self, (a, b): (Card, Card), c: Card) -> Option<Score> {
        match self.0[Self::index(a, b, c)] {
            0 => None,
            x => Some(Score::from(x)),
        }
    }
}

impl std::fmt::Debug for HandScores {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("HandScores").field(&self.len()).finish()
    }
}
