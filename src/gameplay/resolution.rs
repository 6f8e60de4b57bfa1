use crate::Position;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// A player held 31. Everyone else pays a chip.
    Winner(Position),
    /// The deck ran dry on a declined discard. Nobody pays.
    Exhausted,
    /// The knock came back around. Bottom scorers other than the knocker
    /// may pay, depending on [`Rules`](super::Rules).
    Knocked(Position),
}

impl Resolution {
    pub fn winner(&self) -> Option<Position> {
        match self {
            Resolution::Winner(p) => Some(*p),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Resolution::Winner(p) => write!(f, "31 by {}", p),
            Resolution::Exhausted => write!(f, "exhausted"),
            Resolution::Knocked(p) => write!(f, "knock by {}", p),
        }
    }
}
