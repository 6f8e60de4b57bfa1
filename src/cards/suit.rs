use crate::Error;

/// Card suit. Clubs sort lowest, spades highest.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const COUNT: usize = 4;
    pub const MAX: Self = Suit::Spade;
    pub const MIN: Self = Suit::Club;

    pub fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Suit::Club),
            'D' => Ok(Suit::Diamond),
            'H' => Ok(Suit::Heart),
            'S' => Ok(Suit::Spade),
            _ => Err(Error::InvalidCard(c.to_string())),
        }
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        match s {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
