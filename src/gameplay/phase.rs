/// Where a game stands.
///
/// - `Dealt`: hands formed, nobody has acted
/// - `Playing`: turns are being taken
/// - `Knocked`: the knocker has knocked; everyone else gets one last turn
/// - `Resolved`: terminal, see [`Resolution`](super::Resolution)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Dealt,
    Playing,
    Knocked,
    Resolved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Dealt => write!(f, "dealt"),
            Phase::Playing => write!(f, "playing"),
            Phase::Knocked => write!(f, "knocked"),
            Phase::Resolved => write!(f, "resolved"),
        }
    }
}
