/// Table rules that vary between runs.
///
/// `knock_penalty` decides whether finishing the knock protocol charges the
/// bottom scorers. Off by default: only 31-wins cost chips.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    pub knock_penalty: bool,
}

impl Rules {
    pub fn with_knock_penalty(mut self, knock_penalty: bool) -> Self {
        self.knock_penalty = knock_penalty;
        self
    }
}
