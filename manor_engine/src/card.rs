//! Cards -- the four tokens needed to open the main door.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct cards needed to escape.
pub const CARD_TOTAL: usize = 4;

/// One card per solvable puzzle. Ordered by where they are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    /// foyer tutorial
    Beetle,
    /// living room floor grid
    Rat,
    /// hallway clock
    Raven,
    /// bedroom bust
    Snake,
}
impl Card {
    pub const ALL: [Card; CARD_TOTAL] = [Card::Beetle, Card::Rat, Card::Raven, Card::Snake];

    pub fn name(self) -> &'static str {
        match self {
            Card::Beetle => "Beetle",
            Card::Rat => "Rat",
            Card::Raven => "Raven",
            Card::Snake => "Snake",
        }
    }
}
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cards_are_distinct_and_counted() {
        let set: std::collections::BTreeSet<_> = Card::ALL.iter().collect();
        assert_eq!(set.len(), CARD_TOTAL);
    }

    #[test]
    fn display_uses_card_name() {
        assert_eq!(Card::Raven.to_string(), "Raven");
    }
}
