//! Per-puzzle state records.
//!
//! Each flag starts false, flips once, and never resets for the session.

/// Floor-grid square that hides the rat card.
pub const LIVING_ANSWER: &str = "b3";
/// Time shown on the diorama's clock.
pub const CLOCK_TIME: &str = "9:15";
/// What the bedroom bust wants.
pub const BEDROOM_ANSWER: &str = "head east";
/// The kitchen's message, revealed by lighting the candles.
pub const KITCHEN_MESSAGE: &str = "\"SEARCH BENEATH THE BUST, LEFT FRONT.\"";

/// A puzzle that is solved exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Puzzle {
    solved: bool,
}
impl Puzzle {
    pub fn is_solved(self) -> bool {
        self.solved
    }

    /// Marks the puzzle solved. Returns true only on the first call.
    pub fn solve(&mut self) -> bool {
        !std::mem::replace(&mut self.solved, true)
    }
}

/// The kitchen's red herring: a one-shot scare and a hint, never a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitchenPuzzle {
    hint_given: bool,
    jumpscare_used: bool,
}
impl KitchenPuzzle {
    pub fn hint_given(self) -> bool {
        self.hint_given
    }

    pub fn jumpscare_used(self) -> bool {
        self.jumpscare_used
    }

    /// Returns true the first time only; the scare never repeats.
    pub fn take_jumpscare(&mut self) -> bool {
        !std::mem::replace(&mut self.jumpscare_used, true)
    }

    /// Returns true the first time the hint is revealed.
    pub fn reveal_hint(&mut self) -> bool {
        !std::mem::replace(&mut self.hint_given, true)
    }
}

/// All puzzle state owned by the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleBook {
    pub living: Puzzle,
    pub clock: Puzzle,
    pub bedroom: Puzzle,
    pub kitchen: KitchenPuzzle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_solves_once() {
        let mut puzzle = Puzzle::default();
        assert!(!puzzle.is_solved());
        assert!(puzzle.solve());
        assert!(!puzzle.solve());
        assert!(puzzle.is_solved());
    }

    #[test]
    fn kitchen_one_shots_are_independent() {
        let mut kitchen = KitchenPuzzle::default();
        assert!(kitchen.take_jumpscare());
        assert!(!kitchen.hint_given());
        assert!(kitchen.reveal_hint());
        assert!(!kitchen.take_jumpscare());
        assert!(!kitchen.reveal_hint());
        assert!(kitchen.jumpscare_used() && kitchen.hint_given());
    }

    #[test]
    fn book_starts_unsolved() {
        let book = PuzzleBook::default();
        assert!(!book.living.is_solved());
        assert!(!book.clock.is_solved());
        assert!(!book.bedroom.is_solved());
        assert!(!book.kitchen.hint_given());
    }
}
