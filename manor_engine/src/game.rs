//! The room/puzzle state machine.
//!
//! [`Game`] owns the current room and every puzzle record, plus the shared
//! [`GameContext`]. The REPL in [`crate::repl`] feeds it one input at a time.

use crate::audio::SoundId;
use crate::config::ManorConfig;
use crate::context::GameContext;
use crate::puzzle::PuzzleBook;
use crate::room::RoomId;

use log::info;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// All four cards collected.
    Escaped,
    /// The countdown reached zero.
    TimedOut,
    /// The player quit (or input ran out).
    Quit,
}

pub struct Game {
    pub ctx: GameContext,
    pub room: RoomId,
    pub puzzles: PuzzleBook,
    pub jumpscare_ms: u64,
    pub turn_count: usize,
}
impl Game {
    /// A fresh game in the foyer with every puzzle unsolved.
    pub fn new(ctx: GameContext) -> Self {
        Self {
            ctx,
            room: RoomId::default(),
            puzzles: PuzzleBook::default(),
            jumpscare_ms: ManorConfig::default().jumpscare_ms,
            turn_count: 0,
        }
    }

    #[must_use]
    pub fn with_jumpscare_ms(mut self, jumpscare_ms: u64) -> Self {
        self.jumpscare_ms = jumpscare_ms;
        self
    }

    /// Move to `room` without any gate checks.
    pub fn enter(&mut self, room: RoomId) {
        if room != self.room {
            info!("player moved: {} -> {}", self.room.title(), room.title());
        }
        self.room = room;
        if room.is_bedroom() {
            self.ctx.audio.play_sfx(SoundId::DoorBedroom);
        }
    }

    /// Print the current room's short description.
    pub fn describe_room(&mut self) {
        self.ctx.display.type_text(&format!("{}:", self.room.title()));
        for line in self.room.summary() {
            self.ctx.display.type_text(line);
        }
    }

    /// Print the current room's full `look` text.
    pub fn look(&mut self) {
        for line in self.room.look_text() {
            self.ctx.display.type_text(line);
        }
    }

    pub fn draw_frame(&mut self) {
        self.ctx.draw_frame(self.room);
    }

    pub fn hint(&mut self, text: &str) {
        self.ctx.display.hint(text);
    }

    pub fn say(&mut self, text: &str) {
        self.ctx.display.type_text(text);
    }

    pub fn toast(&mut self, text: &str) {
        self.ctx.display.toast(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use crate::audio::{RecordingAudio, SoundEvent};
    use crate::display::HeadlessDisplay;
    use crate::timer::CountdownTimer;

    #[test]
    fn new_game_starts_in_foyer_unsolved() {
        let ctx = GameContext::new(
            Player::new(),
            CountdownTimer::new(480),
            Box::new(HeadlessDisplay::new()),
            Box::new(RecordingAudio::new()),
        );
        let game = Game::new(ctx).with_jumpscare_ms(250);
        assert_eq!(game.room, RoomId::Foyer);
        assert_eq!(game.puzzles, PuzzleBook::default());
        assert_eq!(game.jumpscare_ms, 250);
    }

    #[test]
    fn entering_bedroom_plays_door_sound() {
        let audio = RecordingAudio::new();
        let log = audio.log();
        let display = HeadlessDisplay::new();
        let transcript = display.transcript();
        let ctx = GameContext::new(Player::new(), CountdownTimer::new(480), Box::new(display), Box::new(audio));
        let mut game = Game::new(ctx);
        game.enter(RoomId::Hallway);
        assert!(log.borrow().is_empty());
        game.enter(RoomId::Bedroom);
        assert_eq!(*log.borrow(), vec![SoundEvent::Sfx(SoundId::DoorBedroom)]);
        game.describe_room();
        assert!(transcript.contains("Bedroom:"));
        assert!(transcript.contains("marble bust"));
    }
}
