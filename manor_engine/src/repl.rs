//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module drives one input cycle
//! at a time and its submodules implement the handlers that move a [`Game`]
//! through the manor.

pub mod input;
pub mod menu;
pub mod movement;
pub mod rooms;
pub mod system;

pub use input::{InputEvent, InputManager, InputSource, ScriptedInput};
pub use menu::*;
pub use movement::*;
pub use rooms::*;
pub use system::*;

use crate::audio::SoundId;
use crate::command::{Command, parse_command};
use crate::game::{Game, GameOutcome};
use crate::room::RoomId;
use crate::style::GameStyle;

use anyhow::{Context, Result};
use log::{info, warn};
use std::io;

/// Toast for input bytes that couldn't be read as a line.
pub const UNREADABLE_LINE: &str = "That line couldn't be read. Try again.";

/// Control flow signal used by handlers to end the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    End(GameOutcome),
}

/// Run a whole session: the menu, then the main loop until the game ends.
///
/// # Errors
/// - if reading player input fails unrecoverably
pub fn run_game(game: &mut Game, input: &mut dyn InputSource) -> Result<GameOutcome> {
    if !menu_phase(game, input)? {
        end_session(game, GameOutcome::Quit);
        return Ok(GameOutcome::Quit);
    }
    start_session(game);

    let prompt = "\n> ".prompt_style().to_string();
    loop {
        let event = match input.read_line(&prompt) {
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!("unreadable input line: {err}");
                game.toast(UNREADABLE_LINE);
                continue;
            },
            other => other.context("reading player input")?,
        };
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                game.toast("Command canceled.");
                continue;
            },
        };

        if let ReplControl::End(outcome) = process_input(game, &line) {
            end_session(game, outcome);
            return Ok(outcome);
        }
    }
}

/// Start the clock and show the first room.
pub fn start_session(game: &mut Game) {
    game.ctx.audio.play_music(SoundId::GameLoop);
    game.ctx.timer.start();
    game.ctx.display.clear();
    game.draw_frame();
    game.describe_room();
}

/// Handle a single line of input: one full cycle of the game loop.
///
/// The timer is checked before anything is dispatched, so an expired clock
/// ends the game even when the line would have won it.
pub fn process_input(game: &mut Game, raw: &str) -> ReplControl {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let command = parse_command(raw);
    game.turn_count += 1;
    info!("================> TURN {} <================ {raw:?}", game.turn_count);

    game.ctx.display.clear();
    game.draw_frame();

    if game.ctx.timer.expired() {
        return timeout_handler(game);
    }

    match command {
        Quit => return quit_handler(game),
        Help => help_handler(game),
        Inventory => inv_handler(game),
        Cards => cards_handler(game),
        Back => back_handler(game),
        Go(target) => go_handler(game, &target),
        Room(parsed) => {
            if let ReplControl::End(outcome) = room_handler(game, &parsed) {
                return ReplControl::End(outcome);
            }
            return check_escape(game);
        },
    }
    ReplControl::Continue
}

/// Force the escape once the whole card set is held.
pub fn check_escape(game: &mut Game) -> ReplControl {
    if game.ctx.player.has_all_cards() && game.room != RoomId::Escape {
        info!("all cards collected in the {}; escaping", game.room.title());
        game.room = RoomId::Escape;
        game.say("The main door groans open; your cards resonate in the stone. YOU ESCAPE!");
        return ReplControl::End(GameOutcome::Escaped);
    }
    ReplControl::Continue
}
