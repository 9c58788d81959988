//! repl::menu
//!
//! The title menu shown before the clock starts.

use super::input::{InputEvent, InputSource};
use super::UNREADABLE_LINE;
use crate::audio::SoundId;
use crate::game::Game;
use crate::style::GameStyle;

use anyhow::{Context, Result};
use log::{info, warn};
use std::io;

pub const MENU_PROMPT: &str = "\n[Menu] Type 'play', 'help', or 'quit': ";

const MENU_HELP: &[&str] = &[
    "HOW TO PLAY",
    "Player 1 sits at the keyboard and types commands.",
    "Player 2 holds the paper map and the diorama, and reads clues aloud.",
    "Solve each room together to collect four cards: Beetle, Rat, Raven and Snake.",
    "Collect all four before the clock runs out and the main door opens.",
    "In game, type 'help' for commands.",
];

/// A line typed at the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Help,
    Quit,
    Unknown,
}

pub fn parse_menu_choice(raw: &str) -> MenuChoice {
    match raw.trim().to_lowercase().as_str() {
        "play" => MenuChoice::Play,
        "help" => MenuChoice::Help,
        "quit" => MenuChoice::Quit,
        _ => MenuChoice::Unknown,
    }
}

/// Show the intro and loop on the menu prompt.
///
/// Returns `true` when the player chose to play, `false` on quit or end of input.
/// The countdown is never started here.
///
/// # Errors
/// - if reading player input fails unrecoverably
pub fn menu_phase(game: &mut Game, input: &mut dyn InputSource) -> Result<bool> {
    game.ctx.display.clear();
    game.ctx.display.show_intro();
    game.ctx.audio.play_music(SoundId::MenuTheme);

    let prompt = MENU_PROMPT.prompt_style().to_string();
    loop {
        let event = match input.read_line(&prompt) {
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!("unreadable menu line: {err}");
                game.toast(UNREADABLE_LINE);
                continue;
            },
            other => other.context("reading menu input")?,
        };
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => continue,
        };

        let choice = parse_menu_choice(&line);
        info!("menu choice: {choice:?}");
        match choice {
            MenuChoice::Play => return Ok(true),
            MenuChoice::Help => {
                for line in MENU_HELP {
                    game.say(line);
                }
            },
            MenuChoice::Quit => {
                game.say("Goodbye!");
                return Ok(false);
            },
            MenuChoice::Unknown => game.toast("Unknown option. Type 'play', 'help', or 'quit'."),
        }
    }
}
