//! `repl::system` module
//!
//! Contains repl loop handlers for commands that don't touch the manor itself:
//! quitting, help, inventory and card listings, plus the end-of-session wrap-up.

use crate::MANOR_VERSION;
use crate::audio::SoundId;
use crate::card::CARD_TOTAL;
use crate::game::{Game, GameOutcome};
use crate::repl::ReplControl;
use crate::timer::format_clock;

use log::info;

const GLOBAL_VERBS: &[&str] = &["inventory", "cards", "go <room>", "back", "help", "quit"];

/// Quit the game.
pub fn quit_handler(game: &mut Game) -> ReplControl {
    info!("player quit in the {} after {} turns", game.room.title(), game.turn_count);
    game.say("Thanks for playing!");
    ReplControl::End(GameOutcome::Quit)
}

/// List the verbs that work right now: the room's own, then the global ones.
pub fn help_handler(game: &mut Game) {
    let verbs: Vec<&str> = game.room.verbs().iter().chain(GLOBAL_VERBS).copied().collect();
    game.toast(&format!("Commands: {}", verbs.join(" | ")));
    game.hint(&format!("manor_engine v{MANOR_VERSION}"));
}

/// Show the item listing followed by the cards.
pub fn inv_handler(game: &mut Game) {
    let listing = game.ctx.player.inventory.list_all();
    let cards = game.ctx.player.cards_listing();
    game.say(&listing);
    game.say(&cards);
}

pub fn cards_handler(game: &mut Game) {
    let cards = game.ctx.player.cards_listing();
    game.say(&cards);
}

/// The clock ran out.
pub fn timeout_handler(game: &mut Game) -> ReplControl {
    info!("timer expired in the {}", game.room.title());
    game.say("Time's up! The mansion swallows the light...");
    game.say("GAME OVER");
    ReplControl::End(GameOutcome::TimedOut)
}

/// Line shown after every ending.
pub fn session_summary(game: &Game) -> String {
    format!(
        "Cards collected: {}/{CARD_TOTAL} | Time left: {}",
        game.ctx.player.card_count(),
        format_clock(game.ctx.timer.remaining_seconds())
    )
}

/// Wind down a session however it ended: freeze the clock, silence the music,
/// and report what the player walked away with.
pub fn end_session(game: &mut Game, outcome: GameOutcome) {
    game.ctx.timer.stop();
    game.ctx.audio.stop_music();
    if outcome == GameOutcome::Escaped {
        game.ctx.audio.play_sfx(SoundId::Win);
    }

    let summary = session_summary(game);
    game.toast(&summary);

    info!("session ended: {outcome:?} ({summary})");
    info!("ending cards:");
    game.ctx.player.cards().for_each(|c| info!("* {c}"));
    info!("ending inventory:");
    game.ctx
        .player
        .inventory
        .iter()
        .for_each(|i| info!("- {} ({})", i.name(), i.id()));
}
