//! `repl::rooms` module
//!
//! Per-room handlers for any input the global verbs didn't claim. Each puzzle
//! awards its card on the first correct answer only; later correct answers get
//! an "already solved" hint, and wrong ones get a nudge without changing state.

use crate::audio::SoundId;
use crate::card::Card;
use crate::command::ParsedInput;
use crate::display::JumpscareId;
use crate::game::{Game, GameOutcome};
use crate::puzzle::{BEDROOM_ANSWER, CLOCK_TIME, KITCHEN_MESSAGE, LIVING_ANSWER};
use crate::repl::ReplControl;
use crate::room::RoomId;

use log::info;

/// Hand room-level input to the current room.
pub fn room_handler(game: &mut Game, input: &ParsedInput) -> ReplControl {
    match game.room {
        RoomId::Foyer => foyer_handler(game, input),
        RoomId::Living => living_handler(game, input),
        RoomId::Hallway => hallway_handler(game, input),
        RoomId::Bedroom => bedroom_handler(game, input),
        RoomId::Kitchen => kitchen_handler(game, input),
        RoomId::Escape => return escape_handler(game),
    }
    ReplControl::Continue
}

fn foyer_handler(game: &mut Game, input: &ParsedInput) {
    match input.verb.as_str() {
        "look" => game.look(),
        "tutorial" => {
            if game.ctx.give_card(Card::Beetle) {
                game.say("Player 2 hands you a carved \"beetle\" card.");
            } else {
                game.hint("You already took the tutorial card.");
            }
        },
        _ => game.hint("Try: look | tutorial | go \"living\""),
    }
}

fn living_handler(game: &mut Game, input: &ParsedInput) {
    match input.verb.as_str() {
        "look" => game.look(),
        "enter" if input.noun.trim() == LIVING_ANSWER => {
            if game.puzzles.living.solve() {
                info!("living room grid solved");
                game.ctx.audio.play_sfx(SoundId::Key);
                game.ctx.give_card(Card::Rat);
                game.say("You lift the board at B3. A recess holds a \"rat\" card. Doors creak open toward the hallway.");
            } else {
                game.hint("Already solved. Try: go \"hallway\"");
            }
        },
        "enter" => game.hint("Wrong spot. Hint in the \"book\": B then 3."),
        _ if game.puzzles.living.is_solved() => game.hint("Try: go \"hallway\""),
        _ => game.hint("Try: look | enter b3"),
    }
}

fn hallway_handler(game: &mut Game, input: &ParsedInput) {
    if !game.puzzles.living.is_solved() {
        game.hint("The hallway latch won't budge yet. Solve the living room first.");
        game.enter(RoomId::Living);
        game.describe_room();
        return;
    }

    match input.verb.as_str() {
        "look" => game.look(),
        "set" => match input.noun.trim().strip_prefix("clock ").map(str::trim) {
            Some(time) if time == CLOCK_TIME => {
                if game.puzzles.clock.solve() {
                    info!("hallway clock set to {CLOCK_TIME}");
                    game.ctx.give_card(Card::Raven);
                    game.say("Gears catch; a narrow recess opens in the hallway panel. You take the \"raven\" card.");
                } else {
                    game.hint("The hallway clock is already set. Maybe check the bedroom or kitchen.");
                }
            },
            Some(_) => game.hint("Ask Player 2 for the diorama time."),
            None => game.hint("Usage: set clock h:mm (e.g., set clock 9:15)"),
        },
        _ => game.hint("Try: look | set clock 9:15 | go \"bedroom\" | go \"kitchen\" | back"),
    }
}

fn bedroom_handler(game: &mut Game, input: &ParsedInput) {
    match input.verb.as_str() {
        "look" => game.look(),
        "rotate" if input.noun.trim() == BEDROOM_ANSWER => {
            if game.puzzles.bedroom.solve() {
                info!("bedroom bust turned east");
                game.ctx.give_card(Card::Snake);
                game.say("Stone clicks; an alcove opens. You take the \"snake\" card. (back to hallway)");
            } else {
                game.hint("Already solved. Type 'back' to the hallway.");
            }
        },
        "rotate" => game.hint("Usage: rotate head <direction>"),
        _ => game.hint("Try: look | rotate head east | back"),
    }
}

/// The kitchen never awards a card. Lighting the candles scares the player
/// once and points them back to the bedroom.
fn kitchen_handler(game: &mut Game, input: &ParsedInput) {
    match input.verb.as_str() {
        "look" => game.look(),
        "light" if input.noun.trim().starts_with("candles") => {
            if game.puzzles.kitchen.reveal_hint() {
                if game.puzzles.kitchen.take_jumpscare() {
                    info!("kitchen jumpscare fired");
                    game.ctx.audio.play_sfx(SoundId::Jumpscare);
                    game.ctx.display.show_jumpscare(JumpscareId::Whisper, game.jumpscare_ms);
                }
                game.say("The flames gutter and reveal a greasy message along the backsplash:");
                game.hint(KITCHEN_MESSAGE);
                game.say("(Head back to the bedroom.)");
            } else {
                game.hint(&format!("The message is already visible: {KITCHEN_MESSAGE}"));
            }
        },
        "light" => game.hint("Usage: light candles"),
        _ => game.hint("Try: look | light candles | back"),
    }
}

fn escape_handler(game: &mut Game) -> ReplControl {
    game.say("Night air floods in. Freedom!");
    ReplControl::End(GameOutcome::Escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::command::parse_input;
    use crate::context::GameContext;
    use crate::display::{HeadlessDisplay, Transcript};
    use crate::player::Player;
    use crate::timer::CountdownTimer;

    fn game_in(room: RoomId) -> (Game, Transcript) {
        let display = HeadlessDisplay::new();
        let transcript = display.transcript();
        let ctx = GameContext::new(
            Player::new(),
            CountdownTimer::new(480),
            Box::new(display),
            Box::new(SilentAudio),
        );
        let mut game = Game::new(ctx);
        game.room = room;
        (game, transcript)
    }

    fn send(game: &mut Game, raw: &str) -> ReplControl {
        room_handler(game, &parse_input(raw))
    }

    #[test]
    fn living_answer_must_be_exact_square() {
        let (mut game, transcript) = game_in(RoomId::Living);
        send(&mut game, "enter c2");
        assert!(!game.puzzles.living.is_solved());
        assert!(transcript.contains("Wrong spot."));
        send(&mut game, "enter B3");
        assert!(game.puzzles.living.is_solved());
        assert!(game.ctx.player.has_card(Card::Rat));
    }

    #[test]
    fn clock_distinguishes_wrong_time_from_bad_usage() {
        let (mut game, transcript) = game_in(RoomId::Hallway);
        game.puzzles.living.solve();
        send(&mut game, "set clock 10:30");
        assert!(transcript.contains("Ask Player 2 for the diorama time."));
        send(&mut game, "set the clock");
        assert!(transcript.contains("Usage: set clock h:mm"));
        assert!(!game.puzzles.clock.is_solved());
        send(&mut game, "set clock   9:15");
        assert!(game.puzzles.clock.is_solved());
    }

    #[test]
    fn hallway_sends_player_back_while_living_unsolved() {
        let (mut game, transcript) = game_in(RoomId::Hallway);
        send(&mut game, "set clock 9:15");
        assert_eq!(game.room, RoomId::Living);
        assert!(!game.puzzles.clock.is_solved());
        assert!(transcript.contains("latch won't budge"));
    }

    #[test]
    fn bedroom_rejects_other_directions() {
        let (mut game, transcript) = game_in(RoomId::Bedroom);
        send(&mut game, "rotate head west");
        assert!(transcript.contains("Usage: rotate head <direction>"));
        assert!(!game.ctx.player.has_card(Card::Snake));
    }

    #[test]
    fn kitchen_only_lights_candles() {
        let (mut game, transcript) = game_in(RoomId::Kitchen);
        send(&mut game, "light stove");
        assert!(transcript.contains("Usage: light candles"));
        assert_eq!(transcript.jumpscares(), 0);
        send(&mut game, "light candles 1,3,4");
        assert_eq!(transcript.jumpscares(), 1);
        assert_eq!(game.ctx.player.card_count(), 0);
    }

    #[test]
    fn escape_room_ends_the_game() {
        let (mut game, transcript) = game_in(RoomId::Escape);
        assert_eq!(send(&mut game, "anything"), ReplControl::End(GameOutcome::Escaped));
        assert!(transcript.contains("Freedom!"));
    }
}
