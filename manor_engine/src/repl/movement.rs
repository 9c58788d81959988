//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::game::Game;
use crate::room::RoomId;

use log::info;

/// Step back to the previous room on the path. Never blocked.
pub fn back_handler(game: &mut Game) {
    let to = game.room.predecessor();
    game.enter(to);
    game.describe_room();
}

/// Move to a neighboring room, if the way is open.
///
/// Invalid targets leave the room unchanged and name the valid choices. The
/// current (or new) room is described afterwards either way.
pub fn go_handler(game: &mut Game, target: &str) {
    let target = strip_quotes(target);

    if game.room == RoomId::Living && !game.puzzles.living.is_solved() {
        info!("go '{target}' blocked: living room unsolved");
        game.hint("The way forward is blocked. Solve the living room first.");
    } else {
        match target.parse::<RoomId>() {
            Ok(to) if game.room.leads_to(to) => game.enter(to),
            Ok(_) | Err(_) => {
                info!("go '{target}' rejected from the {}", game.room.title());
                game.toast(game.room.go_choices());
            },
        }
    }
    game.describe_room();
}

/// `"living"` and `living` name the same room.
fn strip_quotes(target: &str) -> &str {
    let trimmed = target.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_optional_around_targets() {
        assert_eq!(strip_quotes("\"living\""), "living");
        assert_eq!(strip_quotes("  kitchen "), "kitchen");
        assert_eq!(strip_quotes("\"hallway"), "\"hallway");
    }
}
