//! Rooms of the manor and the fixed graph connecting them.
//!
//! The path is linear from the foyer to the hallway, branches to the bedroom
//! and kitchen, and ends at the main door once every card is held. Room text
//! lives here too so handlers only decide *when* to show it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use variantly::Variantly;

/// Every place the player can be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Variantly)]
pub enum RoomId {
    #[default]
    Foyer,
    Living,
    Hallway,
    Bedroom,
    Kitchen,
    Escape,
}

/// A `go` target that names no room.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no room called '{0}'")]
pub struct RoomParseError(pub String);

impl FromStr for RoomId {
    type Err = RoomParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foyer" => Ok(RoomId::Foyer),
            "living" => Ok(RoomId::Living),
            "hallway" => Ok(RoomId::Hallway),
            "bedroom" => Ok(RoomId::Bedroom),
            "kitchen" => Ok(RoomId::Kitchen),
            "escape" => Ok(RoomId::Escape),
            other => Err(RoomParseError(other.to_string())),
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl RoomId {
    /// Name shown in the HUD.
    pub fn title(self) -> &'static str {
        match self {
            RoomId::Foyer => "Foyer",
            RoomId::Living => "Living Room",
            RoomId::Hallway => "Hallway",
            RoomId::Bedroom => "Bedroom",
            RoomId::Kitchen => "Kitchen",
            RoomId::Escape => "Main Door",
        }
    }

    /// Where `back` leads. Never gated by puzzle state.
    pub fn predecessor(self) -> RoomId {
        match self {
            RoomId::Living => RoomId::Foyer,
            RoomId::Hallway => RoomId::Living,
            RoomId::Bedroom | RoomId::Kitchen => RoomId::Hallway,
            RoomId::Foyer | RoomId::Escape => RoomId::Foyer,
        }
    }

    /// Rooms reachable from here with `go`, before any puzzle gate is applied.
    pub fn exits(self) -> &'static [RoomId] {
        match self {
            RoomId::Foyer => &[RoomId::Living],
            RoomId::Living => &[RoomId::Hallway],
            RoomId::Hallway => &[RoomId::Bedroom, RoomId::Kitchen],
            RoomId::Bedroom | RoomId::Kitchen => &[RoomId::Hallway],
            RoomId::Escape => &[],
        }
    }

    pub fn leads_to(self, target: RoomId) -> bool {
        self.exits().contains(&target)
    }

    /// Toast shown when a `go` target isn't one of this room's exits.
    pub fn go_choices(self) -> &'static str {
        match self {
            RoomId::Foyer => "From the foyer, you can go to \"living\".",
            RoomId::Living => "From here, try: go \"hallway\".",
            RoomId::Hallway => "Choices here: set clock h:mm  |  go \"bedroom\"  |  go \"kitchen\"  |  back",
            RoomId::Bedroom | RoomId::Kitchen => "Try: back (to hallway).",
            RoomId::Escape => "You hesitate, unsure of the way.",
        }
    }

    /// Short description printed on arrival.
    pub fn summary(self) -> &'static [&'static str] {
        match self {
            RoomId::Foyer => &[
                "You're a pizza guy who delivered to the wrong house.",
                "Try: tutorial | go \"living\"",
            ],
            RoomId::Living => &["A scuffed floor grid and a loose board.", "Try: look | enter b3 | back"],
            RoomId::Hallway => &[
                "Portraits and a ticking clock. Doors lead to the bedroom and the kitchen.",
                "Try: look | set clock 9:15 | go \"bedroom\" | go \"kitchen\" | back",
            ],
            RoomId::Bedroom => &["A marble bust with a rotating head.", "Try: look | rotate head east | back"],
            RoomId::Kitchen => &[
                "Soot-blackened candles. A faint morse chart scratched into the wall.",
                "Try: look | light candles | back",
            ],
            RoomId::Escape => &["Night air floods in. Freedom!"],
        }
    }

    /// Full text for `look`.
    pub fn look_text(self) -> &'static [&'static str] {
        match self {
            RoomId::Foyer => &[
                "FOYER: You're a pizza guy who delivered to the wrong house. The air is stale.",
                "Ahead, a Skeleton and a door to what seems to be a \"living\" room.",
                "Try: tutorial | go \"living\"",
            ],
            RoomId::Living => &[
                "LIVING ROOM: A scuffed floor \"grid\" (3x3) with a loose \"board\". A dusty \"book\" rests nearby.",
                "Solve the grid to proceed; Player 2 can read the book on the map.",
            ],
            RoomId::Hallway => &[
                "HALLWAY: Portraits line the walls. A wall \"clock\" with loose hands ticks softly.",
                "Doors lead to the \"bedroom\" and the \"kitchen\".",
                "You can solve the clock here (ask Player 2 for the time on the map), or explore the rooms.",
                "Try: set clock h:mm  |  go \"bedroom\"  |  go \"kitchen\"",
            ],
            RoomId::Bedroom => &[
                "BEDROOM: A marble \"bust\" on a pedestal. The \"head\" rotates. A plaque: \"Greet the first light.\"",
                "Try: rotate head <direction>",
            ],
            RoomId::Kitchen => &[
                "KITCHEN: Soot-blackened \"candles\" line the counter. A faint morse chart is scratched into the wall.",
                "Something about this room feels staged.",
                "Try: light candles",
            ],
            RoomId::Escape => &["MAIN DOOR: The lock is open and the night is waiting."],
        }
    }

    /// Room-level verbs, listed by `help`.
    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            RoomId::Foyer => &["look", "tutorial"],
            RoomId::Living => &["look", "enter <square>"],
            RoomId::Hallway => &["look", "set clock h:mm"],
            RoomId::Bedroom => &["look", "rotate head <direction>"],
            RoomId::Kitchen => &["look", "light candles"],
            RoomId::Escape => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_reverses_forward_path() {
        assert_eq!(RoomId::Living.predecessor(), RoomId::Foyer);
        assert_eq!(RoomId::Hallway.predecessor(), RoomId::Living);
        assert_eq!(RoomId::Bedroom.predecessor(), RoomId::Hallway);
        assert_eq!(RoomId::Kitchen.predecessor(), RoomId::Hallway);
        assert_eq!(RoomId::Foyer.predecessor(), RoomId::Foyer);
        assert_eq!(RoomId::Escape.predecessor(), RoomId::Foyer);
    }

    #[test]
    fn forward_exits_follow_predecessors() {
        for room in [RoomId::Living, RoomId::Hallway, RoomId::Bedroom, RoomId::Kitchen] {
            assert!(room.predecessor().leads_to(room), "{room:?} not reachable from its predecessor");
        }
    }

    #[test]
    fn branch_rooms_only_lead_back_to_hallway() {
        assert_eq!(RoomId::Bedroom.exits(), &[RoomId::Hallway]);
        assert!(!RoomId::Kitchen.leads_to(RoomId::Bedroom));
        assert!(RoomId::Escape.exits().is_empty());
    }

    #[test]
    fn parses_exact_room_names_only() {
        assert_eq!("kitchen".parse::<RoomId>(), Ok(RoomId::Kitchen));
        assert_eq!("living".parse::<RoomId>(), Ok(RoomId::Living));
        assert_eq!(
            "living room".parse::<RoomId>(),
            Err(RoomParseError("living room".to_string()))
        );
    }

    #[test]
    fn default_room_is_foyer() {
        assert!(RoomId::default().is_foyer());
        assert_eq!(RoomId::Escape.to_string(), "Main Door");
    }
}
