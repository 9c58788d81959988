//! Command module
//!
//! Splits raw player input into a verb and a noun, then sorts the verb into
//! either a global command or input meant for the current room's handler.
use variantly::Variantly;

/// Raw player input split into a lower-cased verb and the (lower-cased) remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub verb: String,
    pub noun: String,
}
impl ParsedInput {
    pub fn new(verb: impl Into<String>, noun: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            noun: noun.into(),
        }
    }

    /// True if the input was empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.verb.is_empty()
    }
}

/// Commands recognized ahead of any room handler.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Back,
    Cards,
    Go(String),
    Help,
    Inventory,
    Quit,
    /// Anything else goes to the current room.
    Room(ParsedInput),
}

/// Split `raw` on the first run of whitespace into a verb and a noun.
///
/// Both halves are lower-cased; the noun keeps any interior whitespace.
/// Empty or whitespace-only input yields an empty verb and noun.
pub fn parse_input(raw: &str) -> ParsedInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedInput::default();
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => ParsedInput::new(verb.to_lowercase(), rest.trim_start().to_lowercase()),
        None => ParsedInput::new(trimmed.to_lowercase(), String::new()),
    }
}

/// Parses an input line and classifies it as a global `Command` or room input.
pub fn parse_command(raw: &str) -> Command {
    classify(parse_input(raw))
}

/// Sort already-parsed input into a `Command`.
pub fn classify(input: ParsedInput) -> Command {
    match input.verb.as_str() {
        "quit" => Command::Quit,
        "help" => Command::Help,
        "inventory" | "inv" | "bag" => Command::Inventory,
        "cards" => Command::Cards,
        "back" => Command::Back,
        "go" => Command::Go(input.noun),
        _ => Command::Room(input),
    }
}

/// Every verb the game understands somewhere, used for tab completion.
pub const VOCABULARY: &[&str] = &[
    "back",
    "bag",
    "cards",
    "enter",
    "go",
    "help",
    "inv",
    "inventory",
    "light",
    "look",
    "play",
    "quit",
    "rotate",
    "set",
    "tutorial",
];
