#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const MANOR_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod card;
pub mod command;
pub mod context;
pub mod game;
pub mod inventory;
pub mod item;
pub mod player;
pub mod puzzle;
pub mod repl;
pub mod room;
pub mod timer;

// Presentation and services
pub mod audio;
pub mod config;
pub mod data_paths;
pub mod display;
pub mod style;

// Re-exports for convenience
pub use audio::{AssetAudio, AudioSink, RecordingAudio, SilentAudio, SoundEvent, SoundId};
pub use card::{CARD_TOTAL, Card};
pub use config::{ManorConfig, load_config};
pub use context::GameContext;
pub use display::{DisplayEvent, DisplaySink, HeadlessDisplay, TerminalDisplay, Transcript};
pub use game::{Game, GameOutcome};
pub use inventory::Inventory;
pub use item::Item;
pub use player::Player;
pub use repl::{InputEvent, InputManager, InputSource, ReplControl, ScriptedInput, process_input, run_game};
pub use room::RoomId;
pub use timer::{Clock, CountdownTimer, ManualClock, MonotonicClock};
