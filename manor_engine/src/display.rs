//! Display sinks.
//!
//! The game never prints directly; everything the player sees goes through a
//! [`DisplaySink`]. Sinks own every presentation concern (typewriter pacing,
//! wrapping, colors, flashes) and swallow their own failures, so a sink that
//! does nothing at all still lets the game be played to completion.

use std::cell::RefCell;
use std::io::{self, IsTerminal, Write};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use log::{debug, warn};
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::GameStyle;
use crate::timer::format_clock;

/// Cells in the HUD time bar.
pub const TIME_BAR_WIDTH: usize = 24;
const RULE: &str = "========================================";
const ANSI_CLEAR: &str = "\x1B[2J\x1B[H";
const PLAIN_CLEAR: &str = "\n--------------------------------\n";
/// Below this many seconds the HUD clock turns red.
const LOW_TIME_SECS: u64 = 60;

/// Scripted scare sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpscareId {
    Shadow,
    Slam,
    Whisper,
}
impl JumpscareId {
    pub fn art(self) -> &'static str {
        match self {
            JumpscareId::Shadow => "   .-.\n  (o o)   A shadow flickers,\n   |O|    too close.\n   | |",
            JumpscareId::Slam => "+---------+\n|  BANG!  |\n+---------+",
            JumpscareId::Whisper => "  ~ ~ ~\n ( sss )  A whisper brushes your ear.\n  ~ ~ ~",
        }
    }
}

/// Everything the game asks of a display.
pub trait DisplaySink {
    fn clear(&mut self);
    /// Persistent header: room, time left, and cards held.
    fn frame(&mut self, room_title: &str, seconds_remaining: u64, card_count: usize, card_total: usize);
    /// Narrative text.
    fn type_text(&mut self, text: &str);
    /// Neutral notice.
    fn toast(&mut self, text: &str);
    /// Bracketed hint.
    fn hint(&mut self, text: &str);
    fn show_intro(&mut self);
    fn show_jumpscare(&mut self, id: JumpscareId, duration_ms: u64);
}

/// `[####----]` style bar showing the share of the budget still left.
pub fn time_bar(seconds_left: u64, total_seconds: u64) -> String {
    let total = total_seconds.max(1);
    let left = seconds_left.min(total);
    #[allow(clippy::cast_possible_truncation)]
    let fill_cells = ((left as u128 * TIME_BAR_WIDTH as u128) / u128::from(total)) as usize;
    format!("[{}{}]", "#".repeat(fill_cells), "-".repeat(TIME_BAR_WIDTH - fill_cells))
}

/// Clears the screen on a terminal; elsewhere just marks the break.
fn clear_sequence(interactive: bool) -> &'static str {
    if interactive { ANSI_CLEAR } else { PLAIN_CLEAR }
}

/// Color terminal display with a typewriter effect.
#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    pub type_delay_ms: u64,
    pub intro_type_delay_ms: u64,
    pub total_seconds: u64,
    /// False when stdout is piped; no escape sequences are written then.
    pub interactive: bool,
}
impl TerminalDisplay {
    pub fn new(type_delay_ms: u64, intro_type_delay_ms: u64, total_seconds: u64) -> Self {
        Self {
            type_delay_ms,
            intro_type_delay_ms,
            total_seconds,
            interactive: io::stdout().is_terminal(),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{text}") {
            warn!("display write failed: {e}");
        }
    }

    fn typewrite(&self, text: &str, delay_ms: u64) {
        let wrapped = fill(text, termwidth());
        if delay_ms == 0 {
            self.emit(&wrapped.narrative_style().to_string());
            return;
        }
        let mut out = io::stdout().lock();
        let delay = Duration::from_millis(delay_ms);
        for ch in wrapped.chars() {
            let styled = ch.to_string().narrative_style();
            if write!(out, "{styled}").and_then(|()| out.flush()).is_err() {
                // terminal went away mid-line; nothing left to animate
                return;
            }
            thread::sleep(delay);
        }
        let _ = writeln!(out);
    }

    fn flash(&self, times: usize, pause: Duration) {
        for _ in 0..times {
            self.emit(&" ".repeat(termwidth()).on_white().to_string());
            thread::sleep(pause);
            self.emit("");
            thread::sleep(pause);
        }
    }

    fn beep(&self) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "\x07").and_then(|()| out.flush());
    }
}

impl DisplaySink for TerminalDisplay {
    fn clear(&mut self) {
        let mut out = io::stdout().lock();
        if write!(out, "{}", clear_sequence(self.interactive))
            .and_then(|()| out.flush())
            .is_err()
        {
            drop(out);
            self.emit(PLAIN_CLEAR);
        }
    }

    fn frame(&mut self, room_title: &str, seconds_remaining: u64, card_count: usize, card_total: usize) {
        let clock = format_clock(seconds_remaining);
        let clock = if seconds_remaining < LOW_TIME_SECS {
            clock.time_low_style()
        } else {
            clock.hud_style()
        };
        self.emit(&RULE.hud_style().to_string());
        self.emit(&format!(
            " {}  | Room: {}",
            "THE MAD MANOR".hud_title_style(),
            room_title.room_style()
        ));
        self.emit(&format!(
            " Time: {clock} {}",
            time_bar(seconds_remaining, self.total_seconds).time_bar_style()
        ));
        self.emit(&format!(
            " Cards: {}",
            format!("{card_count}/{card_total}").card_style()
        ));
        self.emit(&format!("{}\n", RULE.hud_style()));
    }

    fn type_text(&mut self, text: &str) {
        self.typewrite(text, self.type_delay_ms);
    }

    fn toast(&mut self, text: &str) {
        self.emit(&fill(text, termwidth()).toast_style().to_string());
    }

    fn hint(&mut self, text: &str) {
        self.emit(&text.hint_style().to_string());
    }

    fn show_intro(&mut self) {
        self.clear();
        let delay = self.intro_type_delay_ms.max(self.type_delay_ms);
        self.typewrite("THE MAD MANOR", delay);
        self.emit("");
        self.typewrite("You and your buddy delivered pizza to the WRONG house...", delay);
        self.emit("");
        self.typewrite(
            "Find all 4 cards to put together the riddle, and the main door will let you out.",
            delay,
        );
        self.emit("");
    }

    fn show_jumpscare(&mut self, id: JumpscareId, duration_ms: u64) {
        self.flash(2, Duration::from_millis(70));
        self.beep();
        self.emit("");
        self.emit(&"###############  JUMPSCARE  ###############".jumpscare_style().to_string());
        self.emit(id.art());
        self.emit(&"###########################################".jumpscare_style().to_string());
        // left on screen until the next input clears it
        thread::sleep(Duration::from_millis(duration_ms.max(200)));
    }
}

/// One call made on a [`HeadlessDisplay`].
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum DisplayEvent {
    Clear,
    Frame {
        room_title: String,
        seconds_remaining: u64,
        card_count: usize,
        card_total: usize,
    },
    Text(String),
    Toast(String),
    Hint(String),
    Intro,
    Jumpscare {
        id: JumpscareId,
        duration_ms: u64,
    },
}
impl DisplayEvent {
    /// The text carried by text-like events.
    pub fn shown_text(&self) -> Option<&str> {
        match self {
            DisplayEvent::Text(t) | DisplayEvent::Toast(t) | DisplayEvent::Hint(t) => Some(t.as_str()),
            _ => None,
        }
    }
}

/// Shared, cloneable view of everything a [`HeadlessDisplay`] was asked to show.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    events: Rc<RefCell<Vec<DisplayEvent>>>,
}
impl Transcript {
    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.borrow().clone()
    }

    /// True if any text, toast, or hint contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.events
            .borrow()
            .iter()
            .filter_map(DisplayEvent::shown_text)
            .any(|text| text.contains(needle))
    }

    /// Number of text-like events containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter_map(DisplayEvent::shown_text)
            .filter(|text| text.contains(needle))
            .count()
    }

    pub fn jumpscares(&self) -> usize {
        self.events.borrow().iter().filter(|e| e.is_jumpscare()).count()
    }

    /// The most recent HUD frame, if one was drawn.
    pub fn last_frame(&self) -> Option<DisplayEvent> {
        self.events.borrow().iter().rev().find(|e| e.is_frame()).cloned()
    }

    /// Drop everything recorded so far.
    pub fn reset(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: DisplayEvent) {
        debug!("headless display: {event:?}");
        self.events.borrow_mut().push(event);
    }
}

/// Display that records calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    transcript: Transcript,
}
impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that stays valid after the display is boxed and handed off.
    pub fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }
}

impl DisplaySink for HeadlessDisplay {
    fn clear(&mut self) {
        self.transcript.record(DisplayEvent::Clear);
    }

    fn frame(&mut self, room_title: &str, seconds_remaining: u64, card_count: usize, card_total: usize) {
        self.transcript.record(DisplayEvent::Frame {
            room_title: room_title.to_string(),
            seconds_remaining,
            card_count,
            card_total,
        });
    }

    fn type_text(&mut self, text: &str) {
        self.transcript.record(DisplayEvent::Text(text.to_string()));
    }

    fn toast(&mut self, text: &str) {
        self.transcript.record(DisplayEvent::Toast(text.to_string()));
    }

    fn hint(&mut self, text: &str) {
        self.transcript.record(DisplayEvent::Hint(text.to_string()));
    }

    fn show_intro(&mut self) {
        self.transcript.record(DisplayEvent::Intro);
    }

    fn show_jumpscare(&mut self, id: JumpscareId, duration_ms: u64) {
        self.transcript.record(DisplayEvent::Jumpscare { id, duration_ms });
    }
}
