//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn hud_title_style(&self) -> ColoredString;
    fn hud_style(&self) -> ColoredString;
    fn time_bar_style(&self) -> ColoredString;
    fn time_low_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn narrative_style(&self) -> ColoredString;
    fn toast_style(&self) -> ColoredString;
    fn hint_style(&self) -> ColoredString;
    fn card_style(&self) -> ColoredString;
    fn jumpscare_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn hud_title_style(&self) -> ColoredString {
        self.bold().truecolor(80, 220, 80)
    }
    fn hud_style(&self) -> ColoredString {
        self.truecolor(80, 200, 80)
    }
    fn time_bar_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn time_low_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn narrative_style(&self) -> ColoredString {
        self.truecolor(102, 208, 120)
    }
    fn toast_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn hint_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.italic().truecolor(75, 180, 255)
    }
    fn card_style(&self) -> ColoredString {
        self.bold().truecolor(220, 40, 220)
    }
    fn jumpscare_style(&self) -> ColoredString {
        self.bold().white().on_red()
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(80, 220, 80)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn hud_title_style(&self) -> ColoredString {
        self.as_str().hud_title_style()
    }
    fn hud_style(&self) -> ColoredString {
        self.as_str().hud_style()
    }
    fn time_bar_style(&self) -> ColoredString {
        self.as_str().time_bar_style()
    }
    fn time_low_style(&self) -> ColoredString {
        self.as_str().time_low_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn narrative_style(&self) -> ColoredString {
        self.as_str().narrative_style()
    }
    fn toast_style(&self) -> ColoredString {
        self.as_str().toast_style()
    }
    fn hint_style(&self) -> ColoredString {
        self.as_str().hint_style()
    }
    fn card_style(&self) -> ColoredString {
        self.as_str().card_style()
    }
    fn jumpscare_style(&self) -> ColoredString {
        self.as_str().jumpscare_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
