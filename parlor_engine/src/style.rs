//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn room_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn title_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 120, 30)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(60, 160, 90).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(130, 190, 240)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 60, 60)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(160, 160, 160)
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(90, 90, 90)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
}

impl GameStyle for String {
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
}
