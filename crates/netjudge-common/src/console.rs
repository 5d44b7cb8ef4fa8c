//! Optional terminal colouring for the human-readable reports.
//!
//! Colour is cosmetic: when it is off, [`Palette::paint`] returns the text
//! untouched.

use std::io::IsTerminal;

use colored::{Color, Colorize};

/// Colour roles used in the reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pass,
    Fail,
    Error,
    Timeout,
    Section,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Pass => Color::Green,
            Tone::Fail => Color::Red,
            Tone::Error => Color::Magenta,
            Tone::Timeout => Color::Cyan,
            Tone::Section => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colour only when stdout is a terminal and `NO_COLOR` is unset
    pub fn detect() -> Self {
        let enabled = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(enabled)
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(tone.color()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_is_identity() {
        let palette = Palette::plain();
        assert_eq!(palette.paint("PASS", Tone::Pass), "PASS");
        assert_eq!(palette.paint("# graphs", Tone::Section), "# graphs");
    }

    #[test]
    fn test_enabled_palette_keeps_text() {
        colored::control::set_override(true);
        let painted = Palette::new(true).paint("FAIL", Tone::Fail);
        assert!(painted.contains("FAIL"));
        assert_ne!(painted, "FAIL");
    }
}
