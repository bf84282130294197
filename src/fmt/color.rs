//! ANSI styles for the 8-color terminal palette.
//!
//! The level tables only need the basic SGR foreground codes plus "bright", which every
//! terminal emulator (and the Windows console) understands.

use std::fmt;
use std::str::FromStr;

/// Foreground colors of the basic ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// The terminal's own foreground color (SGR 39).
    #[default]
    Default,
}

impl Color {
    /// SGR foreground parameter for this color.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Default => 39,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" | "purple" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            "default" | "reset" => Ok(Self::Default),
            other => Err(format!("unknown color: '{other}'")),
        }
    }
}

/// A foreground color, optionally bright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub color: Color,
    pub bright: bool,
}

impl Style {
    /// Ends every active SGR attribute.
    pub const RESET_ALL: &'static str = "\x1b[0m";

    /// Ends only the foreground color, keeping brightness and other attributes.
    pub const FG_RESET: &'static str = "\x1b[39m";

    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            bright: false,
        }
    }

    #[must_use]
    pub const fn bright(mut self) -> Self {
        self.bright = true;
        self
    }

    /// Escape sequence that switches the terminal to this style.
    #[must_use]
    pub fn ansi(self) -> String {
        if self.bright {
            format!("\x1b[{}m\x1b[1m", self.color.code())
        } else {
            format!("\x1b[{}m", self.color.code())
        }
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, style: Style) -> String {
    format!("{}{text}{}", style.ansi(), Style::RESET_ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_adds_bold_sequence() {
        assert_eq!(Style::new(Color::Black).bright().ansi(), "\x1b[30m\x1b[1m");
        assert_eq!(Style::new(Color::Magenta).ansi(), "\x1b[35m");
    }

    #[test]
    fn color_names_parse() {
        assert_eq!("Yellow".parse::<Color>(), Ok(Color::Yellow));
        assert_eq!("purple".parse::<Color>(), Ok(Color::Magenta));
        assert!("mauve".parse::<Color>().is_err());
    }
}
