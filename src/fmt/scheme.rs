//! Per-level color tables used by the console formatter.

use super::{Color, Style};
use crate::level::Level;
use std::collections::HashMap;

/// The three styles a single record is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    /// Applied to the `[LEVEL]` tag.
    pub level: Style,
    /// Applied to the message body.
    pub message: Style,
    /// Applied to values delimited by `[...]`, `"..."` or `'...'` inside the message.
    pub value: Style,
}

impl Palette {
    #[must_use]
    pub const fn new(level: Style, message: Style, value: Style) -> Self {
        Self {
            level,
            message,
            value,
        }
    }
}

/// Maps each level to its [`Palette`].
#[derive(Debug, Clone)]
pub struct ColorScheme {
    palettes: HashMap<Level, Palette>,
}

impl Default for ColorScheme {
    /// Debug output is dimmed, warnings are yellow, errors red, and values stand out in
    /// magenta everywhere except debug lines.
    fn default() -> Self {
        let dim = Style::new(Color::Black).bright();
        let magenta = Style::new(Color::Magenta);
        let yellow = Style::new(Color::Yellow);
        let red = Style::new(Color::Red);

        let mut palettes = HashMap::new();
        palettes.insert(Level::Debug, Palette::new(dim, dim, dim));
        palettes.insert(
            Level::Info,
            Palette::new(dim, Style::new(Color::Default), magenta),
        );
        palettes.insert(Level::Warning, Palette::new(yellow, yellow, magenta));
        palettes.insert(Level::Error, Palette::new(red, red, magenta));
        palettes.insert(Level::Critical, Palette::new(red, red.bright(), magenta));

        Self { palettes }
    }
}

impl ColorScheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the palette for one level, e.g. when the defaults clash with the terminal theme.
    #[must_use]
    pub fn palette(mut self, level: Level, palette: Palette) -> Self {
        self.palettes.insert(level, palette);
        self
    }

    #[must_use]
    pub fn get(&self, level: Level) -> Palette {
        self.palettes.get(&level).copied().unwrap_or_default()
    }
}
