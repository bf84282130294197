//! TOML configuration: where to log, how much to keep, how lines look.
//!
//! Separated from struct definitions so that the loading logic stays independent of the
//! serde schema.

mod size;
mod structs;

pub use size::parse_size;
pub use structs::{ConsoleConfig, FileConfig, GeneralConfig};

use crate::console::ConsoleOptions;
use crate::file_sink::FileSinkOptions;
use crate::fmt::PlainFormatter;
use crate::internal;
use crate::level::Level;
use crate::output::Stream;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working setup: every field has a
/// default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl Config {
    /// Loads the config from the default location, falling back to defaults if the file
    /// doesn't exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or the
    /// TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/lingolog/lingolog.toml`, e.g. `~/.config/lingolog/lingolog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("lingolog").join("lingolog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// [`crate::Error::InvalidLevel`] for an unknown level name.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        self.general
            .level
            .parse()
            .map_err(|_| crate::Error::InvalidLevel(self.general.level.clone()))
    }

    /// Unknown names fall back to silence rather than failing startup.
    #[must_use]
    pub fn parse_internal_level(&self) -> Option<Level> {
        let raw = self.general.internal_level.as_deref()?;
        let parsed = raw.parse().ok();
        if parsed.is_none() {
            internal::warn("CONFIG", &format!("Unknown internal_level '{raw}', ignoring"));
        }
        parsed
    }

    /// # Errors
    /// [`crate::Error::InvalidSize`] when `file.max_size` can't be parsed.
    pub fn max_bytes(&self) -> Result<u64, crate::Error> {
        parse_size(&self.file.max_size)
            .ok_or_else(|| crate::Error::InvalidSize(self.file.max_size.clone()))
    }

    /// File path with `~` and `$VARS` expanded. Unresolvable variables leave the path as
    /// written.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        shellexpand::full(&self.file.path).map_or_else(
            |_| PathBuf::from(&self.file.path),
            |expanded| PathBuf::from(expanded.as_ref()),
        )
    }

    /// Unknown stream names fall back to stderr.
    #[must_use]
    pub fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions::new()
            .info_stream(parse_stream(&self.console.info_stream))
            .error_stream(parse_stream(&self.console.error_stream))
            .colors(self.console.colors)
            .template(self.console.structure.as_str())
    }

    /// # Errors
    /// [`crate::Error::InvalidSize`] when `file.max_size` can't be parsed.
    pub fn file_options(&self) -> Result<FileSinkOptions, crate::Error> {
        let formatter = PlainFormatter::new()
            .template(&self.file.structure)
            .timestamp_format(self.file.timestamp_format.as_str());

        Ok(FileSinkOptions::new()
            .max_bytes(self.max_bytes()?)
            .backups(self.file.backups)
            .formatter(formatter))
    }
}

fn parse_stream(name: &str) -> Stream {
    name.parse().unwrap_or_else(|e| {
        internal::warn("CONFIG", &format!("{e}, using stderr"));
        Stream::Stderr
    })
}
