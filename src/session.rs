//! Applying a [`Config`] to a registry in one step.

use crate::config::Config;
use crate::console;
use crate::error::Error;
use crate::file_sink::{self, LogFileHandle};
use crate::internal;
use crate::logger::LoggerFactory;
use ulid::Ulid;

/// What a config attached. Keep it alive for as long as the file sink should stay open.
#[derive(Debug)]
#[must_use = "dropping the session closes its file sink"]
pub struct Session {
    console: Option<[Ulid; 2]>,
    file: Option<LogFileHandle>,
}

impl Session {
    /// Attaches the console pair and file sink described by `config` to the factory's
    /// registry and sets the factory's default level.
    ///
    /// # Errors
    /// Invalid level or size strings, or the OS error from opening the log file. On error
    /// nothing has been attached.
    pub fn start(factory: &LoggerFactory, config: &Config) -> Result<Self, Error> {
        // an unset `internal_level` leaves the LINGOLOG_INTERNAL threshold in charge
        if let Some(internal_level) = config.parse_internal_level() {
            internal::init_with_level(Some(internal_level));
        }

        let level = config.parse_level()?;
        let file_options = if config.file.enabled {
            Some(config.file_options()?)
        } else {
            None
        };

        let registry = factory.registry();
        let file = match file_options {
            Some(options) => Some(file_sink::open_in(registry, config.file_path(), options)?),
            None => None,
        };

        let console = config.console.enabled.then(|| {
            let options = config.console_options().translator(factory.live_translator());
            console::configure(registry, &options)
        });

        factory.set_default_level(level);
        internal::debug(
            "SESSION",
            &format!(
                "Started: level={level}, console={}, file={}",
                console.is_some(),
                file.is_some()
            ),
        );

        Ok(Self { console, file })
    }

    /// Ids of the console handlers, informational first.
    #[must_use]
    pub const fn console(&self) -> Option<[Ulid; 2]> {
        self.console
    }

    #[must_use]
    pub const fn file(&self) -> Option<&LogFileHandle> {
        self.file.as_ref()
    }

    /// Flushes every handler of `factory`'s registry and closes the file sink. Console
    /// handlers stay attached until the process exits.
    ///
    /// # Errors
    /// The first flush or close error; the file sink is closed regardless.
    pub fn finish(self, factory: &LoggerFactory) -> Result<(), Error> {
        let flushed = factory.registry().flush_all();
        let closed = self.file.as_ref().map_or(Ok(()), LogFileHandle::close);
        flushed.and(closed)
    }
}
