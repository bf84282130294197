//! Named loggers that translate their messages before dispatch.
//!
//! Loggers come from a [`LoggerFactory`]. A factory built with a translator produces
//! translating loggers; one without produces plain loggers. Translation is decided when a
//! logger is created, so installing a translator later never changes loggers that already
//! exist.

mod factory;

pub use factory::LoggerFactory;

use crate::i18n::{self, CallerContext, Translate};
use crate::level::Level;
use crate::record::Record;
use crate::registry::Registry;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Stored in a logger's own threshold slot when it follows the factory default.
const INHERIT: u8 = 0;

pub struct Logger {
    name: String,
    domain: String,
    level: AtomicU8,
    default_level: Arc<AtomicU8>,
    registry: Arc<Registry>,
    translator: Option<Arc<dyn Translate>>,
}

impl Logger {
    pub(crate) fn new(
        name: String,
        domain: String,
        default_level: Arc<AtomicU8>,
        registry: Arc<Registry>,
        translator: Option<Arc<dyn Translate>>,
    ) -> Self {
        Self {
            name,
            domain,
            level: AtomicU8::new(INHERIT),
            default_level,
            registry,
            translator,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Translation domain handed to the translator with every call.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub const fn is_translating(&self) -> bool {
        self.translator.is_some()
    }

    /// Own threshold if set, otherwise the factory default at the time of the call.
    #[must_use]
    pub fn level(&self) -> Level {
        match self.level.load(Ordering::Relaxed) {
            INHERIT => Level::from_ordinal(self.default_level.load(Ordering::Relaxed)),
            own => Level::from_ordinal(own),
        }
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    /// Goes back to following the factory default.
    pub fn reset_level(&self) {
        self.level.store(INHERIT, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Guards expensive debug-only work without emitting anything.
    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled_for(Level::Debug)
    }

    /// Core entry point. The caller's source location becomes part of the translation context.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str) {
        if !self.is_enabled_for(level) {
            return;
        }
        let location = Location::caller();
        let context = CallerContext::new(self.domain.as_str(), location.file(), location.line());
        self.emit(level, msg, context);
    }

    /// Like [`Logger::log`], with an explicit context instead of the logger's own domain.
    pub fn log_in(&self, level: Level, context: &CallerContext, msg: &str) {
        if !self.is_enabled_for(level) {
            return;
        }
        self.emit(level, msg, context.clone());
    }

    fn emit(&self, level: Level, msg: &str, context: CallerContext) {
        let message = match &self.translator {
            // debug output stays in the language of the source code
            Some(translator) if level != Level::Debug => {
                i18n::translate_or_raw(translator.as_ref(), msg, &context)
            }
            _ => msg.to_string(),
        };

        let record = Record::new(level, self.name.as_str(), message).with_context(context);
        self.registry.dispatch(&record);
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) {
        self.log(Level::Critical, msg);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("level", &self.level())
            .field("translating", &self.is_translating())
            .finish_non_exhaustive()
    }
}
