//! Creates and caches loggers for one registry.

use super::Logger;
use crate::i18n::{CallerContext, Translate};
use crate::internal;
use crate::level::Level;
use crate::registry::{self, Registry};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

static ROOT_FACTORY: OnceLock<LoggerFactory> = OnceLock::new();

/// Hands out one logger per name, all dispatching into the same registry.
pub struct LoggerFactory {
    registry: Arc<Registry>,
    translator: Arc<OnceLock<Arc<dyn Translate>>>,
    default_level: Arc<AtomicU8>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerFactory {
    /// Non-translating factory with an `INFO` default threshold.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            translator: Arc::new(OnceLock::new()),
            default_level: Arc::new(AtomicU8::new(Level::Info.ordinal())),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Factory bound to the root registry, shared by the whole process.
    #[must_use]
    pub fn root() -> &'static Self {
        ROOT_FACTORY.get_or_init(|| Self::new(Arc::clone(registry::root())))
    }

    /// Every logger created from now on translates through `translator`.
    #[must_use]
    pub fn translator(self, translator: impl Translate + 'static) -> Self {
        self.install_translator(Arc::new(translator));
        self
    }

    #[must_use]
    pub fn level(self, level: Level) -> Self {
        self.set_default_level(level);
        self
    }

    /// Sets the translator once. Returns `false` (and changes nothing) if one is already set.
    /// Loggers created before the call keep their plain behavior.
    pub fn install_translator(&self, translator: Arc<dyn Translate>) -> bool {
        let installed = self.translator.set(translator).is_ok();
        if !installed {
            internal::warn("LOGGER", "Translator already installed, ignoring");
        }
        installed
    }

    /// Threshold for every logger that has no level of its own, including existing ones.
    pub fn set_default_level(&self, level: Level) {
        self.default_level.store(level.ordinal(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn default_level(&self) -> Level {
        Level::from_ordinal(self.default_level.load(Ordering::Relaxed))
    }

    /// The installed translator, if any.
    #[must_use]
    pub fn current_translator(&self) -> Option<Arc<dyn Translate>> {
        self.translator.get().cloned()
    }

    /// Translator that always defers to whatever this factory has installed, including a
    /// translator installed after the call. Messages pass through unchanged until then.
    ///
    /// Used for console level labels, which unlike logger messages are not fixed at
    /// creation time.
    #[must_use]
    pub fn live_translator(&self) -> Arc<dyn Translate> {
        Arc::new(LiveTranslator(Arc::clone(&self.translator)))
    }

    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Logger named `name` whose translation domain is its name.
    #[must_use]
    pub fn get(&self, name: &str) -> Arc<Logger> {
        self.get_in(name, name)
    }

    /// Logger named `name` translating in `domain`.
    ///
    /// Loggers are cached by name: asking again for an existing name returns the existing
    /// logger, keeping the domain and translating behavior it was created with.
    #[must_use]
    pub fn get_in(&self, name: &str, domain: &str) -> Arc<Logger> {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::new(
            name.to_string(),
            domain.to_string(),
            Arc::clone(&self.default_level),
            Arc::clone(&self.registry),
            self.translator.get().cloned(),
        ));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }
}

struct LiveTranslator(Arc<OnceLock<Arc<dyn Translate>>>);

impl Translate for LiveTranslator {
    fn translate(&self, message: &str, context: &CallerContext) -> String {
        match self.0.get() {
            Some(translator) => translator.translate(message, context),
            None => message.to_string(),
        }
    }
}
