//! The console handler pair: `DEBUG..=INFO` to the informational stream, `WARNING` and up
//! to the error stream, both rendered by one shared [`ColorFormatter`].

use crate::filter::SeverityRange;
use crate::fmt::{ColorFormatter, Format};
use crate::i18n::Translate;
use crate::level::Level;
use crate::output::{ConsoleSink, Handler, Stream};
use crate::registry::Registry;
use std::sync::Arc;
use ulid::Ulid;

/// Where the pair writes and how it renders.
///
/// Both streams default to stderr.
#[derive(Clone, Default)]
pub struct ConsoleOptions {
    info_stream: Stream,
    error_stream: Stream,
    colors: Option<bool>,
    template: Option<String>,
    translator: Option<Arc<dyn Translate>>,
}

impl ConsoleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn info_stream(mut self, stream: Stream) -> Self {
        self.info_stream = stream;
        self
    }

    #[must_use]
    pub fn error_stream(mut self, stream: Stream) -> Self {
        self.error_stream = stream;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Translates the level labels (all but `DEBUG`).
    #[must_use]
    pub fn translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = Some(translator);
        self
    }

    fn formatter(&self) -> ColorFormatter {
        let mut formatter = ColorFormatter::new();
        if let Some(colors) = self.colors {
            formatter = formatter.colors(colors);
        }
        if let Some(template) = &self.template {
            formatter = formatter.template(template);
        }
        if let Some(translator) = &self.translator {
            formatter = formatter.translator(Arc::clone(translator));
        }
        formatter
    }
}

/// Attaches a new console pair to `registry` and returns the two handler ids
/// (informational first).
///
/// Calling this again attaches another pair; every record then prints once per pair.
pub fn configure(registry: &Registry, options: &ConsoleOptions) -> [Ulid; 2] {
    let formatter: Arc<dyn Format> = Arc::new(options.formatter());

    let info = Handler::new(
        ConsoleSink::new(options.info_stream.clone()),
        SeverityRange::between(Level::Debug, Level::Info),
        Arc::clone(&formatter),
    );
    let error = Handler::new(
        ConsoleSink::new(options.error_stream.clone()),
        SeverityRange::at_least(Level::Warning),
        formatter,
    );

    [registry.attach(info), registry.attach(error)]
}
