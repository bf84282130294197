//! Record → line rendering.
//!
//! Formatters only read the [`Record`]; they never touch it, so one record can be rendered
//! by the console pair and any number of file sinks independently.

use super::highlight::highlight_values;
use super::{ColorScheme, FormatTemplate, FormatValues, Placeholder, Style};
use crate::i18n::{self, CallerContext, Translate};
use crate::level::Level;
use crate::record::Record;
use std::fmt::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// `Send + Sync` so one formatter can be shared by several handlers across threads.
pub trait Format: Send + Sync {
    /// Must not panic and must not fail: a record always gets a line.
    fn format(&self, record: &Record) -> String;
}

/// Console formatter: colored `[LEVEL]` tag, colored message body, highlighted values.
pub struct ColorFormatter {
    scheme: ColorScheme,
    template: FormatTemplate,
    timestamp_format: String,
    colors_enabled: bool,
    translator: Option<Arc<dyn Translate>>,
    label_context: CallerContext,
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: ColorScheme::default(),
            template: FormatTemplate::default(),
            timestamp_format: "%H:%M:%S".to_string(),
            colors_enabled: true,
            translator: None,
            label_context: CallerContext::new(env!("CARGO_PKG_NAME"), file!(), line!()),
        }
    }

    /// Piped output and CI logs can't render ANSI escapes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Level labels other than `DEBUG` are looked up through `translator`.
    #[must_use]
    pub fn translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Translation domain used for level labels. Defaults to the crate name.
    #[must_use]
    pub fn label_domain(mut self, domain: impl Into<String>) -> Self {
        self.label_context.domain = domain.into();
        self
    }

    fn level_label(&self, level: Level) -> String {
        match &self.translator {
            // debug labels stay greppable against source identifiers
            Some(translator) if level != Level::Debug => {
                i18n::translate_or_raw(translator.as_ref(), level.as_str(), &self.label_context)
            }
            _ => level.as_str().to_string(),
        }
    }

    fn render(&self, record: &Record) -> String {
        let level = record.level();
        let label = self.level_label(level);

        let (tag, msg) = if self.colors_enabled {
            let palette = self.scheme.get(level);
            let message_ansi = palette.message.ansi();
            let body = highlight_values(record.message(), &palette.value.ansi(), &message_ansi);
            (
                format!("{}[{label}]{}", palette.level.ansi(), Style::RESET_ALL),
                format!("{message_ansi}{body}{}", Style::RESET_ALL),
            )
        } else {
            (format!("[{label}]"), record.message().to_string())
        };

        let values = base_values(record, &self.template, &self.timestamp_format)
            .tag(tag)
            .msg(msg);
        self.template.render(&values)
    }

    fn render_fallback(&self, record: &Record) -> String {
        let values = FormatValues::new()
            .tag(format!("[{}]", record.level().as_str()))
            .level(record.level().as_str())
            .msg(record.message())
            .name(record.logger());
        self.template.render(&values)
    }
}

impl Format for ColorFormatter {
    fn format(&self, record: &Record) -> String {
        panic::catch_unwind(AssertUnwindSafe(|| self.render(record))).unwrap_or_else(|_| {
            crate::internal::warn("FORMAT", "Colorizing failed, emitting plain line");
            self.render_fallback(record)
        })
    }
}

/// File formatter: `2024-05-01 12:00:00,123 [INFO] message`, no colors, no translation of
/// the level name.
#[derive(Debug, Clone)]
pub struct PlainFormatter {
    template: FormatTemplate,
    timestamp_format: String,
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: FormatTemplate::parse("{timestamp} [{level}] {msg}"),
            timestamp_format: "%Y-%m-%d %H:%M:%S,%3f".to_string(),
        }
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

impl Format for PlainFormatter {
    fn format(&self, record: &Record) -> String {
        let values = base_values(record, &self.template, &self.timestamp_format)
            .tag(format!("[{}]", record.level().as_str()))
            .msg(record.message());
        self.template.render(&values)
    }
}

/// Values every formatter fills the same way.
fn base_values(
    record: &Record,
    template: &FormatTemplate,
    timestamp_format: &str,
) -> FormatValues {
    let mut values = FormatValues::new()
        .level(record.level().as_str())
        .name(record.logger());

    if template.uses(Placeholder::Timestamp) {
        // chrono reports a malformed format string as a fmt error, which `to_string` would panic on
        let mut timestamp = String::new();
        if write!(timestamp, "{}", record.timestamp().format(timestamp_format)).is_err() {
            timestamp = record.timestamp().to_rfc3339();
        }
        values = values.timestamp(timestamp);
    }
    if let Some(context) = record.context() {
        values = values.domain(context.domain.as_str());
    }

    values
}
