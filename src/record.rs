//! One log call produces exactly one [`Record`], shared by every handler that receives it.

use crate::i18n::CallerContext;
use crate::level::Level;
use chrono::{DateTime, Local};

/// Immutable snapshot of a log call.
///
/// Fields are private so no handler can alter what the others will see. Formatters read
/// through the accessors and build their own output strings.
#[derive(Debug, Clone)]
pub struct Record {
    level: Level,
    message: String,
    timestamp: DateTime<Local>,
    logger: String,
    context: Option<CallerContext>,
}

impl Record {
    /// Stamps the record with the current local time.
    #[must_use]
    pub fn new(level: Level, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            logger: logger.into(),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: CallerContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Tests need deterministic timestamps.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The message as it will be rendered, already translated for non-debug levels.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    /// Name of the logger that produced the record.
    #[must_use]
    pub fn logger(&self) -> &str {
        &self.logger
    }

    #[must_use]
    pub const fn context(&self) -> Option<&CallerContext> {
        self.context.as_ref()
    }
}
