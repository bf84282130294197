//! `lingolog` - localization-aware, colorized, multi-sink logging.
//!
//! - Two console handlers split by severity (`DEBUG..=INFO` and `WARNING..`), colored per
//!   level, with quoted values (`[id]`, `"name"`, `'token'`) highlighted
//! - Rotating log files (10 MiB × 10 backups by default) behind a closeable handle
//! - Loggers that pass every non-debug message through a translator together with the
//!   caller's context
//! - One process-wide registry, or any number of private ones
//!
//! # Example
//!
//! ```no_run
//! use lingolog::{CallerContext, LoggerFactory};
//!
//! lingolog::install_translator(std::sync::Arc::new(|msg: &str, ctx: &CallerContext| {
//!     if ctx.domain == "publish" && msg == "Ad [%s] published" {
//!         "Anzeige [%s] veröffentlicht".to_string()
//!     } else {
//!         msg.to_string()
//!     }
//! }));
//! lingolog::configure_console_logging();
//! let file = lingolog::open_file_sink("bot.log")?;
//!
//! let log = lingolog::get_logger("publish");
//! log.info("Publishing ad [42]");
//! if lingolog::is_debug(&log) {
//!     log.debug("payload dump ...");
//! }
//!
//! lingolog::flush_all_handlers()?;
//! file.close()?;
//! # Ok::<(), lingolog::Error>(())
//! ```

pub mod config;
pub mod console;
mod error;
pub mod file_sink;
pub mod filter;
pub mod fmt;
pub mod i18n;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod record;
pub mod registry;
pub mod session;

pub use config::Config;
pub use console::ConsoleOptions;
pub use error::Error;
pub use file_sink::{FileSinkOptions, LogFileHandle};
pub use filter::SeverityRange;
pub use fmt::{ColorFormatter, Format, PlainFormatter};
pub use i18n::{CallerContext, Translate};
pub use level::{DEBUG, INFO, Level};
pub use logger::{Logger, LoggerFactory};
pub use output::{Handler, MemoryStream, Stream};
pub use record::Record;
pub use registry::Registry;
pub use session::Session;

use std::path::Path;
use std::sync::Arc;
use ulid::Ulid;

/// Attaches the console pair to the root registry, both halves writing to stderr.
///
/// Level labels go through the root translator whenever one is installed, before or after
/// this call. Each call adds another pair.
pub fn configure_console_logging() -> [Ulid; 2] {
    let factory = LoggerFactory::root();
    let options = ConsoleOptions::new().translator(factory.live_translator());
    console::configure(factory.registry(), &options)
}

/// Opens a rotating log file (10 MiB, 10 backups) and attaches it to the root registry.
///
/// # Errors
/// The OS error from opening `path`.
pub fn open_file_sink(path: impl AsRef<Path>) -> Result<LogFileHandle, Error> {
    file_sink::open_in(registry::root(), path, FileSinkOptions::default())
}

/// Flushes every handler attached to the root registry.
///
/// # Errors
/// The first flush error; all handlers are attempted.
pub fn flush_all_handlers() -> Result<(), Error> {
    registry::root().flush_all()
}

/// Logger from the root factory.
#[must_use]
pub fn get_logger(name: &str) -> Arc<Logger> {
    LoggerFactory::root().get(name)
}

/// Makes every root logger created from now on translate through `translator`. Only the
/// first call has an effect.
pub fn install_translator(translator: Arc<dyn Translate>) -> bool {
    LoggerFactory::root().install_translator(translator)
}

/// Whether `logger` currently emits `DEBUG` records.
#[must_use]
pub fn is_debug(logger: &Logger) -> bool {
    logger.is_debug_enabled()
}

/// Applies `config` to the root registry and root factory.
///
/// # Errors
/// See [`Session::start`].
pub fn init(config: &Config) -> Result<Session, Error> {
    Session::start(LoggerFactory::root(), config)
}
