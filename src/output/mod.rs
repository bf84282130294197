//! Handlers and the sinks they write to.
//!
//! A [`Handler`] combines three independent pieces: a [`SeverityRange`] deciding which
//! records it accepts, a shared [`Format`] turning a record into a line, and a [`Sink`]
//! that owns the destination. Keeping destination and filter separate means the console
//! pair can be pointed at different streams without touching its severity split.

mod file;
mod terminal;

pub use file::{DEFAULT_BACKUPS, DEFAULT_MAX_BYTES, RotatingFile};
pub use terminal::{ConsoleSink, MemoryStream, Stream};

use crate::error::Error;
use crate::filter::SeverityRange;
use crate::fmt::Format;
use crate::record::Record;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use ulid::Ulid;

/// A destination for already formatted lines.
///
/// Sinks are only ever used behind their handler's mutex, so they take `&mut self` and need
/// no internal locking.
pub trait Sink: Send {
    /// Writes one line. The sink appends the line terminator.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&mut self) -> io::Result<()>;

    /// Releases the underlying resource. Writes after `close` are silently dropped.
    ///
    /// # Errors
    /// I/O errors from the final flush.
    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

/// One registered output: filter, formatter, and exclusively locked sink.
pub struct Handler {
    id: Ulid,
    range: SeverityRange,
    formatter: Arc<dyn Format>,
    sink: Mutex<Box<dyn Sink>>,
}

impl Handler {
    #[must_use]
    pub fn new(
        sink: impl Sink + 'static,
        range: SeverityRange,
        formatter: Arc<dyn Format>,
    ) -> Self {
        Self {
            id: Ulid::new(),
            range,
            formatter,
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Stable identity used to detach the handler from a registry.
    #[must_use]
    pub const fn id(&self) -> Ulid {
        self.id
    }

    #[must_use]
    pub const fn range(&self) -> SeverityRange {
        self.range
    }

    /// Formats and writes `record` if its level passes the filter. Returns whether a line
    /// was written.
    ///
    /// Formatting happens before the sink lock is taken; only the write itself is serialized.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn handle(&self, record: &Record) -> Result<bool, Error> {
        if !self.range.allows(record.level()) {
            return Ok(false);
        }

        let line = self.formatter.format(record);
        self.sink.lock().write_line(&line)?;
        Ok(true)
    }

    /// # Errors
    /// I/O errors from the sink.
    pub fn flush(&self) -> Result<(), Error> {
        self.sink.lock().flush()?;
        Ok(())
    }

    /// # Errors
    /// I/O errors from the sink's final flush.
    pub fn close(&self) -> Result<(), Error> {
        self.sink.lock().close()?;
        Ok(())
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("id", &self.id)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}
