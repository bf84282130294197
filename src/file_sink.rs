//! Rotating log files attached to a registry, and the handle that detaches and closes them.

use crate::error::Error;
use crate::filter::SeverityRange;
use crate::fmt::{Format, PlainFormatter};
use crate::internal;
use crate::output::{DEFAULT_BACKUPS, DEFAULT_MAX_BYTES, Handler, RotatingFile};
use crate::registry::Registry;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

/// How a file sink rotates, filters, and renders.
pub struct FileSinkOptions {
    max_bytes: u64,
    backups: usize,
    range: SeverityRange,
    formatter: Arc<dyn Format>,
}

impl Default for FileSinkOptions {
    /// 10 MiB per file, 10 backups, every level, `timestamp [LEVEL] message` lines.
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backups: DEFAULT_BACKUPS,
            range: SeverityRange::all(),
            formatter: Arc::new(PlainFormatter::new()),
        }
    }
}

impl FileSinkOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `0` disables rotation.
    #[must_use]
    pub const fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub const fn backups(mut self, backups: usize) -> Self {
        self.backups = backups;
        self
    }

    #[must_use]
    pub const fn range(mut self, range: SeverityRange) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: impl Format + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }
}

/// Opens `path` as a rotating log file and attaches it to `registry`.
///
/// # Errors
/// The OS error from opening the file. Nothing is attached in that case and no retry is made.
pub fn open_in(
    registry: &Arc<Registry>,
    path: impl AsRef<Path>,
    options: FileSinkOptions,
) -> Result<LogFileHandle, Error> {
    let path = path.as_ref().to_path_buf();
    let file = RotatingFile::open(&path, options.max_bytes, options.backups)?;
    let handler = Arc::new(Handler::new(file, options.range, options.formatter));
    registry.attach_shared(Arc::clone(&handler));

    internal::info("FILE", &format!("Logging to {}", path.display()));
    Ok(LogFileHandle {
        path,
        handler: Mutex::new(Some(handler)),
        registry: Arc::downgrade(registry),
    })
}

/// Owns one file sink until it is closed.
///
/// The registry holds the handler for dispatch; the handle only keeps a weak reference to
/// the registry so it can detach. Dropping the handle closes it.
#[derive(Debug)]
#[must_use = "dropping the handle closes the file sink immediately"]
pub struct LogFileHandle {
    path: PathBuf,
    handler: Mutex<Option<Arc<Handler>>>,
    registry: Weak<Registry>,
}

impl LogFileHandle {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes, detaches from the registry, and releases the file.
    ///
    /// Calling it again is a no-op returning `Ok(())`.
    ///
    /// # Errors
    /// The first flush or close error. The handle counts as closed either way.
    pub fn close(&self) -> Result<(), Error> {
        let Some(handler) = self.handler.lock().take() else {
            return Ok(());
        };

        let flushed = handler.flush();
        if let Some(registry) = self.registry.upgrade() {
            registry.detach(handler.id());
        }
        let closed = handler.close();

        internal::debug("FILE", &format!("Closed {}", self.path.display()));
        flushed.and(closed)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.handler.lock().is_none()
    }
}

impl Drop for LogFileHandle {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            internal::error(
                "FILE",
                &format!("Closing {} on drop failed: {e}", self.path.display()),
            );
        }
    }
}
