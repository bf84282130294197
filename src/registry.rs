//! The handler list every logger dispatches into.
//!
//! A process normally uses the lazily created [`root`] registry. Private registries behave
//! identically and keep tests and embedded setups isolated from global state.

use crate::error::Error;
use crate::internal;
use crate::output::Handler;
use crate::record::Record;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use ulid::Ulid;

static ROOT: OnceLock<Arc<Registry>> = OnceLock::new();

/// Process-wide registry, created on first use and alive until exit.
pub fn root() -> &'static Arc<Registry> {
    ROOT.get_or_init(Registry::new)
}

/// Sole owner of its handlers.
///
/// Attaching the same kind of handler twice is allowed and produces duplicate output;
/// nothing here deduplicates.
#[derive(Debug, Default)]
pub struct Registry {
    handlers: RwLock<Vec<Arc<Handler>>>,
}

impl Registry {
    /// Returned in an `Arc` because file handles keep a `Weak` back-reference for detaching.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attach(&self, handler: Handler) -> Ulid {
        self.attach_shared(Arc::new(handler))
    }

    pub fn attach_shared(&self, handler: Arc<Handler>) -> Ulid {
        let id = handler.id();
        self.handlers.write().push(handler);
        internal::debug("REGISTRY", &format!("Attached handler {id}"));
        id
    }

    /// Removes the handler with `id`, handing it back to the caller.
    pub fn detach(&self, id: Ulid) -> Option<Arc<Handler>> {
        let mut handlers = self.handlers.write();
        let index = handlers.iter().position(|h| h.id() == id)?;
        internal::debug("REGISTRY", &format!("Detached handler {id}"));
        Some(handlers.remove(index))
    }

    /// Snapshot of the attached handlers. Iterating the snapshot can't race with
    /// attach/detach.
    #[must_use]
    pub fn handlers(&self) -> Vec<Arc<Handler>> {
        self.handlers.read().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// Hands `record` to every handler and returns how many wrote a line.
    ///
    /// Write failures are reported through internal diagnostics and never reach the code
    /// that emitted the record.
    pub fn dispatch(&self, record: &Record) -> usize {
        let mut written = 0;
        for handler in self.handlers() {
            match handler.handle(record) {
                Ok(true) => written += 1,
                Ok(false) => {}
                Err(e) => internal::error(
                    "REGISTRY",
                    &format!("Handler {} failed to write: {e}", handler.id()),
                ),
            }
        }
        written
    }

    /// Flushes every attached handler. All handlers are attempted even if one fails.
    ///
    /// # Errors
    /// Returns the first flush error encountered.
    pub fn flush_all(&self) -> Result<(), Error> {
        let mut first_error = None;
        for handler in self.handlers() {
            if let Err(e) = handler.flush() {
                internal::error(
                    "REGISTRY",
                    &format!("Handler {} failed to flush: {e}", handler.id()),
                );
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
