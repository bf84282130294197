//! lingolog's own diagnostics: rotation events, failed writes, config loading.
//!
//! These lines go straight to stderr and never through a registry, because most of them
//! are emitted while a handler's sink lock is held.
//!
//! Silent by default. The threshold comes from the `LINGOLOG_INTERNAL` environment
//! variable (`debug`, `info`, ...) or from [`init_with_level`], whichever runs first.
//! `OnceLock` makes the first initialization win.

use crate::level::Level;
use std::io::{self, Write};
use std::sync::OnceLock;

pub const ENV_VAR: &str = "LINGOLOG_INTERNAL";

static THRESHOLD: OnceLock<Option<Level>> = OnceLock::new();

fn threshold_from_env() -> Option<Level> {
    std::env::var(ENV_VAR).ok().and_then(|v| v.parse().ok())
}

/// Sets the threshold explicitly (`None` silences diagnostics). Returns `false` if the
/// threshold was already fixed.
pub fn init_with_level(level: Option<Level>) -> bool {
    let installed = THRESHOLD.set(level).is_ok();
    if installed {
        debug("INTERNAL", "Internal diagnostics ready");
    }
    installed
}

#[must_use]
pub fn enabled(level: Level) -> bool {
    THRESHOLD
        .get_or_init(threshold_from_env)
        .is_some_and(|min| level >= min)
}

fn log(level: Level, scope: &str, msg: &str) {
    if !enabled(level) {
        return;
    }
    let line = format!("lingolog: [{level}] {scope:<8} {msg}\n");
    let _ = io::stderr().lock().write_all(line.as_bytes());
}

/// Startup, teardown, rotation and attach/detach details.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Operational milestones: config loaded, file sink opened.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recovered problems: translator panics, formatting fallbacks, ignored settings.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

/// Failed writes, flushes and rotations.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
