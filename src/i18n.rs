//! The seam to the translation catalog.
//!
//! lingolog never looks up translations itself. A [`Translate`] implementation receives the
//! raw message and a [`CallerContext`] describing where the call came from, and returns the
//! localized text. The catalog behind it (gettext, YAML files, a `HashMap`) is the caller's
//! business.

use std::panic::{self, AssertUnwindSafe, Location};

/// Identifies the code that issued a log call so a translator can pick the right domain.
///
/// `domain` is bound once when a logger is created. `file` and `line` are captured with
/// `#[track_caller]`, so no stack walking is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerContext {
    pub domain: String,
    pub file: &'static str,
    pub line: u32,
}

impl CallerContext {
    #[must_use]
    pub fn new(domain: impl Into<String>, file: &'static str, line: u32) -> Self {
        Self {
            domain: domain.into(),
            file,
            line,
        }
    }

    /// Builds a context for `domain` at the location of the caller.
    #[must_use]
    #[track_caller]
    pub fn here(domain: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::new(domain, location.file(), location.line())
    }
}

/// Maps a message and its caller context to a localized string.
///
/// Implementations must not fail for unknown messages: returning the input unchanged is the
/// expected fallback.
pub trait Translate: Send + Sync {
    fn translate(&self, message: &str, context: &CallerContext) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &CallerContext) -> String + Send + Sync,
{
    fn translate(&self, message: &str, context: &CallerContext) -> String {
        self(message, context)
    }
}

/// Passes every message through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, message: &str, _context: &CallerContext) -> String {
        message.to_string()
    }
}

/// A misbehaving translator must never stop a record from being delivered. A panic inside
/// the catalog lookup degrades to the untranslated message.
pub(crate) fn translate_or_raw(
    translator: &dyn Translate,
    message: &str,
    context: &CallerContext,
) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| translator.translate(message, context)))
        .unwrap_or_else(|_| {
            crate::internal::warn(
                "I18N",
                &format!("Translator panicked, using raw message ({})", context.domain),
            );
            message.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_translators_receive_context() {
        let t = |msg: &str, ctx: &CallerContext| format!("{}:{msg}", ctx.domain);
        let ctx = CallerContext::here("bot");
        assert_eq!(translate_or_raw(&t, "hello", &ctx), "bot:hello");
    }

    #[test]
    fn here_captures_this_file() {
        let ctx = CallerContext::here("x");
        assert!(ctx.file.ends_with("i18n.rs"));
        assert!(ctx.line > 0);
    }

    #[test]
    fn panicking_translator_falls_back_to_raw() {
        let t = |_: &str, _: &CallerContext| -> String { panic!("catalog exploded") };
        let ctx = CallerContext::here("x");
        assert_eq!(translate_or_raw(&t, "raw text", &ctx), "raw text");
    }
}
