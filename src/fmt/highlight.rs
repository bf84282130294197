//! Values quoted in a message (`[alice]`, `"draft"`, `'abc123'`) are the parts a reader
//! scans for. This pass re-renders each of them as `[value]` in the value color.

use super::Style;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// One alternation so a single left-to-right scan decides which delimiter kind wins at each
/// position. Empty pairs (`[]`, `""`) never match.
static VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]+)\]|"([^"]+)"|'([^']+)'"#).expect("Invalid value regex")
});

/// Replaces every delimited value with `[` + `value` + inner text + fg reset + `message` + `]`.
///
/// `value` and `message` are raw escape sequences, so the message color resumes right after
/// each value. Unbalanced delimiters are left as they are.
#[must_use]
pub fn highlight_values(msg: &str, value: &str, message: &str) -> String {
    if msg.is_empty() {
        return String::new();
    }

    VALUE_REGEX
        .replace_all(msg, |caps: &Captures<'_>| {
            let inner = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            format!("[{value}{inner}{}{message}]", Style::FG_RESET)
        })
        .into_owned()
}

/// Extracts the delimited values without rendering them. Handy for assertions and for
/// callers that want to redact values before logging.
#[must_use]
pub fn find_values(msg: &str) -> Vec<&str> {
    VALUE_REGEX
        .captures_iter(msg)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
        .collect()
}
