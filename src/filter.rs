//! Severity predicates injected into handlers.

use crate::level::Level;

/// Inclusive severity window. `max == None` means "no upper bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityRange {
    pub min: Level,
    pub max: Option<Level>,
}

impl SeverityRange {
    /// Everything from `min` upwards.
    #[must_use]
    pub const fn at_least(min: Level) -> Self {
        Self { min, max: None }
    }

    /// `min..=max`. Arguments are swapped if given in the wrong order.
    #[must_use]
    pub fn between(min: Level, max: Level) -> Self {
        Self {
            min: min.min(max),
            max: Some(min.max(max)),
        }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self::at_least(Level::Debug)
    }

    #[must_use]
    pub fn allows(&self, level: Level) -> bool {
        level >= self.min && self.max.is_none_or(|max| level <= max)
    }
}

impl Default for SeverityRange {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_ranges_are_complementary() {
        let info = SeverityRange::between(Level::Debug, Level::Info);
        let error = SeverityRange::at_least(Level::Warning);
        for level in Level::all() {
            assert_ne!(info.allows(level), error.allows(level), "{level}");
        }
    }

    #[test]
    fn between_normalizes_order() {
        let range = SeverityRange::between(Level::Error, Level::Info);
        assert_eq!(range.min, Level::Info);
        assert_eq!(range.max, Some(Level::Error));
        assert!(range.allows(Level::Warning));
        assert!(!range.allows(Level::Critical));
    }
}
