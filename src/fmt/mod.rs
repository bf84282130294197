//! Log rendering: ANSI styles, per-level color tables, value highlighting, line templates,
//! and the two formatters built from them.

mod color;
mod format;
mod formatter;
pub mod highlight;
mod scheme;

pub use color::{Color, Style, colorize};
pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
pub use formatter::{ColorFormatter, Format, PlainFormatter};
pub use highlight::{find_values, highlight_values};
pub use scheme::{ColorScheme, Palette};
