//! Console streams.
//!
//! Both console handlers default to stderr. Which physical stream a handler writes to is a
//! property of its [`Stream`], not of its severity filter.

use super::Sink;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

/// Physical destination of a console handler.
#[derive(Debug, Clone, Default)]
pub enum Stream {
    Stdout,
    #[default]
    Stderr,
    /// In-process buffer. Lets tests and embedders (GUIs, log viewers) capture console output.
    Memory(MemoryStream),
}

impl FromStr for Stream {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" | "out" => Ok(Self::Stdout),
            "stderr" | "err" => Ok(Self::Stderr),
            other => Err(format!("unknown stream: '{other}'")),
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
            Self::Memory(_) => f.write_str("memory"),
        }
    }
}

/// Cloneable handle to a shared byte buffer; all clones see the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStream(Arc<Mutex<Vec<u8>>>);

impl MemoryStream {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }

    fn append(&self, bytes: &[u8]) {
        self.0.lock().extend_from_slice(bytes);
    }
}

/// Writes each line with a single `write_all`, so concurrent processes sharing the terminal
/// can't split a line either.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new(stream: Stream) -> Self {
        Self { stream }
    }

    #[must_use]
    pub const fn stream(&self) -> &Stream {
        &self.stream
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        match &self.stream {
            Stream::Stdout => io::stdout().lock().write_all(buf.as_bytes()),
            Stream::Stderr => io::stderr().lock().write_all(buf.as_bytes()),
            Stream::Memory(memory) => {
                memory.append(buf.as_bytes());
                Ok(())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.stream {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
            Stream::Memory(_) => Ok(()),
        }
    }
}
