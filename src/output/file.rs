//! Size-bounded log file with numbered backups.
//!
//! `app.log` is always the active file. When the next line would push it past the size
//! limit, it becomes `app.log.1`, every older backup moves up one slot, and whatever falls
//! beyond the retention count is deleted.

use super::Sink;
use crate::internal;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// 10 MiB per file.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept next to the active file.
pub const DEFAULT_BACKUPS: usize = 10;

#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    writer: Option<BufWriter<File>>,
    size: u64,
    closed: bool,
}

impl RotatingFile {
    /// Opens (or creates) `path` in append mode.
    ///
    /// `max_bytes == 0` or `backups == 0` disables rotation: the file grows without bound.
    ///
    /// # Errors
    /// Propagates the OS error when the file can't be opened (permission denied, missing
    /// parent directory, read-only filesystem).
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.into();
        let (file, size) = open_append(&path)?;
        internal::debug("FILE", &format!("Opened {} ({size} bytes)", path.display()));

        Ok(Self {
            path,
            max_bytes,
            backups,
            writer: Some(BufWriter::new(file)),
            size,
            closed: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes in the active file, including buffered but unflushed data.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Path of backup slot `index` (1 = newest).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        backup_path(&self.path, index)
    }

    /// An empty file never rotates, so a single oversized line is written whole instead of
    /// rotating forever. Without backup slots there is nowhere to keep the old content.
    const fn should_rotate(&self, incoming: u64) -> bool {
        self.max_bytes > 0
            && self.backups > 0
            && self.size > 0
            && self.size + incoming > self.max_bytes
    }

    fn rotate(&mut self) -> io::Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }

        shift_backups(&self.path, self.backups)?;
        self.writer = Some(BufWriter::new(open_append(&self.path)?.0));
        self.size = 0;

        internal::debug("FILE", &format!("Rotated {}", self.path.display()));
        Ok(())
    }

    /// After a failed rotation the writer is gone; keep logging into whatever file is at
    /// `path` rather than dropping every following record.
    fn reopen(&mut self) -> io::Result<()> {
        let (file, size) = open_append(&self.path)?;
        self.writer = Some(BufWriter::new(file));
        self.size = size;
        Ok(())
    }
}

impl Sink for RotatingFile {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        let incoming = buf.len() as u64;

        if self.should_rotate(incoming)
            && let Err(e) = self.rotate()
        {
            internal::error(
                "FILE",
                &format!("Rotation of {} failed: {e}", self.path.display()),
            );
        }
        if self.writer.is_none() {
            self.reopen()?;
        }

        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(buf.as_bytes())?;
            self.size += incoming;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }

    /// The file descriptor is released even when the final flush fails.
    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        match self.writer.take() {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// Drops the oldest backup, moves `.N-1` → `.N` … `.1` → `.2`, then the active file → `.1`.
fn shift_backups(path: &Path, backups: usize) -> io::Result<()> {
    remove_if_exists(&backup_path(path, backups))?;

    for i in (1..backups).rev() {
        let src = backup_path(path, i);
        if src.exists() {
            let dst = backup_path(path, i + 1);
            remove_if_exists(&dst)?;
            fs::rename(&src, &dst)?;
        }
    }

    let first = backup_path(path, 1);
    if path.exists() {
        remove_if_exists(&first)?;
        fs::rename(path, &first)?;
    }

    Ok(())
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

fn open_append(path: &Path) -> io::Result<(File, u64)> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let size = file.metadata().map(|m| m.len()).unwrap_or(0);
    Ok((file, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn backup_names_append_index() {
        let path = Path::new("/var/log/app.log");
        assert_eq!(backup_path(path, 3), PathBuf::from("/var/log/app.log.3"));
    }

    #[test]
    fn shift_keeps_only_retention_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bot.log");

        fs::write(&path, "active").unwrap();
        fs::write(backup_path(&path, 1), "one").unwrap();
        fs::write(backup_path(&path, 2), "two").unwrap();

        shift_backups(&path, 2).unwrap();

        assert!(!path.exists());
        assert_eq!(fs::read_to_string(backup_path(&path, 1)).unwrap(), "active");
        assert_eq!(fs::read_to_string(backup_path(&path, 2)).unwrap(), "one");
        assert!(!backup_path(&path, 3).exists());
    }

    #[test]
    fn oversized_line_in_empty_file_is_written_whole() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.log");
        let mut file = RotatingFile::open(&path, 8, 2).unwrap();

        file.write_line("this line is far longer than eight bytes").unwrap();
        file.close().unwrap();

        assert!(!backup_path(&path, 1).exists());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "this line is far longer than eight bytes\n"
        );
    }

    #[test]
    fn zero_backups_never_rotates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.log");
        let mut file = RotatingFile::open(&path, 10, 0).unwrap();

        file.write_line("aaaaaaaa").unwrap();
        file.write_line("bbbbbbbb").unwrap();
        file.write_line("cccccccc").unwrap();
        file.close().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "aaaaaaaa\nbbbbbbbb\ncccccccc\n"
        );
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn writes_after_close_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.log");
        let mut file = RotatingFile::open(&path, 0, 0).unwrap();

        file.write_line("kept").unwrap();
        file.close().unwrap();
        file.write_line("dropped").unwrap();

        assert!(file.is_closed());
        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\n");
    }
}
