//! Append-only trace file with size-based rotation.
//!
//! When the live file grows past its limit it is renamed to
//! `<stem>.json.<local timestamp>` and a fresh file is started. Timestamps sort
//! lexicographically, so the newest backups are the last names in order.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the live file exceeds 10 MB.
const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after a rotation.
const DEFAULT_KEEP: usize = 3;

/// Backup suffix format; millisecond precision keeps names unique.
const BACKUP_STAMP: &str = "%Y%m%dT%H%M%S%.3f";

/// Line-oriented writer guarded by a mutex so the exporter can share it.
pub struct FileWriter {
    path: PathBuf,
    max_bytes: u64,
    keep: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Writer with the default limits. Nothing is opened until the first write.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_KEEP)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, keep: usize) -> Self {
        Self {
            path,
            max_bytes,
            keep,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or any file operation fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes) {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = guard.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Local::now().format(BACKUP_STAMP);
        let backup = self.path.with_extension(format!("json.{stamp}"));
        fs::rename(&self.path, backup)?;
        self.prune()
    }

    /// Deletes all but the newest `keep` backups. Individual failures are ignored.
    fn prune(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort();
        let excess = backups.len().saturating_sub(self.keep);
        for old in backups.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let (Some(dir), Some(name)) = (self.path.parent(), self.path.file_name().and_then(|n| n.to_str())) else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "trace path has no file name"));
        };
        let prefix = format!("{name}.");

        Ok(fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_backup(path, &prefix))
            .collect())
    }
}

fn is_backup(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(prefix))
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("keep", &self.keep)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_when_full_and_keeps_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 4, 2);

        for i in 0..6 {
            writer.write_line(&format!("line-{i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-5\n");
        assert_eq!(writer.backups().unwrap().len(), 2);
    }
}
