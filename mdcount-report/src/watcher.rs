//! File watching for live re-counting

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Watches a single document for modifications
pub struct DocumentWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<()>,
    watched_path: PathBuf,
}

impl DocumentWatcher {
    /// Create a new watcher for the given path
    pub fn new(path: &Path) -> Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let watched_path = path.to_path_buf();
        let target = watched_path.clone();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if matches!(
                        event.kind,
                        notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                    ) && event.paths.iter().any(|p| p == &target)
                    {
                        let _ = tx.send(());
                    }
                }
                Err(err) => log::warn!("File watcher error: {err}"),
            }
        })
        .context("Failed to create file watcher")?;

        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch file: {}", path.display()))?;

        // Editors that save by atomic rename replace the file's inode
        if let Some(parent) = path.parent() {
            watcher
                .watch(parent, RecursiveMode::NonRecursive)
                .context("Failed to watch parent directory")?;
        }

        log::info!("Watching {}", path.display());

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            watched_path,
        })
    }

    /// Block until the file changes and no further event arrives for
    /// `debounce`. Returns `false` if `timeout` elapses first.
    pub fn wait_for_change(&self, debounce: Duration, timeout: Option<Duration>) -> Result<bool> {
        let first = match timeout {
            Some(timeout) => self.receiver.recv_timeout(timeout),
            None => self
                .receiver
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };

        match first {
            Ok(()) => {}
            Err(RecvTimeoutError::Timeout) => return Ok(false),
            Err(RecvTimeoutError::Disconnected) => anyhow::bail!("File watcher disconnected"),
        }

        let started = Instant::now();
        loop {
            match self.receiver.recv_timeout(debounce) {
                Ok(()) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => anyhow::bail!("File watcher disconnected"),
            }
        }
        log::debug!(
            "Change on {} settled after {:?}",
            self.watched_path.display(),
            started.elapsed()
        );

        Ok(true)
    }

    /// Get the watched file path
    pub fn path(&self) -> &Path {
        &self.watched_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_watcher_path() -> Result<()> {
        let file = NamedTempFile::new()?;
        let watcher = DocumentWatcher::new(file.path())?;

        assert_eq!(watcher.path(), file.path());

        Ok(())
    }

    #[test]
    fn test_times_out_without_changes() -> Result<()> {
        let file = NamedTempFile::new()?;
        let watcher = DocumentWatcher::new(file.path())?;

        let changed =
            watcher.wait_for_change(Duration::from_millis(10), Some(Duration::from_millis(100)))?;
        assert!(!changed);

        Ok(())
    }

    #[test]
    #[ignore] // File system events can be unreliable in test environments
    fn test_watcher_detects_changes() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        let path = file.path().canonicalize()?;
        let watcher = DocumentWatcher::new(&path)?;

        writeln!(file, "# Changed")?;
        file.flush()?;

        let changed =
            watcher.wait_for_change(Duration::from_millis(100), Some(Duration::from_secs(5)))?;
        assert!(changed);

        Ok(())
    }
}
