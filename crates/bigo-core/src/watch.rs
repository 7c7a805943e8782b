use crate::{FileWatcher, Result};
use crossbeam_channel::Sender;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// New content of a watched snippet file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetChange {
    pub path: PathBuf,
    pub content: String,
}

impl SnippetChange {
    /// Whitespace-only content carries nothing to analyze.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Watches a single snippet file and emits its content after edits settle.
///
/// The parent directory is watched rather than the file so that editors which
/// save by rename are still picked up. The current content is emitted once on
/// start; afterwards only content that differs from the last emission is sent.
pub struct SnippetWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl SnippetWatcher {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let path = fs::canonicalize(&path).unwrap_or(path);
        Self {
            path,
            debounce: Duration::from_millis(300),
        }
    }

    pub fn with_debounce(mut self, d: Duration) -> Self {
        self.debounce = d;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_target(&self, candidate: &Path) -> bool {
        candidate == self.path
            || fs::canonicalize(candidate)
                .map(|p| p == self.path)
                .unwrap_or(false)
    }

    fn read_snippet(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("failed to read {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl FileWatcher for SnippetWatcher {
    /// Blocking watch loop. Returns when a send fails because the receiver hung
    /// up, or when the notify backend disconnects. Nothing is sent while the
    /// file is idle, so a dropped receiver is only noticed after the next edit.
    fn watch(&self, tx: Sender<SnippetChange>) -> Result<()> {
        let (raw_tx, raw_rx) = std::sync::mpsc::channel::<notify::Result<Event>>();
        let mut watcher: RecommendedWatcher = Watcher::new(raw_tx, notify::Config::default())?;
        let root = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(root, RecursiveMode::NonRecursive)?;

        let mut last_sent = self.read_snippet();
        if let Some(content) = &last_sent {
            let change = SnippetChange {
                path: self.path.clone(),
                content: content.clone(),
            };
            if tx.send(change).is_err() {
                return Ok(());
            }
        }

        let mut pending: Option<Instant> = None;
        loop {
            match raw_rx.recv_timeout(self.debounce) {
                Ok(Ok(event)) => {
                    if event.paths.iter().any(|p| self.is_target(p)) {
                        pending = Some(Instant::now());
                    }
                }
                Ok(Err(e)) => {
                    error!("watcher error: {:?}", e);
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                    warn!("file watcher disconnected");
                    break;
                }
            }

            let settled = pending.is_some_and(|t| t.elapsed() >= self.debounce);
            if !settled {
                continue;
            }
            pending = None;

            let Some(content) = self.read_snippet() else {
                continue;
            };
            if last_sent.as_deref() == Some(content.as_str()) {
                debug!("content unchanged, skipping");
                continue;
            }
            last_sent = Some(content.clone());

            let change = SnippetChange {
                path: self.path.clone(),
                content,
            };
            if tx.send(change).is_err() {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_change() {
        let change = SnippetChange {
            path: PathBuf::from("snippet.js"),
            content: "  \n\t".to_string(),
        };
        assert!(change.is_blank());
    }

    #[test]
    fn test_emits_initial_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("snippet.js");
        fs::write(&file, "let x = 1;").unwrap();

        let watcher = SnippetWatcher::new(&file).with_debounce(Duration::from_millis(10));
        let (tx, rx) = crossbeam_channel::unbounded();
        std::thread::spawn(move || watcher.watch(tx));

        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.content, "let x = 1;");
    }

    #[test]
    fn test_burst_of_writes_coalesces_and_repeats_are_suppressed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("snippet.js");
        fs::write(&file, "let x = 1;").unwrap();

        let debounce = Duration::from_millis(200);
        let watcher = SnippetWatcher::new(&file).with_debounce(debounce);
        let (tx, rx) = crossbeam_channel::unbounded();
        std::thread::spawn(move || watcher.watch(tx));

        // the watch is registered before the initial content goes out
        let initial = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(initial.content, "let x = 1;");

        fs::write(&file, "let x = 2;").unwrap();
        fs::write(&file, "let x = 3;").unwrap();

        let settled = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(settled.content, "let x = 3;");
        assert!(rx.recv_timeout(debounce * 4).is_err());

        fs::write(&file, "let x = 3;").unwrap();
        assert!(rx.recv_timeout(Duration::from_secs(1)).is_err());
    }
}
