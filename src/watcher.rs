//! File system watcher for watch mode

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const DEBOUNCE_MS: u64 = 300;

/// Watches a file or directory for document changes
pub struct DocumentWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<notify::Event>>,
    extensions: Vec<String>,
    target: Option<PathBuf>,
}

fn is_create_or_modify(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

impl DocumentWatcher {
    /// Start watching the given path. Only files with one of `extensions`
    /// (without the dot, case-insensitive) are reported, except that a
    /// watched file is always reported whatever its extension.
    pub fn watch(path: &Path, extensions: &[&str]) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(DEBOUNCE_MS)),
        )?;

        if path.is_dir() {
            watcher.watch(path, RecursiveMode::Recursive)?;
        } else if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            watcher.watch(parent, RecursiveMode::NonRecursive)?;
        } else {
            watcher.watch(Path::new("."), RecursiveMode::NonRecursive)?;
        }

        let target = if path.is_file() {
            path.canonicalize().ok()
        } else {
            None
        };

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
            target,
        })
    }

    /// Check if the path is a document we care about
    pub fn is_document(&self, p: &Path) -> bool {
        if self.is_target(p) {
            return true;
        }
        if p.components().any(|c| c.as_os_str() == "node_modules") {
            return false;
        }
        let Some(ext) = p.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|allowed| *allowed == ext)
    }

    fn is_target(&self, p: &Path) -> bool {
        let Some(ref target) = self.target else {
            return false;
        };
        p == target || p.canonicalize().is_ok_and(|c| c == *target)
    }

    fn paths_from_event(&self, event: &notify::Event) -> Vec<PathBuf> {
        if !is_create_or_modify(&event.kind) {
            return vec![];
        }
        event
            .paths
            .iter()
            .filter(|p| self.is_document(p))
            .cloned()
            .collect()
    }

    /// Wait for the next batch of changes (debounced). Blocks until at least one
    /// change, then drains for DEBOUNCE_MS. Returned paths are sorted.
    pub fn next_changes(&self) -> Vec<PathBuf> {
        let mut all = HashSet::new();

        match self.receiver.recv_timeout(Duration::from_secs(3600)) {
            Ok(Ok(event)) => all.extend(self.paths_from_event(&event)),
            Ok(Err(e)) => {
                log::warn!("watch error: {}", e);
                return vec![];
            }
            Err(_) => return vec![],
        }

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS));
        while let Ok(ev) = self.receiver.try_recv() {
            if let Ok(event) = ev {
                all.extend(self.paths_from_event(&event));
            }
        }

        let mut paths: Vec<PathBuf> = all.into_iter().collect();
        paths.sort();
        paths
    }
}
