//! File system watcher for watch mode

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const DEBOUNCE_MS: u64 = 300;

/// Directories never searched for prompt files
const SKIPPED_DIRS: [&str; 3] = [".git", "node_modules", "target"];

/// Check if the path is a prompt file: its name ends with one of `patterns`
/// and it is not inside a skipped directory.
pub fn is_prompt_file(p: &Path, patterns: &[&str]) -> bool {
    let name = match p.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };
    if p
        .components()
        .any(|c| SKIPPED_DIRS.iter().any(|d| c.as_os_str() == *d))
    {
        return false;
    }
    patterns.iter().any(|suffix| name.ends_with(suffix))
}

/// A watched file matches only itself, whatever its suffix. A watched
/// directory matches any prompt file beneath it.
fn matches_watched(path: &Path, target: Option<&Path>, patterns: &[&str]) -> bool {
    match target {
        Some(target) => path == target || path.canonicalize().ok().as_deref() == Some(target),
        None => is_prompt_file(path, patterns),
    }
}

fn is_create_or_modify(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

/// Watches a directory for prompt file changes and emits paths on a channel
pub struct PromptWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<notify::Event>>,
    patterns: Vec<String>,
    /// Set when a single file is watched
    target: Option<PathBuf>,
}

impl PromptWatcher {
    /// Start watching the given path (file or directory)
    pub fn watch(path: &Path, patterns: &[&str]) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(DEBOUNCE_MS)),
        )?;

        let target = if path.is_dir() {
            watcher.watch(path, RecursiveMode::Recursive)?;
            None
        } else {
            // Event paths are absolute, so compare against the canonical form
            let file = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                watcher.watch(parent, RecursiveMode::NonRecursive)?;
            } else {
                watcher.watch(Path::new("."), RecursiveMode::NonRecursive)?;
            }
            Some(file)
        };

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            target,
        })
    }

    /// Collect watched paths from an event
    fn paths_from_event(&self, event: &notify::Event) -> Vec<PathBuf> {
        if !is_create_or_modify(&event.kind) {
            return vec![];
        }
        let patterns: Vec<&str> = self.patterns.iter().map(|s| s.as_str()).collect();
        event
            .paths
            .iter()
            .filter(|p| matches_watched(p, self.target.as_deref(), &patterns))
            .cloned()
            .collect()
    }

    /// Wait for the next batch of changes (debounced). Blocks until at least one change, then drains for DEBOUNCE_MS.
    pub fn next_changes(&self) -> Vec<PathBuf> {
        let mut all = HashSet::new();

        match self.receiver.recv_timeout(Duration::from_secs(3600)) {
            Ok(Ok(event)) => all.extend(self.paths_from_event(&event)),
            Ok(Err(_)) | Err(_) => return vec![],
        }

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS));
        while let Ok(ev) = self.receiver.try_recv() {
            if let Ok(event) = ev {
                all.extend(self.paths_from_event(&event));
            }
        }

        let mut changed: Vec<PathBuf> = all.into_iter().collect();
        changed.sort();
        changed
    }
}
