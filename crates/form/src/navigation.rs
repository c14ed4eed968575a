//! View navigation seam.
//!
//! The form only needs "go to this path". [`MemoryHistory`] is the
//! in-process implementation: an ordered record of visited paths, like
//! a memory router's history stack.

use std::sync::{Mutex, PoisonError};

/// Path the form redirects to after a successful create.
pub const ROOT_PATH: &str = "/";

/// Something that can change the active view.
pub trait Navigator: Send + Sync {
    /// Make `path` the active view, recording it in history.
    fn push(&self, path: &str);
}

struct HistoryInner {
    entries: Vec<String>,
    pushes: usize,
}

/// In-memory navigable history.
pub struct MemoryHistory {
    inner: Mutex<HistoryInner>,
}

impl MemoryHistory {
    /// A fresh history positioned at [`ROOT_PATH`].
    pub fn new() -> Self {
        Self::with_initial(ROOT_PATH)
    }

    /// A fresh history positioned at `path`.
    pub fn with_initial(path: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(HistoryInner {
                entries: vec![path.into()],
                pushes: 0,
            }),
        }
    }

    /// Every visited path, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }

    /// The active path.
    pub fn current(&self) -> String {
        self.lock().entries.last().cloned().unwrap_or_default()
    }

    /// How many times [`Navigator::push`] was called.
    pub fn push_count(&self) -> usize {
        self.lock().pushes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HistoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryHistory {
    fn push(&self, path: &str) {
        let mut inner = self.lock();
        inner.entries.push(path.to_string());
        inner.pushes += 1;
        tracing::debug!(path, depth = inner.entries.len(), "Navigated");
    }
}
