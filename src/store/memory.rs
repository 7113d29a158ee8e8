//! In-memory content store.

use super::ContentStore;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::sync::Mutex;

/// Map-backed store that records how often each path was read.
///
/// Useful for embedding templates in a binary and for observing how much
/// work a build does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: HashMap<String, String>,
    reads: Mutex<BTreeMap<String, usize>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the content at `path`.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Builder-style [`MemoryStore::insert`].
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Number of reads of `path`, including reads that found nothing.
    pub fn reads_of(&self, path: &str) -> usize {
        self.reads
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of reads across all paths.
    pub fn total_reads(&self) -> usize {
        self.reads
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .values()
            .sum()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (path, content) in iter {
            store.insert(path, content);
        }
        store
    }
}

impl ContentStore for MemoryStore {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        *self
            .reads
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .entry(path.to_string())
            .or_default() += 1;
        Ok(self.files.get(path).cloned())
    }
}
