//! Filesystem-backed content store.

use super::ContentStore;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::trace;

/// Reads templates from files under a root directory.
///
/// Paths are relative to the root; absolute paths and `..` components are
/// rejected so a pattern filled from parameters cannot escape the root.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The root directory templates are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a relative template path.
    pub fn resolve(&self, relative: &str) -> io::Result<PathBuf> {
        let rel = Path::new(relative);
        for component in rel.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("template path '{}' must stay inside the prompts directory", relative),
                    ));
                }
            }
        }
        Ok(self.root.join(rel))
    }
}

impl ContentStore for FsStore {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        let full = self.resolve(path)?;
        trace!(path = %full.display(), "reading template");

        match std::fs::read_to_string(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // A directory at a template path reads as absent, like a missing file.
            Err(_) if full.is_dir() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
