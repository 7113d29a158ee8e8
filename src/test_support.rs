use crate::linker::Linker;
use crate::mapping::TemplateMap;
use crate::store::MemoryStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Linker over an in-memory store.
///
/// `mappings` are `(kind, variable, pattern)` triples.
pub(crate) fn memory_linker(
    files: &[(&str, &str)],
    mappings: &[(&str, &str, &str)],
) -> Linker<MemoryStore> {
    let store: MemoryStore = files.iter().copied().collect();
    let mapping = TemplateMap::from_entries(mappings.iter().copied())
        .unwrap_or_else(|e| panic!("invalid test mapping: {}", e));
    Linker::new(store, mapping)
}

/// A temporary project: `prompter.yaml` plus files under `prompts/`.
pub(crate) struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub(crate) fn new(config_yaml: &str, files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("prompter.yaml"), config_yaml).unwrap();

        for (rel, content) in files {
            let path = dir.path().join("prompts").join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }

        Self { dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.dir.path().join("prompter.yaml")
    }
}
