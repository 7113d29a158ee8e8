//! Dependency linking: flags to path patterns, and per-path requirement analysis.
//!
//! The [`Linker`] owns the content store, the mapping table, and a cache of
//! [`DependencyRecord`]s keyed by path. Analysis answers "which parameters must
//! the caller supply for this template?" before any expansion happens:
//!
//! - `parameter` flags require their variable directly
//! - other flags require every `{placeholder}` in their mapped pattern
//! - placeholder-free patterns are followed recursively and their
//!   requirements merged; parameterized patterns stop the walk, since their
//!   concrete path depends on parameter values
//!
//! Unmapped flags are skipped here; they surface as errors during expansion.
//!
//! # Caching
//!
//! Records are write-once per path (first writer wins) and there is no
//! invalidation, so a linker must not outlive changes to its store's content.
//! The cache sits behind a read-mostly lock, so one linker may be shared by
//! builds on several threads when the store is `Sync`.

mod record;


pub use record::DependencyRecord;

use crate::builder::BuildStack;
use crate::error::BuildError;
use crate::mapping::TemplateMap;
use crate::pattern::PathPattern;
use crate::scanner::{Flag, scan};
use crate::store::ContentStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// Resolves flags through the mapping table and memoizes dependency analysis.
#[derive(Debug)]
pub struct Linker<S> {
    store: S,
    mapping: TemplateMap,
    records: RwLock<HashMap<String, Arc<DependencyRecord>>>,
}

impl<S: ContentStore> Linker<S> {
    /// Create a linker over `store` with an empty analysis cache.
    pub fn new(store: S, mapping: TemplateMap) -> Self {
        Self {
            store,
            mapping,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// The content store templates are read from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The mapping table flags are resolved through.
    pub fn mapping(&self) -> &TemplateMap {
        &self.mapping
    }

    /// The raw path pattern a flag refers to.
    ///
    /// `parameter` flags are never template references and always yield `None`.
    pub fn resolve_pattern(&self, flag: &Flag) -> Option<&PathPattern> {
        if flag.is_parameter() {
            return None;
        }
        self.mapping.lookup(&flag.kind, &flag.variable)
    }

    /// Analyze `path`, or return its cached record.
    ///
    /// # Errors
    ///
    /// * `BuildError::FileNotFound` - `path` or a placeholder-free child is absent
    /// * `BuildError::Store` - the store failed to read a file
    ///
    /// Failures are not cached; a later call retries the read.
    pub fn analyze(&self, path: &str) -> Result<Arc<DependencyRecord>, BuildError> {
        self.analyze_within(path, &BuildStack::root(path))
    }

    fn analyze_within(
        &self,
        path: &str,
        chain: &BuildStack,
    ) -> Result<Arc<DependencyRecord>, BuildError> {
        if let Some(record) = self.cached(path) {
            trace!(path, "dependency cache hit");
            return Ok(record);
        }

        debug!(path, depth = chain.len(), "analyzing dependencies");
        let content = self.load(path, chain)?;
        let flags = scan(&content);
        let mut record = DependencyRecord::new(path);

        for flag in &flags {
            record.declared_variables.insert(flag.variable.clone());

            if flag.is_parameter() {
                record.required_parameters.insert(flag.variable.clone());
                continue;
            }

            let Some(pattern) = self.resolve_pattern(flag) else {
                trace!(path, flag = %flag, line = flag.line, "unmapped flag left for expansion");
                continue;
            };

            record
                .required_parameters
                .extend(pattern.placeholders().map(str::to_string));
            record.direct_dependencies.insert(pattern.as_str().to_string());

            let Some(child) = pattern.concrete_path() else {
                continue;
            };
            if chain.contains(&child) {
                // Expansion reports the exact cycle; analysis only has to terminate.
                debug!(path, child = %child, "cyclic reference skipped during analysis");
                continue;
            }

            let child_record = self.analyze_within(&child, &chain.pushed(&child))?;
            record
                .required_parameters
                .extend(child_record.required_parameters.iter().cloned());
        }

        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poison| poison.into_inner());
        let record = records
            .entry(path.to_string())
            .or_insert_with(|| Arc::new(record))
            .clone();
        Ok(record)
    }

    /// The cached record for `path`, if it has been analyzed.
    pub fn cached(&self, path: &str) -> Option<Arc<DependencyRecord>> {
        self.records
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .get(path)
            .cloned()
    }

    /// Paths analyzed so far, sorted.
    pub fn analyzed_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .records
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .keys()
            .cloned()
            .collect();
        paths.sort();
        paths
    }

    /// Flags in `path` that no mapping resolves (parameter flags excluded).
    ///
    /// Reads the file again; nothing here is cached.
    pub fn unresolved_flags(&self, path: &str) -> Result<Vec<Flag>, BuildError> {
        let content = self.load(path, &BuildStack::root(path))?;
        Ok(scan(&content)
            .into_iter()
            .filter(|flag| !flag.is_parameter() && self.resolve_pattern(flag).is_none())
            .collect())
    }

    /// Read `path` from the store, turning absence into `FileNotFound`.
    pub(crate) fn load(&self, path: &str, stack: &BuildStack) -> Result<String, BuildError> {
        match self.store.read(path) {
            Ok(Some(content)) => Ok(content),
            Ok(None) => Err(BuildError::FileNotFound {
                path: path.to_string(),
                stack: stack.clone(),
            }),
            Err(source) => Err(BuildError::Store {
                path: path.to_string(),
                source,
            }),
        }
    }
}
