//! Per-path dependency analysis results.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Memoized analysis of one template path.
///
/// Once stored in a [`Linker`](super::Linker) cache a record is shared behind
/// an `Arc` and never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyRecord {
    /// The template path this record describes.
    pub path: String,

    /// Every flag variable that appears directly in the file.
    pub declared_variables: BTreeSet<String>,

    /// Parameters the caller must supply to resolve this file.
    ///
    /// Includes `parameter` flags, placeholders of directly referenced
    /// patterns, and the requirements of placeholder-free children.
    pub required_parameters: BTreeSet<String>,

    /// Path patterns referenced by this file, possibly still parameterized.
    pub direct_dependencies: BTreeSet<String>,
}

impl DependencyRecord {
    pub(crate) fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Default::default()
        }
    }

    /// Required parameters absent from `parameters`.
    pub fn missing_from<V>(&self, parameters: &BTreeMap<String, V>) -> BTreeSet<String> {
        self.required_parameters
            .iter()
            .filter(|name| !parameters.contains_key(*name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_from() {
        let mut record = DependencyRecord::new("main.md");
        record.required_parameters.insert("a".to_string());
        record.required_parameters.insert("b".to_string());

        let mut params = BTreeMap::new();
        params.insert("a".to_string(), "1".to_string());
        params.insert("extra".to_string(), "2".to_string());

        let missing = record.missing_from(&params);
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec!["b".to_string()]);
    }

    #[test]
    fn test_serializes_as_json() {
        let mut record = DependencyRecord::new("main.md");
        record.direct_dependencies.insert("shared/{lang}.md".to_string());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["path"], "main.md");
        assert_eq!(json["direct_dependencies"][0], "shared/{lang}.md");
        assert!(json["required_parameters"].as_array().unwrap().is_empty());
    }
}
