//! Template mapping table: `(flag kind, variable) -> path pattern`.
//!
//! Built once from configuration and read-only afterwards. Duplicate
//! `(kind, variable)` pairs are rejected when the table is built, so lookups
//! are unambiguous.

use crate::pattern::{PathPattern, PatternError};
use std::collections::HashMap;
use thiserror::Error;

/// Error building a mapping table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The same `(kind, variable)` pair was mapped twice.
    #[error("duplicate template mapping for flag '@__{kind}__:{variable}'")]
    Duplicate { kind: String, variable: String },

    /// A mapping's path pattern could not be parsed.
    #[error("invalid template '{pattern}' for flag '@__{kind}__:{variable}': {source}")]
    InvalidPattern {
        kind: String,
        variable: String,
        pattern: String,
        #[source]
        source: PatternError,
    },
}

/// Immutable lookup from `(kind, variable)` to a parsed path pattern.
#[derive(Debug, Clone, Default)]
pub struct TemplateMap {
    by_kind: HashMap<String, HashMap<String, PathPattern>>,
}

impl TemplateMap {
    /// Build a table from `(kind, variable, pattern)` triples.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompter::mapping::TemplateMap;
    ///
    /// let map = TemplateMap::from_entries([
    ///     ("symbol", "system_prompt", "system_prompt.md"),
    ///     ("symbol", "beginning", "agents/{agent_name}/beginning.md"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(map.lookup("symbol", "system_prompt").unwrap().as_str(), "system_prompt.md");
    /// assert!(map.lookup("symbol", "unknown").is_none());
    /// ```
    pub fn from_entries<I, K, V, P>(entries: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (K, V, P)>,
        K: Into<String>,
        V: Into<String>,
        P: AsRef<str>,
    {
        let mut by_kind: HashMap<String, HashMap<String, PathPattern>> = HashMap::new();

        for (kind, variable, pattern) in entries {
            let kind = kind.into();
            let variable = variable.into();
            let raw = pattern.as_ref();

            let parsed = PathPattern::parse(raw).map_err(|source| MappingError::InvalidPattern {
                kind: kind.clone(),
                variable: variable.clone(),
                pattern: raw.to_string(),
                source,
            })?;

            let vars = by_kind.entry(kind.clone()).or_default();
            if vars.contains_key(&variable) {
                return Err(MappingError::Duplicate { kind, variable });
            }
            vars.insert(variable, parsed);
        }

        Ok(Self { by_kind })
    }

    /// Look up the pattern mapped to `(kind, variable)`.
    pub fn lookup(&self, kind: &str, variable: &str) -> Option<&PathPattern> {
        self.by_kind.get(kind)?.get(variable)
    }

    /// Variables mapped under `kind`, sorted by name.
    pub fn variables_of(&self, kind: &str) -> Vec<(&str, &PathPattern)> {
        let mut vars: Vec<_> = self
            .by_kind
            .get(kind)
            .map(|vars| vars.iter().map(|(v, p)| (v.as_str(), p)).collect())
            .unwrap_or_default();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars
    }

    /// Total number of mappings.
    pub fn len(&self) -> usize {
        self.by_kind.values().map(HashMap::len).sum()
    }

    /// Whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hits_and_misses() {
        let map = TemplateMap::from_entries([
            ("symbol", "main", "main.md"),
            ("section", "main", "sections/main.md"),
        ])
        .unwrap();

        assert_eq!(map.lookup("symbol", "main").unwrap().as_str(), "main.md");
        assert_eq!(
            map.lookup("section", "main").unwrap().as_str(),
            "sections/main.md"
        );
        assert!(map.lookup("symbol", "other").is_none());
        assert!(map.lookup("unknown", "main").is_none());
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = TemplateMap::from_entries([
            ("symbol", "main", "main.md"),
            ("symbol", "main", "other.md"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            MappingError::Duplicate {
                kind: "symbol".to_string(),
                variable: "main".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "duplicate template mapping for flag '@__symbol__:main'"
        );
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = TemplateMap::from_entries([("symbol", "broken", "agents/{name.md")]).unwrap_err();
        assert!(matches!(
            err,
            MappingError::InvalidPattern { ref variable, .. } if variable == "broken"
        ));
    }

    #[test]
    fn test_variables_of_sorted() {
        let map = TemplateMap::from_entries([
            ("symbol", "zeta", "z.md"),
            ("symbol", "alpha", "a.md"),
            ("other", "beta", "b.md"),
        ])
        .unwrap();

        let names: Vec<_> = map.variables_of("symbol").into_iter().map(|(v, _)| v).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert!(map.variables_of("missing").is_empty());
    }

    #[test]
    fn test_empty_table() {
        let map = TemplateMap::from_entries(Vec::<(String, String, String)>::new()).unwrap();
        assert!(map.is_empty());
    }
}
