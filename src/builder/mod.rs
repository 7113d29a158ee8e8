//! Recursive template expansion.
//!
//! [`Builder::build`] turns a top-level template name plus parameters into
//! fully expanded text:
//!
//! 1. Resolve the name under the entry kind (default `symbol`)
//! 2. Ask the [`Linker`] for the template's required parameters and fail
//!    fast with `MissingParameters` if any are absent
//! 3. Expand flags depth-first, tracking a [`BuildStack`] for cycle
//!    detection and error trails
//! 4. Wrap any expansion failure with the top-level template name
//!
//! # Substitution
//!
//! Within one file, every occurrence of the same flag text receives the same
//! replacement, computed once at its first occurrence. Replacements are
//! applied by byte span in a single pass, so inserted text (including
//! parameter values that happen to look like flags) is never rescanned.
//!
//! Expanded output is never cached; only dependency analysis is.

mod edits;
mod stack;


pub use stack::BuildStack;

use crate::config::DEFAULT_ENTRY_KIND;
use crate::error::BuildError;
use crate::linker::{DependencyRecord, Linker};
use crate::scanner::{Flag, scan};
use crate::store::ContentStore;
use edits::{Edit, apply_edits};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, trace};

/// Named values supplied by the caller of [`Builder::build`].
pub type Parameters = BTreeMap<String, String>;

/// Helper to create a [`Parameters`] map from key-value pairs.
///
/// Values only need to be convertible to text.
///
/// ```
/// use prompter::builder::params;
///
/// let p = params([("agent_name", "tinia")]);
/// assert_eq!(p["agent_name"], "tinia");
///
/// let n = params([("retries", 3)]);
/// assert_eq!(n["retries"], "3");
/// ```
pub fn params<I, K, V>(pairs: I) -> Parameters
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_string()))
        .collect()
}

/// Expands templates by recursively resolving flags through a [`Linker`].
///
/// The builder borrows its linker, so several builders (or several builds)
/// share one dependency cache.
#[derive(Debug)]
pub struct Builder<'l, S> {
    linker: &'l Linker<S>,
    entry_kind: String,
}

impl<'l, S: ContentStore> Builder<'l, S> {
    /// Create a builder that resolves top-level names under `symbol`.
    pub fn new(linker: &'l Linker<S>) -> Self {
        Self {
            linker,
            entry_kind: DEFAULT_ENTRY_KIND.to_string(),
        }
    }

    /// Resolve top-level names under `kind` instead.
    pub fn with_entry_kind(mut self, kind: impl Into<String>) -> Self {
        self.entry_kind = kind.into();
        self
    }

    /// The linker this builder resolves through.
    pub fn linker(&self) -> &'l Linker<S> {
        self.linker
    }

    /// Build a complete text from a template name.
    ///
    /// # Errors
    ///
    /// * `TemplateNotFound` - `template_name` is not mapped under the entry kind
    /// * `MissingParameters` - required parameters are absent (nothing expanded yet)
    /// * `FileNotFound` / `Store` - the analysis closure could not be read
    /// * `Template` - expansion failed; the wrapped error has the details
    pub fn build(&self, template_name: &str, parameters: &Parameters) -> Result<String, BuildError> {
        let (path, record) = self.prepare(template_name, parameters)?;

        let missing = record.missing_from(parameters);
        if !missing.is_empty() {
            return Err(BuildError::MissingParameters {
                template: template_name.to_string(),
                missing,
            });
        }

        debug!(template = template_name, path = %path, "building template");
        self.expand(&path, parameters, &BuildStack::root(&path))
            .map_err(|source| BuildError::Template {
                name: template_name.to_string(),
                source: Box::new(source),
            })
    }

    /// The dependency record of a top-level template, without expanding it.
    pub fn dependencies(
        &self,
        template_name: &str,
        parameters: &Parameters,
    ) -> Result<Arc<DependencyRecord>, BuildError> {
        self.prepare(template_name, parameters)
            .map(|(_, record)| record)
    }

    /// The concrete path a top-level template name refers to.
    ///
    /// A parameterized entry pattern is filled from `parameters`; its unfilled
    /// placeholders are reported together as `MissingParameters`.
    pub fn entry_path(
        &self,
        template_name: &str,
        parameters: &Parameters,
    ) -> Result<String, BuildError> {
        let pattern = self
            .linker
            .mapping()
            .lookup(&self.entry_kind, template_name)
            .ok_or_else(|| BuildError::TemplateNotFound {
                name: template_name.to_string(),
            })?;

        pattern.fill(parameters).map_err(|_| BuildError::MissingParameters {
            template: template_name.to_string(),
            missing: pattern
                .placeholders()
                .filter(|name| !parameters.contains_key(*name))
                .map(str::to_string)
                .collect(),
        })
    }

    fn prepare(
        &self,
        template_name: &str,
        parameters: &Parameters,
    ) -> Result<(String, Arc<DependencyRecord>), BuildError> {
        let path = self.entry_path(template_name, parameters)?;
        let record = self.linker.analyze(&path)?;
        Ok((path, record))
    }

    fn expand(
        &self,
        path: &str,
        parameters: &Parameters,
        stack: &BuildStack,
    ) -> Result<String, BuildError> {
        trace!(path, depth = stack.len(), "expanding");
        let content = self.linker.load(path, stack)?;
        let flags = scan(&content);

        // One replacement per distinct flag text, in first-occurrence order.
        let mut replacements: Vec<String> = Vec::new();
        let mut slot_of: HashMap<&str, usize> = HashMap::new();
        let mut slots = Vec::with_capacity(flags.len());

        for flag in &flags {
            let slot = match slot_of.get(flag.literal.as_str()) {
                Some(&slot) => slot,
                None => {
                    let replacement = self.replacement(flag, path, parameters, stack)?;
                    replacements.push(replacement);
                    slot_of.insert(flag.literal.as_str(), replacements.len() - 1);
                    replacements.len() - 1
                }
            };
            slots.push(slot);
        }

        let mut edits: Vec<Edit<'_>> = flags
            .iter()
            .zip(&slots)
            .map(|(flag, &slot)| Edit {
                span: flag.span.clone(),
                text: replacements[slot].as_str(),
            })
            .collect();

        apply_edits(&content, &mut edits).map_err(|conflict| BuildError::OverlappingEdit {
            path: path.to_string(),
            start: conflict.span.start,
            end: conflict.span.end,
        })
    }

    fn replacement(
        &self,
        flag: &Flag,
        path: &str,
        parameters: &Parameters,
        stack: &BuildStack,
    ) -> Result<String, BuildError> {
        if flag.is_parameter() {
            return parameters
                .get(&flag.variable)
                .cloned()
                .ok_or_else(|| BuildError::MissingParameter {
                    name: flag.variable.clone(),
                    pattern: None,
                    line: flag.line,
                    path: path.to_string(),
                    stack: stack.clone(),
                });
        }

        let pattern = self
            .linker
            .resolve_pattern(flag)
            .ok_or_else(|| BuildError::UndefinedFlag {
                flag: flag.literal.clone(),
                line: flag.line,
                path: path.to_string(),
                stack: stack.clone(),
            })?;

        let child = pattern
            .fill(parameters)
            .map_err(|unfilled| BuildError::MissingParameter {
                name: unfilled.name,
                pattern: Some(pattern.as_str().to_string()),
                line: flag.line,
                path: path.to_string(),
                stack: stack.clone(),
            })?;

        if let Some(cycle) = stack.cycle_to(&child) {
            return Err(BuildError::CircularDependency { cycle });
        }

        trace!(path, flag = %flag, child = %child, "descending");
        self.expand(&child, parameters, &stack.pushed(&child))
    }
}
