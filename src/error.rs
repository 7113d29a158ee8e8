//! Error types for prompter.
//!
//! Uses thiserror for derive macros. [`BuildError`] is the resolution
//! engine's taxonomy; [`PrompterError`] is what the CLI reports, with an exit
//! code per variant.

use crate::builder::BuildStack;
use crate::exit_codes;
use std::collections::BTreeSet;
use std::io;
use thiserror::Error;

/// Failure while resolving a template graph.
///
/// Every failure is terminal for the `build` call that produced it; nothing is
/// retried and no partial output survives.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The top-level template name has no entry in the mapping table.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// Pre-flight check: the caller did not supply every required parameter.
    #[error(
        "missing required parameters for template '{template}': {}",
        join_names(.missing)
    )]
    MissingParameters {
        template: String,
        missing: BTreeSet<String>,
    },

    /// A parameter discovered during expansion has no value.
    #[error(
        "missing parameter '{name}'{} at line {line} in {path}\nbuild path: {stack}",
        pattern_suffix(.pattern)
    )]
    MissingParameter {
        name: String,
        /// The path pattern that referenced the placeholder, if any.
        pattern: Option<String>,
        line: usize,
        path: String,
        stack: BuildStack,
    },

    /// A flag's `(kind, variable)` pair has no mapping.
    #[error("undefined flag '{flag}' at line {line} in {path}\nbuild path: {stack}")]
    UndefinedFlag {
        flag: String,
        line: usize,
        path: String,
        stack: BuildStack,
    },

    /// The content store has nothing at a resolved path.
    #[error("file not found: {path}\nbuild path: {stack}")]
    FileNotFound { path: String, stack: BuildStack },

    /// A concrete path was reached again while it was still being expanded.
    #[error("circular dependency detected: {}", .cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },

    /// Two substitutions in one file claim overlapping byte ranges.
    #[error("overlapping substitutions at bytes {start}..{end} in {path}")]
    OverlappingEdit {
        path: String,
        start: usize,
        end: usize,
    },

    /// The content store failed for a reason other than absence.
    #[error("failed to read '{path}': {source}")]
    Store {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Expansion failure annotated with the top-level template name.
    #[error("error building template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Returns the innermost error, looking through [`BuildError::Template`] wrappers.
    pub fn root(&self) -> &BuildError {
        match self {
            BuildError::Template { source, .. } => source.root(),
            other => other,
        }
    }
}

fn join_names(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn pattern_suffix(pattern: &Option<String>) -> String {
    match pattern {
        Some(pattern) => format!(" for template '{}'", pattern),
        None => String::new(),
    }
}

/// Main error type for prompter operations.
#[derive(Error, Debug)]
pub enum PrompterError {
    /// User provided invalid arguments or an unusable input/output path.
    #[error("{0}")]
    UserError(String),

    /// Configuration file or mapping table is invalid.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Template resolution failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// `check` found problems in the template graph.
    #[error("check found {problems} problem(s)")]
    CheckFailed { problems: usize },
}

impl PrompterError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrompterError::UserError(_) => exit_codes::USER_ERROR,
            PrompterError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PrompterError::Build(_) => exit_codes::BUILD_FAILURE,
            PrompterError::CheckFailed { .. } => exit_codes::BUILD_FAILURE,
        }
    }
}

/// Result type alias for prompter operations.
pub type Result<T> = std::result::Result<T, PrompterError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(paths: &[&str]) -> BuildStack {
        let mut iter = paths.iter();
        let mut stack = BuildStack::root(iter.next().unwrap());
        for path in iter {
            stack = stack.pushed(path);
        }
        stack
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PrompterError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = PrompterError::ConfigError("duplicate mapping".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn build_error_has_correct_exit_code() {
        let err: PrompterError = BuildError::TemplateNotFound {
            name: "main".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::BUILD_FAILURE);
    }

    #[test]
    fn missing_parameters_lists_names_sorted() {
        let err = BuildError::MissingParameters {
            template: "main".to_string(),
            missing: ["name", "agent"].iter().map(|s| s.to_string()).collect(),
        };
        assert_eq!(
            err.to_string(),
            "missing required parameters for template 'main': agent, name"
        );
    }

    #[test]
    fn missing_parameter_mentions_pattern_and_trail() {
        let err = BuildError::MissingParameter {
            name: "agent_name".to_string(),
            pattern: Some("agents/{agent_name}/intro.md".to_string()),
            line: 3,
            path: "system.md".to_string(),
            stack: stack(&["main.md", "system.md"]),
        };
        assert_eq!(
            err.to_string(),
            "missing parameter 'agent_name' for template 'agents/{agent_name}/intro.md' \
             at line 3 in system.md\nbuild path: main.md -> system.md"
        );
    }

    #[test]
    fn circular_dependency_joins_cycle() {
        let err = BuildError::CircularDependency {
            cycle: vec!["a.md".to_string(), "b.md".to_string(), "a.md".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "circular dependency detected: a.md -> b.md -> a.md"
        );
    }

    #[test]
    fn template_wrapper_prefixes_name_and_exposes_root() {
        let err = BuildError::Template {
            name: "main".to_string(),
            source: Box::new(BuildError::FileNotFound {
                path: "gone.md".to_string(),
                stack: stack(&["main.md", "gone.md"]),
            }),
        };
        assert!(
            err.to_string()
                .starts_with("error building template 'main': file not found: gone.md")
        );
        assert!(matches!(err.root(), BuildError::FileNotFound { path, .. } if path == "gone.md"));
    }
}
