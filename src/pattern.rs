//! Template-path patterns with `{name}` placeholders.
//!
//! A path pattern is the right-hand side of a mapping table entry. It is a
//! relative path that may contain placeholders filled from build parameters
//! before it is read from the content store:
//!
//! ```text
//! agents/{agent_name}/beginning.md
//! ```
//!
//! # Syntax
//!
//! - `{name}` - Placeholder; `name` matches `[A-Za-z0-9_]+`
//! - `{{` - Literal `{`
//! - `}}` - Literal `}`
//!
//! Patterns are parsed once when the mapping table is loaded, so malformed
//! patterns are configuration errors rather than build failures.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Error type for pattern parsing failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in pattern")]
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },

    /// An empty placeholder was found (e.g., `{}`).
    #[error("empty placeholder '{{}}' at position {position} in pattern")]
    EmptyPlaceholder {
        /// The position of the empty placeholder.
        position: usize,
    },

    /// A placeholder name contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid placeholder name '{name}' at position {position} in pattern")]
    InvalidPlaceholder {
        /// The offending name.
        name: String,
        /// The position of the placeholder's `{`.
        position: usize,
    },
}

/// A placeholder had no value when the pattern was filled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no value for placeholder '{name}'")]
pub struct UnfilledPlaceholder {
    /// The placeholder name that had no value.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template-path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompter::pattern::PathPattern;
    ///
    /// let pattern = PathPattern::parse("agents/{agent_name}/beginning.md").unwrap();
    /// assert_eq!(pattern.placeholders().collect::<Vec<_>>(), vec!["agent_name"]);
    /// assert!(!pattern.is_concrete());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => return Err(PatternError::UnmatchedBrace { position: pos }),
                        }
                    }

                    if name.is_empty() {
                        return Err(PatternError::EmptyPlaceholder { position: pos });
                    }
                    if !is_identifier(&name) {
                        return Err(PatternError::InvalidPlaceholder {
                            name,
                            position: pos,
                        });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    // `}}` collapses to one brace; a lone `}` is kept as-is
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern exactly as written in configuration.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of appearance (repeats included).
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the pattern has no placeholders.
    pub fn is_concrete(&self) -> bool {
        self.placeholders().next().is_none()
    }

    /// The concrete path for a placeholder-free pattern, with escapes resolved.
    pub fn concrete_path(&self) -> Option<String> {
        if !self.is_concrete() {
            return None;
        }
        Some(self.render(|_| None).unwrap_or_default())
    }

    /// Fill every placeholder from `values`.
    ///
    /// Fails on the first placeholder (in order of appearance) with no value.
    pub fn fill<V: AsRef<str>>(
        &self,
        values: &BTreeMap<String, V>,
    ) -> Result<String, UnfilledPlaceholder> {
        self.render(|name| values.get(name).map(|v| v.as_ref()))
    }

    fn render<'v, F>(&self, lookup: F) -> Result<String, UnfilledPlaceholder>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(UnfilledPlaceholder { name: name.clone() });
                    }
                },
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Whether `name` is a non-empty run of `[A-Za-z0-9_]`.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
