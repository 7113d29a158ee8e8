//! The trail of template paths being expanded.

use std::fmt;

/// Ordered paths from the top-level template down to the one being expanded.
///
/// A stack belongs to a single build call. Extending it produces a new stack
/// (`stack + [child]`), so sibling branches never see each other's paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStack {
    paths: Vec<String>,
}

impl BuildStack {
    /// A stack holding only the top-level path.
    pub fn root(path: &str) -> Self {
        Self {
            paths: vec![path.to_string()],
        }
    }

    /// A copy of this stack with `path` appended.
    pub fn pushed(&self, path: &str) -> Self {
        let mut paths = Vec::with_capacity(self.paths.len() + 1);
        paths.extend(self.paths.iter().cloned());
        paths.push(path.to_string());
        Self { paths }
    }

    /// Whether `path` is anywhere on the stack.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// The cycle closed by re-entering `path`, if it is on the stack.
    ///
    /// The cycle runs from the first occurrence of `path` through the current
    /// path and ends with `path` again, e.g. `[a, b, a]`.
    pub fn cycle_to(&self, path: &str) -> Option<Vec<String>> {
        let start = self.paths.iter().position(|p| p == path)?;
        let mut cycle = self.paths[start..].to_vec();
        cycle.push(path.to_string());
        Some(cycle)
    }

    /// The path currently being expanded.
    pub fn current(&self) -> Option<&str> {
        self.paths.last().map(String::as_str)
    }

    /// All paths, outermost first.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Number of paths on the stack.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl fmt::Display for BuildStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths.join(" -> "))
    }
}
