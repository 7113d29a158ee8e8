//! Flag discovery in template text.
//!
//! A flag is a marker of the form `@__<kind>__:<variable>`, for example
//! `@__symbol__:beginning`. Both `<kind>` and `<variable>` match
//! `[A-Za-z0-9_]+`. The scanner only recognizes the lexical shape; it never
//! consults the mapping table.

use regex::Regex;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

/// Flag kind that substitutes a caller-supplied parameter directly.
pub const PARAMETER_KIND: &str = "parameter";

static FLAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@__([A-Za-z0-9_]+)__:([A-Za-z0-9_]+)").expect("Invalid flag regex")
});

/// A single flag occurrence inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Flag category (e.g. "symbol" in `@__symbol__:beginning`).
    pub kind: String,
    /// Variable name (e.g. "beginning" in `@__symbol__:beginning`).
    pub variable: String,
    /// 1-based line number of the occurrence.
    pub line: usize,
    /// The exact matched text.
    pub literal: String,
    /// Byte range of `literal` within the scanned text.
    pub span: Range<usize>,
}

impl Flag {
    /// Whether this flag is a direct parameter substitution.
    pub fn is_parameter(&self) -> bool {
        self.kind == PARAMETER_KIND
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Find every flag in `text`, ordered by line then by position in the line.
///
/// # Examples
///
/// ```
/// use prompter::scanner::scan;
///
/// let flags = scan("Hello @__parameter__:name!\n@__symbol__:footer");
/// assert_eq!(flags.len(), 2);
/// assert_eq!(flags[0].variable, "name");
/// assert_eq!(flags[1].line, 2);
/// ```
pub fn scan(text: &str) -> Vec<Flag> {
    let mut flags = Vec::new();
    let mut offset = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        for caps in FLAG_REGEX.captures_iter(line) {
            let whole = &caps[0];
            let start = offset + caps.get(0).map_or(0, |m| m.start());
            flags.push(Flag {
                kind: caps[1].to_string(),
                variable: caps[2].to_string(),
                line: index + 1,
                literal: whole.to_string(),
                span: start..start + whole.len(),
            });
        }
        offset += line.len();
    }

    flags
}
