//! Positional text substitution.
//!
//! Replacements are collected as `(span, text)` edits against the original
//! content and applied in a single pass. Inserted text is never rescanned.

use std::ops::Range;

/// Replace the bytes in `span` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit<'a> {
    pub span: Range<usize>,
    pub text: &'a str,
}

/// An edit whose span overlaps an earlier edit or falls outside the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub span: Range<usize>,
}

/// Apply `edits` to `source`, ordered by span start.
pub fn apply_edits(source: &str, edits: &mut [Edit<'_>]) -> Result<String, Conflict> {
    edits.sort_by_key(|edit| (edit.span.start, edit.span.end));

    let added: usize = edits.iter().map(|edit| edit.text.len()).sum();
    let mut out = String::with_capacity(source.len() + added);
    let mut cursor = 0;

    for edit in edits.iter() {
        if edit.span.start < cursor || edit.span.start > edit.span.end {
            return Err(Conflict {
                span: edit.span.clone(),
            });
        }
        let (Some(kept), Some(_)) = (
            source.get(cursor..edit.span.start),
            source.get(edit.span.clone()),
        ) else {
            return Err(Conflict {
                span: edit.span.clone(),
            });
        };
        out.push_str(kept);
        out.push_str(edit.text);
        cursor = edit.span.end;
    }

    out.push_str(&source[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(start: usize, end: usize, text: &str) -> Edit<'_> {
        Edit {
            span: start..end,
            text,
        }
    }

    #[test]
    fn test_no_edits() {
        assert_eq!(apply_edits("unchanged", &mut []).unwrap(), "unchanged");
    }

    #[test]
    fn test_edits_applied_in_span_order() {
        let source = "0123456789";
        let mut edits = [edit(6, 8, "B"), edit(1, 3, "A")];
        assert_eq!(apply_edits(source, &mut edits).unwrap(), "0A345B89");
    }

    #[test]
    fn test_replacement_longer_and_shorter() {
        let source = "x @__p__:a y @__p__:b z";
        let mut edits = [edit(2, 10, "first value"), edit(13, 21, "")];
        assert_eq!(apply_edits(source, &mut edits).unwrap(), "x first value y  z");
    }

    #[test]
    fn test_overlap_is_a_conflict() {
        let mut edits = [edit(0, 5, "a"), edit(3, 7, "b")];
        let err = apply_edits("0123456789", &mut edits).unwrap_err();
        assert_eq!(err.span, 3..7);
    }

    #[test]
    fn test_same_span_is_a_conflict() {
        let mut edits = [edit(2, 4, "a"), edit(2, 4, "b")];
        assert!(apply_edits("0123456789", &mut edits).is_err());
    }

    #[test]
    fn test_out_of_bounds_is_a_conflict() {
        let mut edits = [edit(5, 50, "a")];
        assert!(apply_edits("short", &mut edits).is_err());
    }

    #[test]
    fn test_inserted_text_not_rescanned() {
        let source = "[x]";
        let mut edits = [edit(1, 2, "@__parameter__:x")];
        assert_eq!(apply_edits(source, &mut edits).unwrap(), "[@__parameter__:x]");
    }
}
