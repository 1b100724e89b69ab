//! Output data model: two parallel, row-aligned streams of annotated lines.
//!
//! Both streams always have the same length. Position `i` on one side and
//! position `i` on the other form one render row; when only one side has a
//! real line at a row, the other side carries a [`DiffLineKind::Placeholder`].

use serde::{Deserialize, Serialize};

/// How a single output line relates to the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineKind {
    /// Present on both sides with identical text.
    NoChange,
    /// Present only on the right side.
    Add,
    /// Present only on the left side.
    Delete,
    /// Synthetic blank keeping this side aligned with the other.
    Placeholder,
}

/// One rendered line on one side of the comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// The line's content. Empty for placeholders.
    pub text: String,
    /// How this line relates to the other side.
    pub kind: DiffLineKind,
    /// 0-based render row shared by both sides. Not an original file line
    /// number: placeholders consume rows too.
    pub row: u32,
}

impl DiffLine {
    /// A synthetic blank line at the given row.
    pub fn placeholder(row: u32) -> Self {
        Self {
            text: String::new(),
            kind: DiffLineKind::Placeholder,
            row,
        }
    }

    /// Returns `true` if this line is a synthetic blank.
    pub fn is_placeholder(&self) -> bool {
        self.kind == DiffLineKind::Placeholder
    }
}

/// The result of aligning two file versions against their unified diff.
///
/// Constructed once by [`crate::text_diff`] and immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    /// Full original text of the left (old) side, verbatim.
    pub left_contents: String,
    /// Full original text of the right (new) side, verbatim.
    pub right_contents: String,
    /// Annotated lines for the left side, one per render row.
    pub left_lines: Vec<DiffLine>,
    /// Annotated lines for the right side, one per render row.
    pub right_lines: Vec<DiffLine>,
}

impl TextDiff {
    /// Returns `true` if there is nothing to render (the empty-diff shortcut).
    pub fn is_empty(&self) -> bool {
        self.left_lines.is_empty() && self.right_lines.is_empty()
    }

    /// Number of render rows.
    pub fn rows(&self) -> usize {
        self.left_lines.len()
    }

    /// Number of added lines across the right stream.
    pub fn additions(&self) -> usize {
        self.right_lines
            .iter()
            .filter(|l| l.kind == DiffLineKind::Add)
            .count()
    }

    /// Number of deleted lines across the left stream.
    pub fn deletions(&self) -> usize {
        self.left_lines
            .iter()
            .filter(|l| l.kind == DiffLineKind::Delete)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_blank() {
        let line = DiffLine::placeholder(7);
        assert!(line.is_placeholder());
        assert!(line.text.is_empty());
        assert_eq!(line.row, 7);
    }

    #[test]
    fn empty_text_diff() {
        let diff = TextDiff::default();
        assert!(diff.is_empty());
        assert_eq!(diff.rows(), 0);
        assert_eq!(diff.additions(), 0);
        assert_eq!(diff.deletions(), 0);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&DiffLineKind::NoChange).unwrap();
        assert_eq!(json, "\"no_change\"");
        let json = serde_json::to_string(&DiffLineKind::Placeholder).unwrap();
        assert_eq!(json, "\"placeholder\"");
    }
}
