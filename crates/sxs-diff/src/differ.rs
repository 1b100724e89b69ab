//! Aligns a unified diff against both file versions for side-by-side display.
//!
//! A single synchronous pass: no I/O, no shared state. Each call owns its
//! inputs and produces an immutable [`TextDiff`].

use crate::error::DiffResult;
use crate::hunk::{parse_unified_diff, HunkLine};
use crate::model::{DiffLine, DiffLineKind, TextDiff};

/// Reconcile `unified_diff` against the two full contents.
///
/// Produces two parallel line streams where position `i` on either side is
/// the same render row: deleted lines pair with a placeholder on the right,
/// added lines with a placeholder on the left, and unchanged lines appear on
/// both sides. Hunks are consumed in textual order; the regions between and
/// around them are filled from the contents in lock-step.
///
/// An empty `unified_diff`, or equal contents, is the "nothing to show"
/// signal: the result carries only the verbatim contents and empty streams.
///
/// # Errors
///
/// [`crate::DiffError::MalformedHunk`] if a hunk header does not parse; no
/// partial result is returned.
pub fn text_diff(
    left_contents: &str,
    right_contents: &str,
    unified_diff: &str,
) -> DiffResult<TextDiff> {
    // Canonical shortcut: no visible diff, contents only.
    if unified_diff.is_empty() || left_contents == right_contents {
        return Ok(TextDiff {
            left_contents: left_contents.to_string(),
            right_contents: right_contents.to_string(),
            left_lines: Vec::new(),
            right_lines: Vec::new(),
        });
    }

    let hunks = parse_unified_diff(unified_diff)?;
    let left: Vec<&str> = left_contents.lines().collect();
    let right: Vec<&str> = right_contents.lines().collect();

    let mut rows = Rows::default();
    let mut lcur = 0usize;
    let mut rcur = 0usize;

    for hunk in &hunks {
        // Unchanged region between the previous hunk and this one.
        while lcur < hunk.old_begin()
            && rcur < hunk.new_begin()
            && lcur < left.len()
            && rcur < right.len()
        {
            rows.unchanged(left[lcur], right[rcur]);
            lcur += 1;
            rcur += 1;
        }

        for line in &hunk.lines {
            match line {
                HunkLine::Context(text) => {
                    rows.unchanged(text, text);
                    lcur += 1;
                    rcur += 1;
                }
                HunkLine::Removed(text) => {
                    rows.deleted(text);
                    lcur += 1;
                }
                HunkLine::Added(text) => {
                    rows.added(text);
                    rcur += 1;
                }
            }
        }

        lcur = lcur.max(hunk.old_end());
        rcur = rcur.max(hunk.new_end());
    }

    // Unchanged region after the last hunk.
    while lcur < left.len() && rcur < right.len() {
        rows.unchanged(left[lcur], right[rcur]);
        lcur += 1;
        rcur += 1;
    }

    Ok(TextDiff {
        left_contents: left_contents.to_string(),
        right_contents: right_contents.to_string(),
        left_lines: rows.left,
        right_lines: rows.right,
    })
}

/// Accumulates the two parallel streams with a shared row counter.
#[derive(Default)]
struct Rows {
    left: Vec<DiffLine>,
    right: Vec<DiffLine>,
    row: u32,
}

impl Rows {
    fn unchanged(&mut self, left_text: &str, right_text: &str) {
        self.left.push(DiffLine {
            text: left_text.to_string(),
            kind: DiffLineKind::NoChange,
            row: self.row,
        });
        self.right.push(DiffLine {
            text: right_text.to_string(),
            kind: DiffLineKind::NoChange,
            row: self.row,
        });
        self.row += 1;
    }

    fn deleted(&mut self, text: &str) {
        self.left.push(DiffLine {
            text: text.to_string(),
            kind: DiffLineKind::Delete,
            row: self.row,
        });
        self.right.push(DiffLine::placeholder(self.row));
        self.row += 1;
    }

    fn added(&mut self, text: &str) {
        self.left.push(DiffLine::placeholder(self.row));
        self.right.push(DiffLine {
            text: text.to_string(),
            kind: DiffLineKind::Add,
            row: self.row,
        });
        self.row += 1;
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn contents() -> impl Strategy<Value = String> {
        proptest::collection::vec("[ab]{0,3}", 0..10).prop_map(|lines| lines.join("\n"))
    }

    fn unified_for(left: &str, right: &str) -> String {
        if left == right {
            String::new()
        } else {
            similar::TextDiff::from_lines(left, right)
                .unified_diff()
                .to_string()
        }
    }

    proptest! {
        #[test]
        fn rows_are_aligned_and_gap_free(left in contents(), right in contents()) {
            let unified = unified_for(&left, &right);
            let diff = text_diff(&left, &right, &unified).unwrap();

            prop_assert_eq!(diff.left_lines.len(), diff.right_lines.len());
            for (i, (l, r)) in diff.left_lines.iter().zip(&diff.right_lines).enumerate() {
                prop_assert_eq!(l.row, i as u32);
                prop_assert_eq!(r.row, i as u32);
                // A row never consists of two placeholders.
                prop_assert!(!(l.is_placeholder() && r.is_placeholder()));
                if l.kind == DiffLineKind::NoChange {
                    prop_assert_eq!(r.kind, DiffLineKind::NoChange);
                    prop_assert_eq!(&l.text, &r.text);
                }
            }
        }

        #[test]
        fn sides_reconstruct_their_originals(left in contents(), right in contents()) {
            let unified = unified_for(&left, &right);
            let diff = text_diff(&left, &right, &unified).unwrap();
            if diff.is_empty() {
                prop_assert_eq!(left, right);
                return Ok(());
            }

            let rebuilt_left: Vec<&str> = diff
                .left_lines
                .iter()
                .filter(|l| !l.is_placeholder())
                .map(|l| l.text.as_str())
                .collect();
            let rebuilt_right: Vec<&str> = diff
                .right_lines
                .iter()
                .filter(|l| !l.is_placeholder())
                .map(|l| l.text.as_str())
                .collect();

            prop_assert_eq!(rebuilt_left, left.lines().collect::<Vec<_>>());
            prop_assert_eq!(rebuilt_right, right.lines().collect::<Vec<_>>());
        }

        #[test]
        fn deterministic(left in contents(), right in contents()) {
            let unified = unified_for(&left, &right);
            let first = text_diff(&left, &right, &unified).unwrap();
            let second = text_diff(&left, &right, &unified).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
