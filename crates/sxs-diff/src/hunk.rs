//! Unified-diff hunk grammar.
//!
//! Parses the `@@ -lstart,lcount +rstart,rcount @@` header form plus the
//! `-` / `+` / context body lines. File headers (`--- a/...`, `+++ b/...`,
//! `diff --git ...`) before the first hunk are skipped, as are
//! `\ No newline at end of file` markers.

use crate::error::{DiffError, DiffResult};

/// One line in a hunk body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HunkLine {
    /// A line present on both sides (context).
    Context(String),
    /// A line added on the right side.
    Added(String),
    /// A line removed from the left side.
    Removed(String),
}

/// A contiguous changed region from a unified diff.
///
/// Starts are 1-based as in the header; a zero count means the region is an
/// insertion point and its start names the line *before* the region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hunk {
    /// Start line on the left side (1-based).
    pub old_start: u32,
    /// Number of left-side lines covered (header count, default 1).
    pub old_count: u32,
    /// Start line on the right side (1-based).
    pub new_start: u32,
    /// Number of right-side lines covered (header count, default 1).
    pub new_count: u32,
    /// The hunk body, in textual order.
    pub lines: Vec<HunkLine>,
}

impl Hunk {
    /// 0-based index of the first left-side line this hunk covers.
    pub fn old_begin(&self) -> usize {
        if self.old_count == 0 {
            self.old_start as usize
        } else {
            self.old_start.saturating_sub(1) as usize
        }
    }

    /// 0-based index one past the last left-side line this hunk covers.
    pub fn old_end(&self) -> usize {
        self.old_begin() + self.old_count as usize
    }

    /// 0-based index of the first right-side line this hunk covers.
    pub fn new_begin(&self) -> usize {
        if self.new_count == 0 {
            self.new_start as usize
        } else {
            self.new_start.saturating_sub(1) as usize
        }
    }

    /// 0-based index one past the last right-side line this hunk covers.
    pub fn new_end(&self) -> usize {
        self.new_begin() + self.new_count as usize
    }
}

/// Split a unified diff into its hunks, in textual order.
///
/// The input is expected to already be ordered ascending by position, as
/// every unified-diff producer emits it; no sorting is performed. A line
/// opening with `@@` that does not match the header grammar is fatal.
pub fn parse_unified_diff(diff: &str) -> DiffResult<Vec<Hunk>> {
    let mut hunks: Vec<Hunk> = Vec::new();

    for line in diff.lines() {
        if line.starts_with("@@") {
            hunks.push(parse_hunk_header(line)?);
        } else if let Some(hunk) = hunks.last_mut() {
            if let Some(text) = line.strip_prefix('+') {
                hunk.lines.push(HunkLine::Added(text.to_string()));
            } else if let Some(text) = line.strip_prefix('-') {
                hunk.lines.push(HunkLine::Removed(text.to_string()));
            } else if line.starts_with('\\') {
                // "\ No newline at end of file"
            } else {
                let text = line.strip_prefix(' ').unwrap_or(line);
                hunk.lines.push(HunkLine::Context(text.to_string()));
            }
        }
        // Anything before the first header is a file header; ignored.
    }

    Ok(hunks)
}

/// Parse a header like `@@ -10,4 +10,15 @@ fn foo()`.
fn parse_hunk_header(line: &str) -> DiffResult<Hunk> {
    let malformed = || DiffError::MalformedHunk(line.to_string());

    let rest = line.strip_prefix("@@ ").ok_or_else(malformed)?;
    let end = rest.find(" @@").ok_or_else(malformed)?;
    let mut ranges = rest[..end].split_whitespace();

    let old = ranges
        .next()
        .and_then(|r| r.strip_prefix('-'))
        .ok_or_else(malformed)?;
    let new = ranges
        .next()
        .and_then(|r| r.strip_prefix('+'))
        .ok_or_else(malformed)?;

    let (old_start, old_count) = parse_range(old).ok_or_else(malformed)?;
    let (new_start, new_count) = parse_range(new).ok_or_else(malformed)?;

    Ok(Hunk {
        old_start,
        old_count,
        new_start,
        new_count,
        lines: Vec::new(),
    })
}

/// Parse `start,count` or bare `start` (count defaults to 1).
fn parse_range(s: &str) -> Option<(u32, u32)> {
    match s.split_once(',') {
        Some((start, count)) => Some((start.parse().ok()?, count.parse().ok()?)),
        None => Some((s.parse().ok()?, 1)),
    }
}
