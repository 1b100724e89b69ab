//! Error types for the differencer.

use thiserror::Error;

/// Errors produced while interpreting a unified diff.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// A hunk header did not match the `@@ -l,n +l,n @@` grammar.
    ///
    /// Carries the offending header line. This is fatal: a silently
    /// misparsed header would corrupt the rendered diff.
    #[error("malformed hunk header: {0:?}")]
    MalformedHunk(String),
}

/// Convenience alias for differencer results.
pub type DiffResult<T> = Result<T, DiffError>;
