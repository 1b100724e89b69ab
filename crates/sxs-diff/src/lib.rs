//! Side-by-side text differencer.
//!
//! Reconciles a unified-diff string against both versions of a file's
//! contents, producing two parallel, row-aligned streams of annotated lines
//! (unchanged, added, deleted, placeholder) suitable for side-by-side
//! rendering.
//!
//! # Key Types
//!
//! - [`TextDiff`] / [`DiffLine`] / [`DiffLineKind`] -- Row-aligned output model
//! - [`Hunk`] / [`HunkLine`] -- Parsed unified-diff hunks
//! - [`DiffError`] / [`DiffResult`] -- Error taxonomy
//!
//! The entry point is [`text_diff`].

pub mod differ;
pub mod error;
pub mod hunk;
pub mod model;

pub use differ::text_diff;
pub use error::{DiffError, DiffResult};
pub use hunk::{parse_unified_diff, Hunk, HunkLine};
pub use model::{DiffLine, DiffLineKind, TextDiff};
