//! Terminal rendering of a [`TextDiff`]: side-by-side text or JSON.

use colored::Colorize;
use sxs_diff::{DiffLine, DiffLineKind, TextDiff};

/// Widest left column we will pad to; longer lines simply overflow.
const MAX_PANE_WIDTH: usize = 80;
const MIN_PANE_WIDTH: usize = 20;

pub fn print_text(diff: &TextDiff) {
    if diff.is_empty() {
        println!("No changes.");
        return;
    }

    let width = diff
        .left_lines
        .iter()
        .map(|l| l.text.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(MIN_PANE_WIDTH, MAX_PANE_WIDTH);

    for (left, right) in diff.left_lines.iter().zip(&diff.right_lines) {
        println!(
            "{} {} {}",
            format_side(left, width),
            "|".dimmed(),
            format_side(right, 0)
        );
    }
}

pub fn print_json(diff: &TextDiff) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(diff)?);
    Ok(())
}

/// Marker plus padded, colored line text. Padding happens before coloring
/// so ANSI escapes don't break column alignment.
fn format_side(line: &DiffLine, width: usize) -> String {
    let padded = format!("{:<width$}", line.text, width = width);
    match line.kind {
        DiffLineKind::NoChange => format!("  {padded}"),
        DiffLineKind::Add => format!("{} {}", "+".green().bold(), padded.green()),
        DiffLineKind::Delete => format!("{} {}", "-".red().bold(), padded.red()),
        DiffLineKind::Placeholder => format!("  {}", padded.dimmed()),
    }
}
