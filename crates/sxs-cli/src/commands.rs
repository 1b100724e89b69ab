use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::cli::{Cli, OutputFormat};
use crate::render;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let left = read_file(&cli.left)?;
    let right = read_file(&cli.right)?;

    let unified = match &cli.diff {
        Some(path) => read_file(path)?,
        None => generate_unified(&left, &right, cli.unified),
    };
    tracing::debug!(bytes = unified.len(), "unified diff ready");

    let diff = sxs_diff::text_diff(&left, &right, &unified)?;

    match cli.format {
        OutputFormat::Text => render::print_text(&diff),
        OutputFormat::Json => render::print_json(&diff)?,
    }
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Produce the unified-diff string for two contents.
///
/// Equal contents yield the empty string, the differencer's "nothing to
/// show" signal.
fn generate_unified(left: &str, right: &str, context: usize) -> String {
    if left == right {
        return String::new();
    }
    similar::TextDiff::from_lines(left, right)
        .unified_diff()
        .context_radius(context)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_contents_produce_empty_diff() {
        assert_eq!(generate_unified("same\n", "same\n", 3), "");
    }

    #[test]
    fn generated_diff_is_accepted_by_the_core() {
        let left = "a\nb\nc\n";
        let right = "a\nx\nc\n";
        let unified = generate_unified(left, right, 3);
        let diff = sxs_diff::text_diff(left, right, &unified).unwrap();
        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.deletions(), 1);
    }
}
