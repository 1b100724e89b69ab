use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sxs",
    about = "Side-by-side diff viewer for code review",
    version,
)]
pub struct Cli {
    /// Left (old) version of the file
    pub left: PathBuf,

    /// Right (new) version of the file
    pub right: PathBuf,

    /// Read a precomputed unified diff from this file instead of
    /// generating one
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Context lines when generating the unified diff
    #[arg(short = 'U', long, default_value = "3", value_name = "N")]
    pub unified: usize,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
