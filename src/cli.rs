use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pagejoin bulk spatial KNN join.
#[derive(Parser)]
#[command(
    name = "pagejoin",
    version,
    about = "Bulk self k-nearest-neighbor join over page-organized point data"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the k nearest neighbors of every point in a table.
    Join(JoinArgs),
}

/// Arguments for the `join` subcommand.
#[derive(clap::Args)]
pub struct JoinArgs {
    /// Path to the input point table (one point per line, whitespace- or
    /// comma-separated coordinates; `#` starts a comment).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of nearest neighbors per point.
    #[arg(short, long, default_value_t = 1)]
    pub k: usize,

    /// Objects per leaf page.
    #[arg(long = "page-size", default_value_t = 64)]
    pub page_size: usize,

    /// Exclude each point from its own neighbor list.
    #[arg(long)]
    pub exclude_self: bool,

    /// Path for the result listing (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
