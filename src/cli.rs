use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Terminal project, task, and note manager.
/// Storage defaults to ~/.trellis/trellis.db or a path passed via --db.
#[derive(Parser)]
#[command(name = "trellis", version, about = "Project and task management TUI")]
pub struct Cli {
    /// Path to the SQLite database file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// With no subcommand, the interactive UI launches.
    #[command(subcommand)]
    pub command: Option<Commands>,
}
