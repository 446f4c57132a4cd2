//! Command implementations for the CLI interface.
//!
//! The binary is TUI-first: everything except `export` and `completions`
//! ends up in the interactive UI.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use clap_complete::{generate, Shell};
use serde::Serialize;

use crate::models::{Note, Project, Task};
use crate::store::{Store, StoreError};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive UI interface.
    Ui,

    /// Export every project, task, and note as JSON.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub async fn cmd_ui(db_path: &Path) {
    if let Err(e) = run_tui(db_path).await {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Full contents of the database, archived projects included.
#[derive(Serialize)]
struct Snapshot {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    notes: Vec<Note>,
}

fn load_snapshot(db_path: &Path) -> Result<Snapshot, StoreError> {
    let store = Store::open(db_path)?;
    Ok(Snapshot {
        projects: store.all_projects()?,
        tasks: store.all_tasks()?,
        notes: store.all_notes()?,
    })
}

/// Dump the database as pretty-printed JSON to stdout or a file.
pub fn cmd_export(db_path: &Path, output: Option<PathBuf>) {
    let snapshot = match load_snapshot(db_path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Export error: {e}");
            std::process::exit(1);
        }
    };
    let json = match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Export error: {e}");
            std::process::exit(1);
        }
    };
    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!("Exported to {}", path.display());
        }
        None => println!("{json}"),
    }
}

/// Print shell completion scripts for supported shells.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
