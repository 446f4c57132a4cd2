//! # Trellis - terminal project manager
//!
//! A keyboard-driven terminal application for managing projects, nested
//! tasks, and notes, backed by a local SQLite database.
//!
//! ## Key Features
//!
//! - **Nested Tasks**: Subtasks to arbitrary depth, rendered as a tree
//! - **Notes Everywhere**: Free-form notes on projects and tasks, plus a
//!   description note per task
//! - **Five-Panel Layout**: Projects, tasks, and notes beside a details view
//! - **Local Storage**: A single SQLite file under `~/.trellis/`
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the UI
//! trellis
//!
//! # Dump everything as JSON
//! trellis export --output backup.json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod models;
pub mod store;
pub mod tui {
    pub mod colors;
    pub mod app;
    pub mod command;
    pub mod flatten;
    pub mod form;
    pub mod input;
    pub mod message;
    pub mod overlay;
    pub mod panels;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::Commands;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".trellis").join("trellis.db")
    });

    match cli.command {
        None | Some(Commands::Ui) => cmd::cmd_ui(&db_path).await,
        Some(Commands::Export { output }) => cmd::cmd_export(&db_path, output),
        Some(Commands::Completions { shell }) => cmd::cmd_completions(shell),
    }
}
