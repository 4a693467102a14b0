// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rnrs - release-note generation library behind the `ren` CLI.
//!
//! Reconciles a git commit log against an issue-tracker CSV export and
//! renders the results as review artifacts and HTML reports.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - the clap command surface
//! - [`Config`] - site configuration loaded from `ren.toml`
//! - [`rn_core`] - the parsing and reconciliation engine
//! - [`Error`] - error types for all operations
//!
//! # Pipeline
//!
//! ```rust,ignore
//! use rnrs::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(cli)?;
//! ```

mod cli;
mod commands;
mod gitlog;
mod render;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, LogArgs, OutputFormat, VersionArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Issues {
            query_file,
            log,
            commits,
            output,
        } => commands::issues::run(&config, &query_file, &log, commits.as_deref(), output),
        Command::Review {
            review_file,
            export,
            log,
            commits,
        } => commands::review::run(&config, &review_file, &export, &log, commits.as_deref()),
        Command::Render {
            output_file,
            input,
            versions,
        } => commands::render::run(&config, &output_file, &input, &versions),
        Command::Engineering {
            output_file,
            log,
            versions,
        } => commands::engineering::run(&config, &output_file, &log, &versions),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ren", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Initialize stderr logging from `RUST_LOG` (defaulting to warnings only).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
