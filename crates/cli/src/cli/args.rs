// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that consume a commit log or label report versions.

use clap::Args;
use std::path::PathBuf;

/// Where the commit log comes from: a captured file, or git itself.
#[derive(Args, Clone, Debug, Default)]
pub struct LogArgs {
    /// Read log lines from a file instead of running git
    #[arg(
        long,
        short = 'f',
        value_name = "FILE",
        conflicts_with_all = ["repo", "source", "dest"]
    )]
    pub log_file: Option<PathBuf>,

    /// Git repository directory to read history from
    #[arg(long, value_name = "DIR", requires = "source")]
    pub repo: Option<PathBuf>,

    /// Start ref (tag) of the history range
    #[arg(long, short, requires = "dest")]
    pub source: Option<String>,

    /// End ref (tag) of the history range
    #[arg(long, short, requires = "repo")]
    pub dest: Option<String>,
}

/// Version labels for report headings.
#[derive(Args, Clone, Debug, Default)]
pub struct VersionArgs {
    /// Version being released (defaults to --dest when available)
    #[arg(long)]
    pub version: Option<String>,

    /// Previously released version (defaults to --source when available)
    #[arg(long)]
    pub previous: Option<String>,
}
