// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod engineering;
pub mod issues;
pub mod render;
pub mod review;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rn_core::{CommitLog, TableWriter};

use crate::cli::LogArgs;
use crate::error::{Error, Result};
use crate::gitlog;

/// Resolve a commit log from the shared log arguments.
pub fn load_log(args: &LogArgs) -> Result<CommitLog> {
    if let Some(path) = &args.log_file {
        return gitlog::read_log_file(path);
    }
    match (&args.repo, &args.source, &args.dest) {
        (Some(repo), Some(source), Some(dest)) => gitlog::run_git_log(repo, source, dest),
        _ => Err(Error::NoLogSource),
    }
}

/// Write every parsed commit as `Hash,IssueKey,Comment` CSV, in log order.
pub fn write_commits_csv(log: &CommitLog, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = TableWriter::new(BufWriter::new(file), ',');
    writer.record(&["Hash", "IssueKey", "Comment"])?;
    for commit in log.commits() {
        writer.record(&[
            commit.revision.as_str(),
            commit.issue_key.as_str(),
            commit.comment.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a bool as the `Yes`/`No` convention of the review sheets.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
