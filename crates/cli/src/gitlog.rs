// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit log acquisition.
//!
//! The parser only needs lines; where they come from is this module's
//! problem. Either `git log` runs in a repository directory, or a previously
//! captured log is read from a file (the seam the spec tests drive).

use std::fs;
use std::path::Path;
use std::process::Command;

use rn_core::CommitLog;

use crate::error::{Error, Result};

/// Run `git log --oneline --no-merges --no-decorate <source>..<dest>` in
/// `repo` and parse the output. A non-zero git exit is fatal, with git's
/// stderr in the error.
pub fn run_git_log(repo: &Path, source: &str, dest: &str) -> Result<CommitLog> {
    let range = format!("{}..{}", source, dest);
    let args = ["log", "--oneline", "--no-merges", "--no-decorate"];

    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .arg(&range)
        .output()?;

    if !output.status.success() {
        return Err(Error::GitLog {
            repo: repo.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let command = format!("git {} {}", args.join(" "), range);
    tracing::debug!(lines = stdout.lines().count(), %range, "read git log");
    Ok(CommitLog::from_lines(stdout.lines(), &command))
}

/// Read log lines from a file captured earlier (one commit per line).
pub fn read_log_file(path: &Path) -> Result<CommitLog> {
    let text = fs::read_to_string(path)?;
    let command = format!("log file {}", path.display());
    Ok(CommitLog::from_lines(text.lines(), &command))
}

#[cfg(test)]
#[path = "gitlog_tests.rs"]
mod tests;
