// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rn_core::{reconcile, TableWriter, TrackerExport};

use crate::cli::LogArgs;
use crate::config::Config;
use crate::error::Result;

use super::{load_log, write_commits_csv, yes_no};

/// Column order of the consolidated review CSV.
pub const REVIEW_COLUMNS: [&str; 7] = [
    "JiraId",
    "IssueType",
    "InJira",
    "InGit",
    "Jira Comment",
    "Git Comment",
    "ProposedReleaseNote",
];

pub fn run(
    config: &Config,
    review_file: &Path,
    export: &Path,
    log_args: &LogArgs,
    commits: Option<&Path>,
) -> Result<()> {
    let tracker = TrackerExport::read(export, config.export_delimiter())?;
    let log = load_log(log_args)?;
    let merged = reconcile(&log, &tracker);

    tracing::debug!(
        tracker = tracker.len(),
        commits = log.len(),
        consolidated = merged.len(),
        "reconciled commit log against export"
    );

    let file = File::create(review_file)?;
    let mut writer = TableWriter::new(BufWriter::new(file), ',');
    writer.record(&REVIEW_COLUMNS)?;
    for record in merged.iter() {
        writer.record(&[
            record.issue_key.as_str(),
            record.issue_type.as_str(),
            yes_no(record.found_in_tracker),
            yes_no(record.found_in_log),
            record.tracker_comment.as_str(),
            record.log_comment.as_str(),
            record.release_note.as_str(),
        ])?;
    }
    writer.flush()?;

    if let Some(path) = commits {
        write_commits_csv(&log, path)?;
    }

    let in_both = merged
        .iter()
        .filter(|r| r.found_in_tracker && r.found_in_log)
        .count();
    println!(
        "Reconciled {} issues ({} in both sources) to {}",
        merged.len(),
        in_both,
        review_file.display()
    );

    Ok(())
}
