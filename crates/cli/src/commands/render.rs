// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rn_core::{ConsolidatedRecord, Table};

use crate::cli::VersionArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render::render_release_notes;

const COL_JIRA_ID: &str = "JiraId";
const COL_ISSUE_TYPE: &str = "IssueType";
const COL_IN_JIRA: &str = "InJira";
const COL_IN_GIT: &str = "InGit";
const COL_JIRA_COMMENT: &str = "Jira Comment";
const COL_GIT_COMMENT: &str = "Git Comment";
const COL_TAKE: &str = "Take";
const COL_ACTUAL_NOTE: &str = "ActualReleaseNote";

/// Read the reviewed sheet back into consolidated records, keeping only rows
/// marked `Take = Yes`. The curated note replaces the proposed one.
fn read_reviewed(table: &Table) -> Vec<ConsolidatedRecord> {
    table
        .rows()
        .filter(|row| row.field(COL_TAKE) == "Yes")
        .map(|row| ConsolidatedRecord {
            issue_key: row.field(COL_JIRA_ID).to_string(),
            found_in_tracker: row.field(COL_IN_JIRA) == "Yes",
            found_in_log: row.field(COL_IN_GIT) == "Yes",
            tracker_comment: row.field(COL_JIRA_COMMENT).to_string(),
            issue_type: row.field(COL_ISSUE_TYPE).to_string(),
            log_comment: row.field(COL_GIT_COMMENT).to_string(),
            release_note: row.field(COL_ACTUAL_NOTE).to_string(),
        })
        .collect()
}

pub fn run(
    config: &Config,
    output_file: &Path,
    input: &Path,
    versions: &VersionArgs,
) -> Result<()> {
    let table = Table::read(input, config.review_delimiter())?;
    if !table.has_column(COL_JIRA_ID) {
        return Err(rn_core::Error::MissingColumn(COL_JIRA_ID).into());
    }
    let records = read_reviewed(&table);

    tracing::debug!(
        rows = table.len(),
        taken = records.len(),
        "filtered reviewed release notes"
    );

    let version = versions.version.as_deref().unwrap_or_default();
    let previous = versions.previous.as_deref().unwrap_or_default();

    let file = File::create(output_file)?;
    let mut writer = BufWriter::new(file);
    render_release_notes(&mut writer, config, version, previous, &records)?;

    println!(
        "Rendered {} release notes to {}",
        records.len(),
        output_file.display()
    );

    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
