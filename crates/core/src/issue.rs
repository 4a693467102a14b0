// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue-tracker export records.
//!
//! An export is a delimited table whose rows describe tracker issues. Field
//! access is permissive: any column missing from a partial export reads as
//! the empty string. Only the key column itself is required, since records
//! are useless without it.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::table::{Row, Table};

const COL_ISSUE_TYPE: &str = "Issue Type";
const COL_ISSUE_KEY: &str = "Issue key";
const COL_ISSUE_ID: &str = "Issue id";
const COL_PARENT_ID: &str = "Parent id";
const COL_SUMMARY: &str = "Summary";
const COL_RESOLUTION: &str = "Resolution";
const COL_RESOLVED: &str = "Resolved";
const COL_CLOSED_DATE: &str = "Custom field (Closed Date)";
const COL_CUSTOM_ID: &str = "Custom field (ID)";
const COL_ASSIGNEE: &str = "Assignee";
const COL_REPORTER: &str = "Reporter";
const COL_PRIORITY: &str = "Priority";
const COL_CREATED: &str = "Created";
const COL_STATUS: &str = "Status";
const COL_FIX_VERSION: &str = "Fix Version/s";
const COL_PROPOSED_NOTE: &str = "Custom field (Proposed Release Notes)";

/// One row of a tracker export, with fields resolved by column name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueRecord {
    pub issue_type: String,
    pub issue_key: String,
    pub issue_id: String,
    pub parent_id: String,
    pub summary: String,
    pub resolution: String,
    pub resolved: String,
    pub closed_date: String,
    pub custom_id: String,
    pub assignee: String,
    pub reporter: String,
    pub priority: String,
    pub created: String,
    pub status: String,
    pub fix_version: String,
    pub proposed_note: String,
}

impl IssueRecord {
    /// Populate a record from a table row. Absent columns become `""`.
    pub fn from_row(row: &Row<'_>) -> Self {
        IssueRecord {
            issue_type: row.field(COL_ISSUE_TYPE).to_string(),
            issue_key: row.field(COL_ISSUE_KEY).to_string(),
            issue_id: row.field(COL_ISSUE_ID).to_string(),
            parent_id: row.field(COL_PARENT_ID).to_string(),
            summary: row.field(COL_SUMMARY).to_string(),
            resolution: row.field(COL_RESOLUTION).to_string(),
            resolved: row.field(COL_RESOLVED).to_string(),
            closed_date: row.field(COL_CLOSED_DATE).to_string(),
            custom_id: row.field(COL_CUSTOM_ID).to_string(),
            assignee: row.field(COL_ASSIGNEE).to_string(),
            reporter: row.field(COL_REPORTER).to_string(),
            priority: row.field(COL_PRIORITY).to_string(),
            created: row.field(COL_CREATED).to_string(),
            status: row.field(COL_STATUS).to_string(),
            fix_version: row.field(COL_FIX_VERSION).to_string(),
            proposed_note: row.field(COL_PROPOSED_NOTE).to_string(),
        }
    }
}

/// A tracker export keyed by issue key, preserving row order.
///
/// Duplicate keys keep their first position but the later row's content
/// wins. Rows with an empty key are dropped (a record without a key cannot
/// be reconciled against anything).
#[derive(Debug, Clone, Default)]
pub struct TrackerExport {
    keys: Vec<String>,
    records: HashMap<String, IssueRecord>,
}

impl TrackerExport {
    /// Build from a parsed table. The `Issue key` column must exist.
    pub fn from_table(table: &Table) -> Result<Self> {
        if !table.has_column(COL_ISSUE_KEY) {
            return Err(Error::MissingColumn(COL_ISSUE_KEY));
        }
        let mut export = TrackerExport::default();
        for row in table.rows() {
            let record = IssueRecord::from_row(&row);
            if record.issue_key.is_empty() {
                continue;
            }
            if !export.records.contains_key(&record.issue_key) {
                export.keys.push(record.issue_key.clone());
            }
            export.records.insert(record.issue_key.clone(), record);
        }
        Ok(export)
    }

    /// Read an export file with the given delimiter.
    pub fn read(path: &Path, delimiter: char) -> Result<Self> {
        TrackerExport::from_table(&Table::read(path, delimiter)?)
    }

    /// Issue keys in export row order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&IssueRecord> {
        self.records.get(key)
    }

    /// Records in export row order.
    pub fn iter(&self) -> impl Iterator<Item = &IssueRecord> {
        self.keys.iter().filter_map(|k| self.records.get(k))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Rendering category derived from a tracker issue-type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Epic,
    Story,
    Defect,
    Support,
    Spike,
    SubTask,
    Dependency,
    Other,
}

impl Category {
    /// Map an issue-type string to its category; unrecognized types are
    /// [`Category::Other`]. Comparison ignores case.
    pub fn parse(issue_type: &str) -> Category {
        match issue_type.to_lowercase().as_str() {
            "epic" => Category::Epic,
            "story" => Category::Story,
            "defect" => Category::Defect,
            "support" => Category::Support,
            "spike" => Category::Spike,
            "sub-task" => Category::SubTask,
            "dependency" => Category::Dependency,
            _ => Category::Other,
        }
    }

    /// Returns the string representation used in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Epic => "Epic",
            Category::Story => "Story",
            Category::Defect => "Defect",
            Category::Support => "Support",
            Category::Spike => "Spike",
            Category::SubTask => "Sub-task",
            Category::Dependency => "Dependency",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
