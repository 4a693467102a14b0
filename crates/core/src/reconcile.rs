// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of commit history against a tracker export.
//!
//! Two passes over an explicitly ordered map. The tracker pass seeds a
//! record per exported issue; the log pass then builds a fresh record for
//! every key seen in commits and *replaces* the seeded one, copying the
//! tracker-sourced fields forward. Replacement rather than in-place merge is
//! the contract: the log pass owns the final record shape, and dropping the
//! copy-forward would silently lose tracker data for any key touched in the
//! log. Emission order is tracker keys first (export order), then log-only
//! keys (first-appearance order).

use std::collections::HashMap;

use serde::Serialize;

use crate::issue::TrackerExport;
use crate::log::CommitLog;

/// The merged view of one issue key across both sources.
///
/// A record exists only if the key appeared in at least one source, so
/// `found_in_tracker || found_in_log` always holds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsolidatedRecord {
    pub issue_key: String,
    pub found_in_tracker: bool,
    pub found_in_log: bool,
    /// Tracker-side summary text.
    pub tracker_comment: String,
    /// Tracker-side issue type; empty for log-only keys.
    pub issue_type: String,
    /// All commit comments under the key, newline-joined in log order.
    pub log_comment: String,
    /// Tracker-side proposed release note.
    pub release_note: String,
}

/// Consolidated records with deterministic emission order.
#[derive(Debug, Clone, Default)]
pub struct Consolidated {
    keys: Vec<String>,
    records: HashMap<String, ConsolidatedRecord>,
}

impl Consolidated {
    /// Issue keys in emission order: tracker-origin first, then log-only.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&ConsolidatedRecord> {
        self.records.get(key)
    }

    /// Records in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &ConsolidatedRecord> {
        self.keys.iter().filter_map(|k| self.records.get(k))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    fn insert(&mut self, record: ConsolidatedRecord) {
        if !self.records.contains_key(&record.issue_key) {
            self.keys.push(record.issue_key.clone());
        }
        self.records.insert(record.issue_key.clone(), record);
    }
}

/// Merge aggregated commits against a tracker export.
pub fn reconcile(commits: &CommitLog, tracker: &TrackerExport) -> Consolidated {
    let mut out = Consolidated::default();

    // Tracker pass: seed a record per exported issue, log side unknown yet.
    for issue in tracker.iter() {
        out.insert(ConsolidatedRecord {
            issue_key: issue.issue_key.clone(),
            found_in_tracker: true,
            found_in_log: false,
            tracker_comment: issue.summary.clone(),
            issue_type: issue.issue_type.clone(),
            log_comment: String::new(),
            release_note: issue.proposed_note.clone(),
        });
    }

    // Log pass: build the final record for every key seen in commits. For
    // keys also in the tracker this replaces the seeded record, carrying the
    // tracker fields across.
    for key in commits.keys() {
        let log_comment = commits
            .for_key(key)
            .iter()
            .map(|c| c.comment.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let mut record = ConsolidatedRecord {
            issue_key: key.to_string(),
            found_in_tracker: false,
            found_in_log: true,
            tracker_comment: String::new(),
            issue_type: String::new(),
            log_comment,
            release_note: String::new(),
        };
        if let Some(issue) = tracker.get(key) {
            record.found_in_tracker = true;
            record.tracker_comment = issue.summary.clone();
            record.issue_type = issue.issue_type.clone();
            record.release_note = issue.proposed_note.clone();
        }
        out.insert(record);
    }

    out
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
