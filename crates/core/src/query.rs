// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue key classification and bulk-query construction.
//!
//! Keys harvested from a commit log either belong in the tracker's bulk
//! query, belong to a blacklisted project (tracked elsewhere), or are the
//! `UNKNOWN` sentinel family. The query string format is consumed verbatim
//! by the tracker's search box and must not grow spaces or trailing commas.

use serde::Serialize;

use crate::commit::UNKNOWN_KEY;

/// Where a single issue key belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyClass {
    /// Goes into the bulk query.
    Query,
    /// Matches a blacklisted project prefix; excluded but worth reporting.
    Blacklisted,
    /// The `UNKNOWN` sentinel (or anything starting with it); never queried.
    Unknown,
}

/// Classify one key against a blacklist of project prefixes.
///
/// Comparison is case-insensitive; the first matching prefix wins.
pub fn classify(key: &str, blacklist: &[String]) -> KeyClass {
    let upper = key.to_uppercase();
    if upper.starts_with(UNKNOWN_KEY) {
        return KeyClass::Unknown;
    }
    for prefix in blacklist {
        if upper.starts_with(&prefix.to_uppercase()) {
            return KeyClass::Blacklisted;
        }
    }
    KeyClass::Query
}

/// The outcome of partitioning a key sequence for query building.
///
/// Both lists are deduplicated and keep first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryKeys {
    /// Keys that go into the bulk query.
    pub keys: Vec<String>,
    /// Keys excluded by the blacklist, kept for diagnostics.
    pub blacklisted: Vec<String>,
}

impl QueryKeys {
    /// Partition keys into query and blacklisted sets.
    pub fn partition<'a, I>(keys: I, blacklist: &[String]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = QueryKeys::default();
        for key in keys {
            match classify(key, blacklist) {
                KeyClass::Query => {
                    if !out.keys.iter().any(|k| k == key) {
                        out.keys.push(key.to_string());
                    }
                }
                KeyClass::Blacklisted => {
                    if !out.blacklisted.iter().any(|k| k == key) {
                        out.blacklisted.push(key.to_string());
                    }
                }
                KeyClass::Unknown => {}
            }
        }
        out
    }

    /// Render the bulk-query expression: `issueKey in (k1,k2,...,kn)`.
    ///
    /// No spaces after commas, no trailing comma; the empty set renders
    /// `issueKey in ()`. This exact format is load-bearing downstream.
    pub fn query(&self) -> String {
        format!("issueKey in ({})", self.keys.join(","))
    }

    /// Render the full search URL for the tracker: `<base><query>`.
    pub fn query_url(&self, search_url: &str) -> String {
        format!("{}{}", search_url, self.query())
    }
}

/// Build the bulk-query expression for a key sequence in one step.
pub fn build_query<'a, I>(keys: I, blacklist: &[String]) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    QueryKeys::partition(keys, blacklist).query()
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
