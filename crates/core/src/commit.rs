// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit line parsing.
//!
//! A log line is conventionally `<revision> <issue-key> <free text>` but is
//! never guaranteed to conform. Parsing degrades instead of failing: a line
//! without a recognizable revision or key still produces a commit, keyed
//! [`UNKNOWN_KEY`], carrying whatever text could be salvaged as the comment.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Sentinel issue key for commits whose key could not be extracted.
pub const UNKNOWN_KEY: &str = "UNKNOWN";

// Pre-compiled regexes for log line decomposition, tried in priority order.
// These are compile-time constant patterns that are verified at test time.
// Using match with unreachable! since these patterns are hard-coded and known-valid.
static REVISION_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"[a-f0-9]{6,120}") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\s([A-Za-z0-9]+-[0-9]+)(.+)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static MALFORMED_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\s([A-Za-z0-9]+:[0-9]+)\s(.+)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// One commit decomposed from a log line.
///
/// `issue_key` is either [`UNKNOWN_KEY`] or of the form `PREFIX-123`.
/// Constructed once per line and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommit {
    /// Hexadecimal revision identifier; empty when none was found.
    pub revision: String,
    /// Extracted issue key, normalized to hyphen form.
    pub issue_key: String,
    /// Free-text comment, trimmed of leading `,:- ` characters.
    pub comment: String,
}

impl ParsedCommit {
    fn new(revision: &str, issue_key: &str, comment: &str) -> Self {
        ParsedCommit {
            revision: revision.to_string(),
            issue_key: issue_key.to_string(),
            comment: comment.to_string(),
        }
    }
}

/// Parse one raw log line into a [`ParsedCommit`].
///
/// Extraction runs as an ordered fallback chain:
///
/// 1. Find a hex revision token (6-120 chars). Without one, nothing else in
///    the line can be trusted: the whole line becomes the comment, verbatim.
/// 2. Match a well-formed `KEY-123` after whitespace; the rest of the line is
///    the comment. Only the first match counts - a second key-shaped token
///    later in the message stays in the comment text.
/// 3. Fall back to the common `KEY:123` typo, normalizing `:` to `-`.
/// 4. Otherwise the key is [`UNKNOWN_KEY`] and the remainder is the comment.
///
/// The well-formed pattern is tried against the whole remainder before the
/// malformed one. When a colon-malformed lead key is followed by an honest
/// hyphenated key later in the message, the hyphenated one wins; that
/// precedence is long-standing observed behavior and is kept as is.
pub fn parse_line(line: &str) -> ParsedCommit {
    let revision = match REVISION_RE.find(line) {
        Some(m) => m.as_str(),
        None => return ParsedCommit::new("", UNKNOWN_KEY, line),
    };

    // The revision is only stripped when it is actually the line's prefix;
    // a mid-line hex token still identifies the commit but removes nothing.
    let remainder = line.strip_prefix(revision).unwrap_or(line);

    if let Some(caps) = KEY_RE.captures(remainder) {
        let key = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let rest = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        return ParsedCommit::new(revision, key, trim_leading_punctuation(rest));
    }

    if let Some(caps) = MALFORMED_KEY_RE.captures(remainder) {
        let key = caps
            .get(1)
            .map(|m| m.as_str().replace(':', "-"))
            .unwrap_or_default();
        let rest = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        return ParsedCommit::new(revision, &key, trim_leading_punctuation(rest));
    }

    ParsedCommit::new(revision, UNKNOWN_KEY, trim_leading_punctuation(remainder))
}

/// Trim leading `,`, `:`, `-`, and space characters from a comment.
///
/// Corrects the common habit of writing `KEY: comment` or `KEY - comment`.
/// Idempotent: trimming twice equals trimming once.
pub fn trim_leading_punctuation(comment: &str) -> &str {
    comment.trim_start_matches([',', ':', '-', ' '])
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod tests;
