// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `ren engineering` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ren() -> Command {
    cargo_bin_cmd!("ren")
}

const HISTORY: &str = "\
abcd001 ABC-1 wire up login\n\
abcd002 AZMV-9 ported dock fix\n\
unparsable entry\n";

fn render_engineering(temp: &TempDir, extra: &[&str]) -> String {
    std::fs::write(temp.path().join("history.log"), HISTORY).unwrap();
    let mut args = vec!["engineering", "eng.html", "-f", "history.log"];
    args.extend_from_slice(extra);
    ren()
        .args(&args)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered engineering notes for 3 commits"));
    std::fs::read_to_string(temp.path().join("eng.html")).unwrap()
}

#[test]
fn every_commit_gets_a_table_row() {
    let temp = TempDir::new().unwrap();
    let html = render_engineering(&temp, &[]);

    assert!(html.contains("wire up login"));
    assert!(html.contains("ported dock fix"));
    assert!(html.contains("unparsable entry"));
}

#[test]
fn keys_are_hyperlinked_by_prefix() {
    let temp = TempDir::new().unwrap();
    let html = render_engineering(&temp, &[]);

    assert!(html
        .contains("<a href=\"https://jira.mot-solutions.com/browse/ABC-1\">ABC-1</a>"));
    assert!(html.contains(
        "<a href=\"https://dev.azure.com/MobileVideo/VideoManager/_workitems/edit/9\">AZMV-9</a>"
    ));
    assert!(html.contains("<td>UNKNOWN</td>"));
}

#[test]
fn raw_log_is_rendered_in_pre_block() {
    let temp = TempDir::new().unwrap();
    let html = render_engineering(&temp, &[]);

    assert!(html.contains("<pre>"));
    assert!(html.contains("abcd001 ABC-1 wire up login"));
    assert!(html.contains("log file history.log"));
}

#[test]
fn query_link_excludes_blacklisted_keys() {
    let temp = TempDir::new().unwrap();
    let html = render_engineering(&temp, &[]);

    assert!(html.contains("jql=issueKey in (ABC-1)"));
    assert!(!html.contains("issueKey in (ABC-1,AZMV-9)"));
}

#[test]
fn version_labels_come_from_flags() {
    let temp = TempDir::new().unwrap();
    let html = render_engineering(&temp, &["--version", "v2.0", "--previous", "v1.0"]);

    assert!(html.contains("<title>Release Notes - v2.0</title>"));
    assert!(html.contains("<h3>Changes since v1.0</h3>"));
}

#[test]
fn missing_log_source_fails() {
    let temp = TempDir::new().unwrap();

    ren()
        .args(["engineering", "eng.html"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
