// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `ren issues` command.

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
abcd002 ABC-2 fix the crash\n\
abcd003 ABC-1 login follow-up\n\
abcd004 AZMV-9 ported dock fix\n\
not a commit line\n";

fn write_history(temp: &TempDir) {
    std::fs::write(temp.path().join("history.log"), HISTORY).unwrap();
}

#[test]
fn writes_query_url_file() {
    let temp = TempDir::new().unwrap();
    write_history(&temp);

    ren()
        .args(["issues", "query.txt", "-f", "history.log"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote query for 2 issues"));

    let query = std::fs::read_to_string(temp.path().join("query.txt")).unwrap();
    assert_eq!(
        query,
        "https://jira.mot-solutions.com/issues/?jql=issueKey in (ABC-1,ABC-2)\n"
    );
}

#[test]
fn blacklisted_and_unknown_keys_are_excluded() {
    let temp = TempDir::new().unwrap();
    write_history(&temp);

    ren()
        .args(["issues", "query.txt", "-f", "history.log"])
        .current_dir(temp.path())
        .assert()
        .success();

    let query = std::fs::read_to_string(temp.path().join("query.txt")).unwrap();
    assert!(!query.contains("AZMV-9"));
    assert!(!query.contains("UNKNOWN"));
}

#[test]
fn empty_log_renders_empty_query() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("history.log"), "").unwrap();

    ren()
        .args(["issues", "query.txt", "-f", "history.log"])
        .current_dir(temp.path())
        .assert()
        .success();

    let query = std::fs::read_to_string(temp.path().join("query.txt")).unwrap();
    assert!(query.ends_with("issueKey in ()\n"));
}

#[test]
fn commits_dump_has_all_lines() {
    let temp = TempDir::new().unwrap();
    write_history(&temp);

    ren()
        .args([
            "issues",
            "query.txt",
            "-f",
            "history.log",
            "--commits",
            "commits.csv",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    let commits = std::fs::read_to_string(temp.path().join("commits.csv")).unwrap();
    let lines: Vec<&str> = commits.lines().collect();
    assert_eq!(lines[0], "Hash,IssueKey,Comment");
    assert_eq!(lines.len(), 6); // header + 5 commits, unparsable one included
    assert_eq!(lines[5], ",UNKNOWN,not a commit line");
}

#[test]
fn json_output_reports_partition() {
    let temp = TempDir::new().unwrap();
    write_history(&temp);

    let output = ren()
        .args(["issues", "query.txt", "-f", "history.log", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["query"], "issueKey in (ABC-1,ABC-2)");
    assert_eq!(json["keys"].as_array().unwrap().len(), 2);
    assert_eq!(json["blacklisted"][0], "AZMV-9");
}

#[test]
fn custom_config_overrides_blacklist_and_urls() {
    let temp = TempDir::new().unwrap();
    write_history(&temp);
    std::fs::write(
        temp.path().join("ren.toml"),
        "blacklist = []\n\n[tracker]\nsearch_url = \"https://tracker.example.com/?q=\"\n",
    )
    .unwrap();

    ren()
        .args(["issues", "query.txt", "-f", "history.log"])
        .current_dir(temp.path())
        .assert()
        .success();

    let query = std::fs::read_to_string(temp.path().join("query.txt")).unwrap();
    assert_eq!(
        query,
        "https://tracker.example.com/?q=issueKey in (ABC-1,ABC-2,AZMV-9)\n"
    );
}

#[test]
fn missing_log_file_fails() {
    let temp = TempDir::new().unwrap();

    ren()
        .args(["issues", "query.txt", "-f", "nope.log"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn no_log_source_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    ren()
        .args(["issues", "query.txt"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--log-file"));
}

#[test]
fn repo_without_refs_is_rejected_by_clap() {
    let temp = TempDir::new().unwrap();

    ren()
        .args(["issues", "query.txt", "--repo", "."])
        .current_dir(temp.path())
        .assert()
        .failure();
}
