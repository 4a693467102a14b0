// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `ren render` command.

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

const SHEET: &str = "\
JiraId\tIssueType\tInJira\tInGit\tJira Comment\tGit Comment\tProposedReleaseNote\tTake\tActualReleaseNote\n\
ABC-1\tEpic\tYes\tNo\tPayments\t\tPayments proposed\tYes\tPayments are here\n\
ABC-2\tStory\tYes\tYes\tLogin\twire up login\tAdds login\tYes\tYou can now log in\n\
ABC-3\tDefect\tYes\tYes\tCrash\tfix crash\tFixes crash\tNo\tNot approved yet\n\
ABC-4\tSupport\tYes\tYes\tTicket\tfix ticket\tFixes ticket\tYes\tCustomer issue resolved\n";

fn render_sheet(temp: &TempDir) -> String {
    std::fs::write(temp.path().join("reviewed.tsv"), SHEET).unwrap();
    ren()
        .args([
            "render",
            "notes.html",
            "--input",
            "reviewed.tsv",
            "--version",
            "v2.0",
            "--previous",
            "v1.0",
        ])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 3 release notes"));
    std::fs::read_to_string(temp.path().join("notes.html")).unwrap()
}

#[test]
fn renders_sections_by_category() {
    let temp = TempDir::new().unwrap();
    let html = render_sheet(&temp);

    assert!(html.contains("<title>Release Notes - v2.0</title>"));
    assert!(html.contains("<h3>Changes since v1.0</h3>"));
    assert!(html.contains("<dt>New Feature: Payments</dt>"));
    assert!(html.contains("Payments are here"));
    assert!(html.contains("You can now log in"));
    assert!(html.contains("Customer issue resolved"));
}

#[test]
fn untaken_rows_are_not_rendered() {
    let temp = TempDir::new().unwrap();
    let html = render_sheet(&temp);
    assert!(!html.contains("Not approved yet"));
    assert!(!html.contains("ABC-3"));
}

#[test]
fn curated_note_is_used_not_the_proposed_one() {
    let temp = TempDir::new().unwrap();
    let html = render_sheet(&temp);
    assert!(!html.contains("Adds login"));
    assert!(html.contains("You can now log in"));
}

#[test]
fn header_only_sheet_renders_well_formed_empty_report() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("reviewed.tsv"),
        "JiraId\tIssueType\tTake\tActualReleaseNote\n",
    )
    .unwrap();

    ren()
        .args(["render", "notes.html", "--input", "reviewed.tsv"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 0 release notes"));

    let html = std::fs::read_to_string(temp.path().join("notes.html")).unwrap();
    assert!(html.contains("<dt>Minor enhancements</dt>"));
    assert!(html.contains("</html>"));
}

#[test]
fn sheet_without_key_column_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("reviewed.tsv"), "IssueType\tTake\nStory\tYes\n").unwrap();

    ren()
        .args(["render", "notes.html", "--input", "reviewed.tsv"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JiraId"));
}

#[test]
fn missing_input_fails() {
    let temp = TempDir::new().unwrap();

    ren()
        .args(["render", "notes.html", "--input", "nope.tsv"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
