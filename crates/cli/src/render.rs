// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML report rendering.
//!
//! Two report flavors share one document shell: customer release notes
//! (grouped by issue category, curated text only) and engineering notes
//! (every commit, the raw log, and the bulk-query link). Issue keys become
//! hyperlinks routed by project prefix; `UNKNOWN` keys stay plain text.

use std::io::Write;

use chrono::Utc;

use rn_core::{Category, CommitLog, ConsolidatedRecord};

use crate::config::Config;
use crate::error::Result;

const STYLE: &str = "\
                div.releaseNotes dt {
                    font-family: sans-serif;
                    font-weight: bold;
                }
                div.releaseNotes dd {
                    padding: 0px 0px 10px 0px;
                }
                div.releaseNotes table {
                    border-collapse: collapse;
                }
                div.releaseNotes table.issues tr:nth-child(even) {
                    background-color: #f2f2f2;
                }
                div.releaseNotes td, div.releaseNotes th {
                    border: 4px solid transparent;
                    padding: 0px;
                    text-align: left;
                }
                div.releaseNotes .issueid {
                    width: 140px
                }";

/// Escape text content for HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render an issue key as a hyperlink.
///
/// `UNKNOWN`-family keys are not linkable and render as plain text.
/// Alternate-tracker prefixes link to the work-item URL with the key's
/// numeric suffix; a malformed alternate key without a `-` also stays plain.
/// Everything else is assumed to live in the main tracker.
pub fn issue_key_hyperlink(key: &str, config: &Config) -> String {
    if key.starts_with(rn_core::UNKNOWN_KEY) {
        return escape(key);
    }

    let upper = key.to_uppercase();
    let is_alternate = config
        .alternate_prefixes
        .iter()
        .any(|p| upper.starts_with(&p.to_uppercase()));

    if is_alternate {
        match key.split_once('-') {
            Some((_, id)) => {
                let url = format!("{}{}", config.tracker.alternate_url, id);
                format!("<a href=\"{}\">{}</a>", url, escape(key))
            }
            None => escape(key),
        }
    } else {
        let url = format!("{}{}", config.tracker.browse_url, key);
        format!("<a href=\"{}\">{}</a>", url, escape(key))
    }
}

/// Consolidated records split by rendering category.
#[derive(Default)]
struct Grouped<'a> {
    epics: Vec<&'a ConsolidatedRecord>,
    stories: Vec<&'a ConsolidatedRecord>,
    defects: Vec<&'a ConsolidatedRecord>,
    support: Vec<&'a ConsolidatedRecord>,
    other: Vec<&'a ConsolidatedRecord>,
}

fn group(records: &[ConsolidatedRecord]) -> Grouped<'_> {
    let mut grouped = Grouped::default();
    for record in records {
        match Category::parse(&record.issue_type) {
            Category::Epic => grouped.epics.push(record),
            Category::Story => grouped.stories.push(record),
            Category::Defect => grouped.defects.push(record),
            Category::Support => grouped.support.push(record),
            // Spikes, sub-tasks, and dependencies are internal work; they
            // land in the trailing catch-all table with everything else.
            _ => grouped.other.push(record),
        }
    }
    grouped
}

/// Render the customer release notes.
pub fn render_release_notes<W: Write>(
    out: &mut W,
    config: &Config,
    version: &str,
    previous: &str,
    records: &[ConsolidatedRecord],
) -> Result<()> {
    let grouped = group(records);

    render_header(out, version)?;
    render_body_open(out, version, previous, Some(&config.products))?;

    for epic in &grouped.epics {
        writeln!(
            out,
            "                <dt>New Feature: {}</dt>",
            escape(&epic.tracker_comment)
        )?;
        writeln!(
            out,
            "                <dd>\n                    {}\n                </dd>",
            escape(&epic.release_note)
        )?;
    }

    render_note_table(out, "Minor enhancements", &grouped.stories)?;
    render_note_table(out, "Defects resolved", &grouped.defects)?;
    render_note_table(out, "Customer support issues resolved", &grouped.support)?;
    render_note_table(out, "Other changes", &grouped.other)?;

    writeln!(out, "                <hr>")?;
    render_body_close(out)?;
    Ok(())
}

/// Render the engineering notes: every commit, the raw log, the query link.
pub fn render_engineering_notes<W: Write>(
    out: &mut W,
    config: &Config,
    version: &str,
    previous: &str,
    log: &CommitLog,
    query_url: &str,
) -> Result<()> {
    render_header(out, version)?;
    render_body_open(out, version, previous, None)?;

    writeln!(out, "                <dt>Issues modified in this release</dt>")?;
    render_table_open(out)?;
    for commit in log.commits() {
        writeln!(out, "                        <tr>")?;
        writeln!(
            out,
            "                            <td>{}</td>",
            issue_key_hyperlink(&commit.issue_key, config)
        )?;
        writeln!(
            out,
            "                            <td>{}</td>",
            escape(&commit.comment)
        )?;
        writeln!(out, "                        </tr>")?;
    }
    render_table_close(out)?;

    writeln!(out, "                <hr>")?;
    writeln!(out, "                <dt>Git Log</dt>")?;
    writeln!(out, "                <br>")?;
    writeln!(out, "                {}", escape(log.command()))?;
    writeln!(out, "                <pre>")?;
    for line in log.lines() {
        writeln!(out, "{}", escape(line))?;
    }
    writeln!(out, "                </pre>")?;

    writeln!(out, "                <hr>")?;
    writeln!(out, "                <dt>Tracker</dt>")?;
    writeln!(out, "                <br>")?;
    writeln!(
        out,
        "                Display the changed issues in the <a href=\"{}\">tracker</a>",
        query_url
    )?;

    render_body_close(out)?;
    Ok(())
}

fn render_header<W: Write>(out: &mut W, version: &str) -> Result<()> {
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "    <head>")?;
    writeln!(out, "        <meta charset=\"utf-8\"/>")?;
    writeln!(out, "        <style>")?;
    writeln!(out, "{}", STYLE)?;
    writeln!(out, "        </style>")?;
    writeln!(out, "        <title>Release Notes - {}</title>", escape(version))?;
    writeln!(out, "    </head>")?;
    Ok(())
}

fn render_body_open<W: Write>(
    out: &mut W,
    version: &str,
    previous: &str,
    products: Option<&[String]>,
) -> Result<()> {
    writeln!(out, "    <body>")?;
    writeln!(out, "        <!-- generated {} -->", Utc::now().to_rfc3339())?;
    writeln!(out, "        <div class=\"releaseNotes\">")?;
    writeln!(out, "            <h1>Release notes - {}</h1>", escape(version))?;
    writeln!(out, "            <h2>Changes</h2>")?;
    writeln!(out, "            <hr>")?;
    writeln!(
        out,
        "            <h3>Software updated in {}</h3>",
        escape(version)
    )?;
    if let Some(products) = products {
        if !products.is_empty() {
            writeln!(out, "            <ul>")?;
            for product in products {
                writeln!(out, "                <li>{}</li>", escape(product))?;
            }
            writeln!(out, "            </ul>")?;
        }
    }
    writeln!(
        out,
        "            <h3>Changes since {}</h3>",
        escape(previous)
    )?;
    writeln!(out, "            <dl>")?;
    Ok(())
}

fn render_body_close<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "            </dl>")?;
    writeln!(out, "        </div>")?;
    writeln!(out, "    </body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

fn render_table_open<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "                <dd>")?;
    writeln!(out, "                    <table class=\"issues\">")?;
    writeln!(out, "                        <colgroup>")?;
    writeln!(out, "                            <col class=\"issueid\">")?;
    writeln!(out, "                            <col>")?;
    writeln!(out, "                        </colgroup>")?;
    writeln!(out, "                        <tr>")?;
    writeln!(out, "                            <th>Issue Id</th>")?;
    writeln!(out, "                            <th>Summary</th>")?;
    writeln!(out, "                        </tr>")?;
    Ok(())
}

fn render_table_close<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "                    </table>")?;
    writeln!(out, "                </dd>")?;
    Ok(())
}

/// A `<dt>`-headed table of issue key + curated note, one row per record.
/// Zero records still render a well-formed (empty) table.
fn render_note_table<W: Write>(
    out: &mut W,
    header: &str,
    records: &[&ConsolidatedRecord],
) -> Result<()> {
    writeln!(out, "                <dt>{}</dt>", escape(header))?;
    render_table_open(out)?;
    for record in records {
        writeln!(out, "                        <tr>")?;
        writeln!(
            out,
            "                            <td>{}</td>",
            escape(&record.issue_key)
        )?;
        writeln!(
            out,
            "                            <td>{}</td>",
            escape(&record.release_note)
        )?;
        writeln!(out, "                        </tr>")?;
    }
    render_table_close(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
