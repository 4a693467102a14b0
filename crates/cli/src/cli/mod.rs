// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

mod args;

pub use args::{LogArgs, VersionArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Release Notes:
  issues       Write the bulk-query URL for issues changed between two refs
  review       Reconcile the commit log against a tracker export for review
  render       Render a reviewed release-note sheet to HTML
  engineering  Render engineering notes (commit table, log, query link) to HTML

Setup:
  completion   Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  ren issues query.txt --repo . -s v1.0 -d v2.0      Bulk-query URL for a release
  ren review review.csv --export jira.csv \\
      --repo . -s v1.0 -d v2.0                       Consolidated CSV for review
  ren render notes.html --input reviewed.tsv \\
      --version v2.0 --previous v1.0                 Customer release notes
  ren engineering eng.html --repo . -s v1.0 -d v2.0  Engineering notes";

#[derive(Parser)]
#[command(name = "ren")]
#[command(about = "Generate release notes by reconciling git history with an issue tracker")]
#[command(
    long_about = "Generate release notes by reconciling git history with an issue tracker.\n\n\
    Parses commit messages of the form '<revision> <issue-key> <comment>' between two\n\
    refs, cross-references the keys against a tracker CSV export, and renders review\n\
    artifacts and HTML reports."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Path to a ren.toml configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the tracker bulk-query URL for issues changed between two refs
    #[command(after_help = "Examples:\n  \
        ren issues query.txt --repo . -s v1.0 -d v2.0    Query URL from git history\n  \
        ren issues query.txt -f history.log              Query URL from a captured log\n  \
        ren issues query.txt -f history.log -o json      Machine-readable summary\n  \
        ren issues query.txt -f history.log --commits commits.csv\n                                                   Also dump parsed commits")]
    Issues {
        /// File to write the query URL to
        query_file: PathBuf,

        #[command(flatten)]
        log: LogArgs,

        /// Also write the parsed commits to a CSV file
        #[arg(long, value_name = "FILE")]
        commits: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Reconcile the commit log against a tracker export for review
    #[command(after_help = "Examples:\n  \
        ren review review.csv --export jira.csv --repo . -s v1.0 -d v2.0\n  \
        ren review review.csv --export jira.csv -f history.log\n  \
        ren review review.csv --export jira.csv -f history.log --commits commits.csv")]
    Review {
        /// File to write the consolidated review CSV to
        review_file: PathBuf,

        /// Tracker CSV export to reconcile against
        #[arg(long, short, value_name = "FILE")]
        export: PathBuf,

        #[command(flatten)]
        log: LogArgs,

        /// Also write the parsed commits to a CSV file
        #[arg(long, value_name = "FILE")]
        commits: Option<PathBuf>,
    },

    /// Render a reviewed release-note sheet to HTML
    #[command(after_help = "Examples:\n  \
        ren render notes.html --input reviewed.tsv --version v2.0 --previous v1.0\n\n\
        Only rows whose Take column is Yes are rendered.")]
    Render {
        /// File to write the HTML report to
        output_file: PathBuf,

        /// Reviewed release-note sheet (tab-delimited by default)
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        versions: VersionArgs,
    },

    /// Render engineering notes (commit table, log, query link) to HTML
    #[command(after_help = "Examples:\n  \
        ren engineering eng.html --repo . -s v1.0 -d v2.0\n  \
        ren engineering eng.html -f history.log --version v2.0 --previous v1.0")]
    Engineering {
        /// File to write the HTML report to
        output_file: PathBuf,

        #[command(flatten)]
        log: LogArgs,

        #[command(flatten)]
        versions: VersionArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
