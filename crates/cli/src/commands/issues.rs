// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use serde::Serialize;

use rn_core::QueryKeys;

use crate::cli::{LogArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;

use super::{load_log, write_commits_csv};

/// JSON output structure for the issues command.
#[derive(Serialize)]
struct IssuesJson {
    query: String,
    url: String,
    #[serde(flatten)]
    keys: QueryKeys,
}

pub fn run(
    config: &Config,
    query_file: &Path,
    log_args: &LogArgs,
    commits: Option<&Path>,
    output: OutputFormat,
) -> Result<()> {
    let log = load_log(log_args)?;
    let keys = QueryKeys::partition(log.keys(), &config.blacklist);
    let url = keys.query_url(&config.tracker.search_url);

    tracing::debug!(
        commits = log.len(),
        queried = keys.keys.len(),
        blacklisted = keys.blacklisted.len(),
        "partitioned issue keys"
    );
    for key in &keys.blacklisted {
        tracing::warn!(%key, "excluded blacklisted issue from query");
    }

    fs::write(query_file, format!("{}\n", url))?;

    if let Some(path) = commits {
        write_commits_csv(&log, path)?;
    }

    match output {
        OutputFormat::Text => {
            println!("{}", url);
            println!(
                "Wrote query for {} issues to {}",
                keys.keys.len(),
                query_file.display()
            );
        }
        OutputFormat::Json => {
            let json = IssuesJson {
                query: keys.query(),
                url,
                keys,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
