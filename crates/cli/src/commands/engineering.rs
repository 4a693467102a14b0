// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rn_core::QueryKeys;

use crate::cli::{LogArgs, VersionArgs};
use crate::config::Config;
use crate::error::Result;
use crate::render::render_engineering_notes;

use super::load_log;

pub fn run(
    config: &Config,
    output_file: &Path,
    log_args: &LogArgs,
    versions: &VersionArgs,
) -> Result<()> {
    let log = load_log(log_args)?;

    // Version labels fall back to the git refs when not given explicitly.
    let version = versions
        .version
        .as_deref()
        .or(log_args.dest.as_deref())
        .unwrap_or_default();
    let previous = versions
        .previous
        .as_deref()
        .or(log_args.source.as_deref())
        .unwrap_or_default();

    let keys = QueryKeys::partition(log.keys(), &config.blacklist);
    let url = keys.query_url(&config.tracker.search_url);

    tracing::debug!(
        commits = log.len(),
        queried = keys.keys.len(),
        "rendering engineering notes"
    );

    let file = File::create(output_file)?;
    let mut writer = BufWriter::new(file);
    render_engineering_notes(&mut writer, config, version, previous, &log, &url)?;

    println!(
        "Rendered engineering notes for {} commits to {}",
        log.len(),
        output_file.display()
    );

    Ok(())
}
