// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool configuration.
//!
//! Configuration lives in `ren.toml` and covers everything site-specific:
//! which project prefixes are blacklisted from bulk queries, which route to
//! the alternate tracker, the tracker URL templates, and the delimiters of
//! the flat-file exchange formats. Every field has a default, so the tool
//! runs without a config file at all.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "ren.toml";

/// Configuration loaded from `ren.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Project prefixes excluded from the bulk query (tracked elsewhere).
    pub blacklist: Vec<String>,
    /// Project prefixes whose hyperlinks route to the alternate tracker.
    pub alternate_prefixes: Vec<String>,
    /// Delimiter of the tracker export file (single character).
    pub export_delimiter: String,
    /// Delimiter of the reviewed release-note sheet (single character).
    pub review_delimiter: String,
    /// Product lines listed in the release-note header.
    pub products: Vec<String>,
    pub tracker: TrackerConfig,
}

/// Tracker URL templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TrackerConfig {
    /// Prefix for per-issue links: `<browse_url><key>`.
    pub browse_url: String,
    /// Prefix for bulk-query links: `<search_url><query>`.
    pub search_url: String,
    /// Prefix for alternate-tracker work items: `<alternate_url><numeric id>`.
    pub alternate_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            blacklist: vec!["AZMV".to_string(), "AMZV".to_string()],
            alternate_prefixes: vec!["AZMV".to_string()],
            export_delimiter: "^".to_string(),
            review_delimiter: "\t".to_string(),
            products: Vec::new(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            browse_url: "https://jira.mot-solutions.com/browse/".to_string(),
            search_url: "https://jira.mot-solutions.com/issues/?jql=".to_string(),
            alternate_url: "https://dev.azure.com/MobileVideo/VideoManager/_workitems/edit/"
                .to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `ren.toml` in the working directory is used when present, otherwise
    /// the defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.exists() {
                    Config::from_file(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("export_delimiter", &self.export_delimiter),
            ("review_delimiter", &self.review_delimiter),
        ] {
            if value.chars().count() != 1 {
                return Err(Error::Config(format!(
                    "{} must be exactly one character, got {:?}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// The export delimiter as a char.
    pub fn export_delimiter(&self) -> char {
        self.export_delimiter.chars().next().unwrap_or('^')
    }

    /// The review-sheet delimiter as a char.
    pub fn review_delimiter(&self) -> char {
        self.review_delimiter.chars().next().unwrap_or('\t')
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
