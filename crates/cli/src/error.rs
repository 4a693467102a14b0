// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rnrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no log source\n  hint: pass --log-file FILE, or --repo DIR with --source and --dest refs")]
    NoLogSource,

    #[error("git log failed in {repo}: {stderr}")]
    GitLog { repo: String, stderr: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Core(#[from] rn_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rnrs operations.
pub type Result<T> = std::result::Result<T, Error>;
