// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in rn-core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("export is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("delimited file has no header row: {0}")]
    EmptyTable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rn-core operations.
pub type Result<T> = std::result::Result<T, Error>;
