// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end CLI specs for `ren`.
//!
//! The spec files under `cli/` are compiled as `[[test]]` targets of the
//! `ren` crate (see `crates/cli/Cargo.toml`); this library target only
//! anchors the package.
