// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Prints command results as pretty JSON on stdout

use nutriplan::errors::AppResult;
use serde::Serialize;

/// Print a result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
