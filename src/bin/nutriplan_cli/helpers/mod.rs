// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
// ABOUTME: Re-exports helper modules for nutriplan-cli
// ABOUTME: Provides profile flag parsing and JSON output formatting

pub mod display;
pub mod profile;
