// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides access to nutrition planning and body composition commands

pub mod body;
pub mod nutrition;
