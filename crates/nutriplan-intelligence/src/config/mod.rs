// ABOUTME: Configuration module for the nutriplan calculation engine
// ABOUTME: Re-exports the engine configuration tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

/// Engine configuration (metabolic constants, plan scheduling, body composition thresholds)
pub mod intelligence;

pub use intelligence::PlanningConfig;
