// ABOUTME: Main library entry point for the nutriplan nutrition planning engine
// ABOUTME: Re-exports the core models and calculation crates and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Personalized nutrition targets, multi-phase diet plans and circumference
//! based body composition estimates.
//!
//! ## Architecture
//!
//! - **errors / models**: shared records from `nutriplan-core`
//! - **intelligence**: calculation core from `nutriplan-intelligence`
//! - **logging**: `tracing-subscriber` setup for binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use nutriplan::config::PlanningConfig;
//! use nutriplan::intelligence::create_plan;
//! use nutriplan::models::{ActivityLevel, Gender, Goal, GoalSelection, UserProfile};
//!
//! let mut profile = UserProfile::new(Gender::Male, 30, 180.0, 90.0, ActivityLevel::Moderate);
//! profile.target_weight_kg = Some(80.0);
//!
//! let plan = create_plan(
//!     &profile,
//!     &GoalSelection::new(Goal::Lose, 0.2),
//!     PlanningConfig::global(),
//! );
//! assert!(!plan.phases.is_empty());
//! ```

/// Unified error handling with standard error codes
pub use nutriplan_core::errors;

/// Profile, goal, plan and body composition records
pub use nutriplan_core::models;

/// Calculation core: metabolic formulas, plans, body composition
pub use nutriplan_intelligence as intelligence;

/// Engine configuration with environment overrides
pub use nutriplan_intelligence::config;

/// Structured logging setup
pub mod logging;
