// ABOUTME: Calculation core for nutrition targets, diet plans and body composition
// ABOUTME: Extracted from the main crate so the formulas compile and test in isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan Intelligence
//!
//! Synchronous, side-effect-free calculations. Every function takes its
//! inputs and the relevant configuration section by reference and returns a
//! freshly built result, so any number of threads may call them concurrently.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: BMR, TDEE, protein and macro splits
//! - **`body_composition`**: circumference-based body-fat estimate and risk summary
//! - **`body_fat_targets`**: sport-specific ideal ranges and target weights
//! - **`plan_generator`**: multi-phase diet plans
//! - **config**: every numeric constant, with validated defaults

/// Engine configuration
pub mod config;

/// Body composition analysis from circumference measurements
pub mod body_composition;

/// Sport-specific ideal body-fat ranges
pub mod body_fat_targets;

/// Energy expenditure and macronutrient calculations
pub mod nutrition_calculator;

/// Multi-phase diet plan generation
pub mod plan_generator;

pub use body_composition::{analyze_body_composition, navy_body_fat_percentage};
pub use body_fat_targets::{calculate_ideal_body_fat, ideal_body_fat_range, suggest_body_fat_target};
pub use config::PlanningConfig;
pub use nutrition_calculator::{
    calculate_bmr, calculate_energy_expenditure, calculate_macros, calculate_protein_grams,
    calculate_tdee, EnergyExpenditure,
};
pub use plan_generator::create_plan;
