// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, default config and reference profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriplan`

use nutriplan::config::PlanningConfig;
use nutriplan::models::{ActivityLevel, Gender, Macros, PhaseMacros, UserProfile};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Default engine constants, independent of the process environment
pub fn config() -> PlanningConfig {
    init_test_logging();
    PlanningConfig::default()
}

/// Reference male: 30 years, 180 cm, 90 kg, moderately active
pub fn reference_male() -> UserProfile {
    UserProfile::new(Gender::Male, 30, 180.0, 90.0, ActivityLevel::Moderate)
}

/// Reference female: 28 years, 165 cm, 60 kg, lightly active
pub fn reference_female() -> UserProfile {
    UserProfile::new(Gender::Female, 28, 165.0, 60.0, ActivityLevel::Light)
}

/// Reference male with a weight-loss target
pub fn male_with_target(target_weight_kg: f64) -> UserProfile {
    UserProfile {
        target_weight_kg: Some(target_weight_kg),
        ..reference_male()
    }
}

/// Energy gap between stated calories and the gram values
pub fn energy_gap(macros: &Macros) -> f64 {
    (macros.calories - macros.energy_from_macros()).abs()
}

/// Energy gap for a phase's calories and gram values
pub fn phase_energy_gap(calories: f64, macros: &PhaseMacros) -> f64 {
    (calories - macros.energy()).abs()
}
