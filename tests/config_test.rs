// ABOUTME: Integration tests for engine configuration loading and validation
// ABOUTME: Covers environment overrides, parse failures and incoherent constant rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{config, male_with_target, reference_female};
use nutriplan::config::intelligence::{ConfigError, MacroDistribution};
use nutriplan::config::PlanningConfig;
use nutriplan::errors::{AppError, ErrorCode};
use nutriplan::intelligence::create_plan;
use nutriplan::models::{Goal, GoalSelection};
use serial_test::serial;
use std::env;

// ============================================================================
// ENVIRONMENT OVERRIDE TESTS
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    env::remove_var("NUTRIPLAN_FEMALE_MIN_CALORIES");
    env::remove_var("NUTRIPLAN_MAX_BLOCK_WEEKS");

    let loaded = PlanningConfig::load().unwrap();
    let defaults = config();
    assert!(
        (loaded.plan.safety_floors.min_calories.female
            - defaults.plan.safety_floors.min_calories.female)
            .abs()
            < f64::EPSILON
    );
    assert_eq!(
        loaded.plan.phases.max_block_weeks,
        defaults.plan.phases.max_block_weeks
    );
}

#[test]
#[serial]
fn test_env_override_changes_safety_floor() {
    env::set_var("NUTRIPLAN_FEMALE_MIN_CALORIES", "1400");

    let loaded = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_FEMALE_MIN_CALORIES");

    let loaded = loaded.unwrap();
    assert!((loaded.plan.safety_floors.min_calories.female - 1400.0).abs() < f64::EPSILON);
    assert!((loaded.plan.safety_floors.min_calories.male - 1500.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_override_feeds_the_scheduler() {
    env::set_var("NUTRIPLAN_MAX_BLOCK_WEEKS", "4");

    let loaded = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_MAX_BLOCK_WEEKS");

    let loaded = loaded.unwrap();
    let plan = create_plan(
        &male_with_target(80.0),
        &GoalSelection::new(Goal::Lose, 0.2),
        &loaded,
    );
    assert!(plan
        .phases
        .iter()
        .filter_map(|phase| phase.duration_days)
        .skip(1)
        .all(|days| days <= 28));
}

#[test]
#[serial]
fn test_unparsable_env_value_is_rejected() {
    env::set_var("NUTRIPLAN_KCAL_PER_KG_FAT", "lots");

    let result = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_KCAL_PER_KG_FAT");

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains("NUTRIPLAN_KCAL_PER_KG_FAT")),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_env_value_failing_validation_is_rejected() {
    env::set_var("NUTRIPLAN_DIET_BREAK_AFTER_WEEKS", "3");

    let result = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_DIET_BREAK_AFTER_WEEKS");

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_global_config_is_loaded_once_and_valid() {
    let first = PlanningConfig::global();
    let second = PlanningConfig::global();

    assert!(std::ptr::eq(first, second));
    assert!(first.validate().is_ok());
}

// ============================================================================
// VALIDATION TESTS
// ============================================================================

#[test]
fn test_rejects_non_positive_calorie_floor() {
    let mut config = config();
    config.plan.safety_floors.min_calories.female = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_rejects_unordered_body_fat_cutoffs() {
    let mut config = config();
    config.body_composition.body_fat_categories.fitness_max.female = 35.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_rejects_balanced_split_not_summing_to_100() {
    let mut config = config();
    config.nutrition.macro_splits.balanced = MacroDistribution::new(30, 40, 40);
    match config.validate() {
        Err(ConfigError::InvalidWeights(message)) => assert!(message.contains("balanced")),
        other => panic!("Expected invalid weights, got {other:?}"),
    }
}

#[test]
fn test_config_errors_map_to_config_codes() {
    let parse: AppError = ConfigError::Parse("Invalid NUTRIPLAN_MAX_BLOCK_WEEKS".into()).into();
    let invalid: AppError = ConfigError::ValueOutOfRange("kcal_per_kg_fat must be positive").into();

    assert_eq!(parse.code, ErrorCode::ConfigError);
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert_eq!(invalid.code.exit_code(), 3);
}

#[test]
fn test_custom_floor_changes_plan() {
    let mut config = config();
    config.plan.safety_floors.enforce_bmr_floor = false;
    config.plan.safety_floors.min_calories.female = 1000.0;

    let plan = create_plan(
        &reference_female(),
        &GoalSelection::new(Goal::Lose, 0.5),
        &config,
    );
    // 1829 * 0.5 is below the lowered floor
    assert!((plan.target_calories - 1000.0).abs() < f64::EPSILON);
    assert_eq!(plan.warnings.len(), 1);
}
