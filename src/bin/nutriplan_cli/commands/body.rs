// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
// ABOUTME: Body composition commands for nutriplan-cli
// ABOUTME: Circumference analysis and sport-specific body-fat targets

use crate::helpers::display::print_json;
use nutriplan::config::PlanningConfig;
use nutriplan::errors::AppResult;
use nutriplan::intelligence::{
    analyze_body_composition, calculate_ideal_body_fat, suggest_body_fat_target,
};
use nutriplan::models::{BodyMeasurements, Gender, SportActivity};
use serde_json::json;

/// Print the body composition analysis; invalid measurements become an input error
pub fn composition(measurements: &BodyMeasurements, config: &PlanningConfig) -> AppResult<()> {
    let result = analyze_body_composition(measurements, &config.body_composition)?;
    print_json(&result)
}

/// Print the ideal range, status and, when meaningful, a target weight
pub fn fat_target(
    gender: Gender,
    sport: SportActivity,
    body_fat: f64,
    weight: Option<f64>,
) -> AppResult<()> {
    let result = calculate_ideal_body_fat(gender, sport, body_fat);
    let suggestion = weight
        .and_then(|weight_kg| suggest_body_fat_target(gender, sport, body_fat, weight_kg));

    print_json(&json!({
        "ideal_range": result.ideal_range,
        "status": result.status,
        "recommendation": result.recommendation,
        "suggested_target_weight_kg": suggestion.map(|s| s.suggested_target_weight_kg),
    }))
}
