// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
// ABOUTME: Nutrition commands for nutriplan-cli
// ABOUTME: Energy expenditure, macro splits and multi-phase plans for a profile

use crate::helpers::display::print_json;
use nutriplan::config::PlanningConfig;
use nutriplan::errors::{AppError, AppResult};
use nutriplan::intelligence::nutrition_calculator::protein_multiplier;
use nutriplan::intelligence::{
    calculate_energy_expenditure, calculate_macros, calculate_protein_grams, create_plan,
};
use nutriplan::models::{CarbCycleDay, DietProtocol, Goal, GoalSelection, UserProfile};
use serde_json::json;
use tracing::info;

/// Print BMR, TDEE and daily protein
pub fn energy(profile: &UserProfile, config: &PlanningConfig) -> AppResult<()> {
    let energy = calculate_energy_expenditure(profile, &config.nutrition);
    let protein_g = calculate_protein_grams(profile, &config.nutrition.protein);

    print_json(&json!({
        "bmr": energy.bmr.round(),
        "tdee": energy.tdee.round(),
        "protein_g": protein_g.round(),
        "protein_g_per_kg": protein_multiplier(profile, &config.nutrition.protein),
    }))
}

/// Print the macro split for a calorie target
pub fn macros(
    profile: &UserProfile,
    calories: f64,
    protocol: DietProtocol,
    goal: Goal,
    day: Option<CarbCycleDay>,
    config: &PlanningConfig,
) -> AppResult<()> {
    let macros = calculate_macros(calories, protocol, goal, profile, day, &config.nutrition);
    print_json(&macros)
}

/// Print a multi-phase plan
pub fn plan(
    profile: &UserProfile,
    goal: Goal,
    modifier: f64,
    config: &PlanningConfig,
) -> AppResult<()> {
    if !(0.0..=1.0).contains(&modifier) {
        return Err(AppError::invalid_input(format!(
            "modifier must be between 0 and 1, got {modifier}"
        )));
    }

    let plan = create_plan(profile, &GoalSelection::new(goal, modifier), config);
    info!(
        goal = %plan.goal,
        phases = plan.phases.len(),
        warnings = plan.warnings.len(),
        "Plan created"
    );
    print_json(&plan)
}
