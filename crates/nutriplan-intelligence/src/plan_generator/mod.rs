// ABOUTME: Multi-phase diet plan generation from a user profile and goal selection
// ABOUTME: Applies special-population overrides, safety floors, phase scheduling and activity guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Plan Generator
//!
//! [`create_plan`] runs in a fixed order:
//!
//! 1. energy expenditure (BMR, TDEE)
//! 2. special-population overrides, first match wins
//! 3. otherwise a goal-based calorie target, safety floors and plan macros,
//!    then the phase schedule for the goal
//! 4. menopause and chronic-condition notes, appended to every plan
//! 5. per-phase activity recommendations
//!
//! Every branch resolves to a plan with at least one phase. Inputs are not
//! validated; non-positive measurements propagate into the numbers.

mod activity_overlay;
pub mod guidelines;
mod phase_builder;
mod special_populations;

use crate::config::intelligence::PlanningConfig;
use crate::nutrition_calculator::{
    calculate_energy_expenditure, calculate_protein_grams, fill_carbs_from_remainder,
    EnergyExpenditure,
};
use nutriplan_core::models::{
    Goal, GoalSelection, GuidelineBlock, Macros, PhaseMacros, PhaseType, PlanPhase, PlanResult,
    UserProfile,
};
use tracing::{debug, warn};

/// Inputs shared by every plan builder
struct PlanContext<'a> {
    profile: &'a UserProfile,
    config: &'a PlanningConfig,
    bmr: f64,
    tdee: f64,
}

/// Ordered phases plus the labels describing their total length
struct Schedule {
    phases: Vec<PlanPhase>,
    estimated_duration: String,
    duration_context: String,
    warnings: Vec<String>,
}

/// Plan under construction, before condition notes and activity guidance
struct DraftPlan {
    goal: Goal,
    target_macros: Macros,
    schedule: Schedule,
    guideline_blocks: Vec<GuidelineBlock>,
}

impl DraftPlan {
    fn finish(self, bmr: f64, tdee: f64) -> PlanResult {
        let Schedule {
            phases,
            estimated_duration,
            duration_context,
            warnings,
        } = self.schedule;
        let total_duration_days = phases.iter().map(|phase| phase.duration_days).sum();
        let guidelines =
            (!self.guideline_blocks.is_empty()).then(|| GuidelineBlock::flatten(&self.guideline_blocks));

        PlanResult {
            target_calories: self.target_macros.calories,
            target_macros: self.target_macros,
            estimated_duration,
            duration_context,
            phases,
            warnings,
            guidelines,
            bmr,
            tdee,
            goal: self.goal,
            total_duration_days,
        }
    }
}

/// Create a diet plan for a profile and goal
///
/// Never fails: every input combination yields a plan whose phase list is
/// non-empty and in chronological order.
#[must_use]
pub fn create_plan(
    profile: &UserProfile,
    selection: &GoalSelection,
    config: &PlanningConfig,
) -> PlanResult {
    let EnergyExpenditure { bmr, tdee } = calculate_energy_expenditure(profile, &config.nutrition);
    debug!(bmr, tdee, goal = %selection.goal, "Computed energy expenditure");

    let context = PlanContext {
        profile,
        config,
        bmr,
        tdee,
    };

    let mut draft = special_populations::apply_overrides(&context)
        .unwrap_or_else(|| goal_plan(&context, selection));

    let (warnings, blocks) = guidelines::health_notes(profile);
    draft.schedule.warnings.extend(warnings);
    draft.guideline_blocks.extend(blocks);

    activity_overlay::annotate(&mut draft.schedule.phases, profile.is_athlete());

    debug!(
        goal = %draft.goal,
        phases = draft.schedule.phases.len(),
        warnings = draft.schedule.warnings.len(),
        "Plan generated"
    );
    draft.finish(bmr, tdee)
}

/// Calorie target for the goal, before safety floors
///
/// The gain surplus is a fixed gendered fraction; the selection modifier only
/// applies to deficits.
#[must_use]
pub fn goal_calories(
    goal: &GoalSelection,
    profile: &UserProfile,
    tdee: f64,
    config: &PlanningConfig,
) -> f64 {
    match goal.goal {
        Goal::Lose | Goal::MiniCut => tdee * (1.0 - goal.modifier),
        Goal::Gain => {
            tdee * (1.0
                + config
                    .plan
                    .goal_energy
                    .gain_surplus
                    .for_gender(profile.gender))
        }
        Goal::Maintain => tdee,
    }
}

/// Plan for adults without an overriding population rule
fn goal_plan(context: &PlanContext<'_>, selection: &GoalSelection) -> DraftPlan {
    let profile = context.profile;
    let goal_energy = &context.config.plan.goal_energy;

    let mut warnings = Vec::new();
    let raw_calories = goal_calories(selection, profile, context.tdee, context.config);
    let calories = apply_safety_floors(raw_calories, context, &mut warnings);

    let protein_g = match selection.goal {
        Goal::MiniCut => profile.weight_kg * goal_energy.mini_cut_protein_g_per_kg,
        Goal::Lose | Goal::Maintain | Goal::Gain => {
            calculate_protein_grams(profile, &context.config.nutrition.protein)
        }
    };
    let target_macros =
        fill_carbs_from_remainder(calories, protein_g, profile.weight_kg * goal_energy.fat_g_per_kg);

    let mut schedule = match selection.goal {
        Goal::Lose => phase_builder::weight_loss_schedule(context, &target_macros),
        Goal::Gain => phase_builder::gain_schedule(context, &target_macros),
        Goal::MiniCut => phase_builder::mini_cut_schedule(context, &target_macros),
        Goal::Maintain => phase_builder::maintenance_schedule(&target_macros),
    };
    warnings.append(&mut schedule.warnings);
    schedule.warnings = warnings;

    DraftPlan {
        goal: selection.goal,
        target_macros,
        schedule,
        guideline_blocks: Vec::new(),
    }
}

/// Raise calories to the gender minimum, then to BMR, warning each time
fn apply_safety_floors(calories: f64, context: &PlanContext<'_>, warnings: &mut Vec<String>) -> f64 {
    let floors = &context.config.plan.safety_floors;
    let gender = context.profile.gender;
    let minimum = floors.min_calories.for_gender(gender);
    let mut calories = calories;

    if calories < minimum {
        warn!(calories, minimum, %gender, "Raising calories to the minimum safe intake");
        warnings.push(format!(
            "Calories were raised to {minimum:.0} kcal, the minimum safe intake for {gender} adults."
        ));
        calories = minimum;
    }

    if floors.enforce_bmr_floor && calories < context.bmr {
        warn!(calories, bmr = context.bmr, "Raising calories to BMR");
        warnings.push(format!(
            "Calories were raised to your BMR ({:.0} kcal); eating below resting energy needs is not recommended.",
            context.bmr
        ));
        calories = context.bmr;
    }

    calories
}

/// Phase with no notes or optional guidance attached
fn phase(
    phase_type: PhaseType,
    name: &str,
    duration_label: impl Into<String>,
    duration_days: Option<u32>,
    calories: f64,
    macros: PhaseMacros,
) -> PlanPhase {
    PlanPhase {
        phase_type,
        name: name.to_owned(),
        duration_label: duration_label.into(),
        duration_days,
        calories,
        macros,
        notes: Vec::new(),
        weekly_loss_rate: None,
        review_instruction: None,
        activity_recommendation: None,
    }
}

fn weeks_label(weeks: u32) -> String {
    if weeks == 1 {
        "1 week".to_owned()
    } else {
        format!("{weeks} weeks")
    }
}

fn weekly_rate_label(kg_per_week: f64) -> String {
    format!("{kg_per_week:.2} kg/week")
}

fn notes(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_owned()).collect()
}
