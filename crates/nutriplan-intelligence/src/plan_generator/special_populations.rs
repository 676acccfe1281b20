// ABOUTME: Override rules that replace the goal-based plan for special populations
// ABOUTME: Ordered predicate/builder pairs for minors, pregnancy and breastfeeding, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use super::{guidelines, notes, phase, DraftPlan, PlanContext, Schedule};
use crate::nutrition_calculator::{calculate_protein_grams, fill_carbs_from_remainder};
use nutriplan_core::models::nutrition::KCAL_PER_GRAM_FAT;
use nutriplan_core::models::{Goal, PhaseType, PlanPhase, PregnancyStatus};
use tracing::warn;

/// A population rule: when `applies` holds, `build` replaces the whole plan
struct OverrideRule {
    name: &'static str,
    applies: fn(&PlanContext<'_>) -> bool,
    build: fn(&PlanContext<'_>) -> DraftPlan,
}

/// Evaluated top to bottom
const OVERRIDE_RULES: &[OverrideRule] = &[
    OverrideRule {
        name: "minor",
        applies: is_minor,
        build: health_focus_plan,
    },
    OverrideRule {
        name: "pregnant",
        applies: is_pregnant,
        build: maternity_plan,
    },
    OverrideRule {
        name: "breastfeeding",
        applies: is_breastfeeding,
        build: maternity_plan,
    },
];

/// Plan from the first matching population rule, if any
pub(super) fn apply_overrides(context: &PlanContext<'_>) -> Option<DraftPlan> {
    OVERRIDE_RULES
        .iter()
        .find(|rule| (rule.applies)(context))
        .map(|rule| {
            warn!(rule = rule.name, "Special population rule replaces the goal-based plan");
            (rule.build)(context)
        })
}

fn is_minor(context: &PlanContext<'_>) -> bool {
    context.profile.age < context.config.plan.special_populations.adult_age
}

fn is_pregnant(context: &PlanContext<'_>) -> bool {
    context.profile.effective_pregnancy_status() == PregnancyStatus::Pregnant
}

fn is_breastfeeding(context: &PlanContext<'_>) -> bool {
    context.profile.effective_pregnancy_status() == PregnancyStatus::Breastfeeding
}

/// Maintenance calories, elevated protein and a fat floor as a share of calories
fn health_focus_plan(context: &PlanContext<'_>) -> DraftPlan {
    let cfg = &context.config.plan.special_populations;
    let weight_kg = context.profile.weight_kg;
    let calories = context.tdee;
    let target_macros = fill_carbs_from_remainder(
        calories,
        weight_kg * cfg.minor_protein_g_per_kg,
        calories * cfg.minor_fat_fraction / KCAL_PER_GRAM_FAT,
    );

    let health_focus = PlanPhase {
        notes: notes(&[
            "Eat regular meals built around whole foods, fruit and vegetables",
            "Include a protein source and a calcium source at every meal",
            "Stay active every day through sport and play",
        ]),
        review_instruction: Some(
            "Review growth and energy levels with your paediatrician or GP at regular check-ups."
                .to_owned(),
        ),
        ..phase(
            PhaseType::HealthFocus,
            "Healthy Growth",
            "Ongoing",
            None,
            target_macros.calories,
            target_macros.phase_macros(),
        )
    };

    DraftPlan {
        goal: Goal::Maintain,
        target_macros,
        schedule: Schedule {
            phases: vec![health_focus],
            estimated_duration: "Ongoing".to_owned(),
            duration_context: "Calorie restriction is not applied while you are still growing.".to_owned(),
            warnings: vec![format!(
                "Under {}: weight-loss and weight-gain diets are not recommended during growth. This plan supports healthy development at maintenance calories.",
                cfg.adult_age
            )],
        },
        guideline_blocks: Vec::new(),
    }
}

/// Maintenance plus a pregnancy or lactation allowance, with extra protein
fn maternity_plan(context: &PlanContext<'_>) -> DraftPlan {
    let cfg = &context.config.plan.special_populations;
    let profile = context.profile;
    let status = profile.effective_pregnancy_status();

    let (name, extra_calories) = match status {
        PregnancyStatus::Breastfeeding => ("Breastfeeding Nutrition", cfg.breastfeeding_extra_calories),
        PregnancyStatus::Pregnant | PregnancyStatus::None | PregnancyStatus::Menopause => {
            ("Pregnancy Nutrition", cfg.pregnancy_extra_calories)
        }
    };

    let target_macros = fill_carbs_from_remainder(
        context.tdee + extra_calories,
        calculate_protein_grams(profile, &context.config.nutrition.protein) + cfg.extra_protein_g,
        profile.weight_kg * context.config.plan.goal_energy.fat_g_per_kg,
    );

    let maternity = PlanPhase {
        notes: vec![format!(
            "Includes {extra_calories:.0} kcal and {:.0} g protein above maintenance",
            cfg.extra_protein_g
        )],
        review_instruction: Some(
            "Review your targets with your midwife or doctor at each check-up.".to_owned(),
        ),
        ..phase(
            PhaseType::Maintenance,
            name,
            "Ongoing",
            None,
            target_macros.calories,
            target_macros.phase_macros(),
        )
    };

    let (warnings, guideline_blocks) = guidelines::maternity_notes(status)
        .map(|(warning, block)| (vec![warning], vec![block]))
        .unwrap_or_default();

    DraftPlan {
        goal: Goal::Maintain,
        target_macros,
        schedule: Schedule {
            phases: vec![maternity],
            estimated_duration: "Ongoing".to_owned(),
            duration_context: "Applies for as long as the pregnancy or breastfeeding period lasts.".to_owned(),
            warnings,
        },
        guideline_blocks,
    }
}
