// ABOUTME: Metabolic calculations for energy expenditure and macronutrient targets
// ABOUTME: BMR, TDEE, age- and activity-bracketed protein, and protocol-specific macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Nutrition Calculator Module
//!
//! Pure functions from a [`UserProfile`] to energy and macro targets. Inputs
//! are not validated: non-positive values propagate through the formulas.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, MacroDistribution, NutritionConfig, ProteinConfig,
};
use nutriplan_core::models::nutrition::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutriplan_core::models::{
    ActivityLevel, CarbCycleDay, DietProtocol, Gender, Goal, Macros, UserProfile,
};
use serde::{Deserialize, Serialize};

/// Resting and total daily energy expenditure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyExpenditure {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// No clamping is applied.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> f64 {
    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    config.msj_age_coef.mul_add(
        f64::from(profile.age),
        config.msj_weight_coef.mul_add(
            profile.weight_kg,
            config.msj_height_coef * profile.height_cm,
        ),
    ) + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };

    bmr * activity_factor
}

/// BMR and TDEE for a profile
#[must_use]
pub fn calculate_energy_expenditure(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> EnergyExpenditure {
    let bmr = calculate_bmr(profile, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    EnergyExpenditure { bmr, tdee }
}

/// Protein multiplier (g/kg) for the profile's age bracket, activity and gender
#[must_use]
pub fn protein_multiplier(profile: &UserProfile, config: &ProteinConfig) -> f64 {
    let active = profile.activity_level.is_at_least_moderate();
    let age = profile.age;

    if age < config.adult_min_age {
        config.fallback
    } else if age <= config.young_adult_max_age {
        let factor = if active {
            config.young_active
        } else {
            config.young_inactive
        };
        factor.for_gender(profile.gender)
    } else if age <= config.middle_age_max_age {
        match profile.activity_level {
            ActivityLevel::Sedentary => config.middle_sedentary,
            ActivityLevel::Light => config.middle_light,
            ActivityLevel::Moderate => config.middle_moderate,
            ActivityLevel::Active | ActivityLevel::VeryActive => config.middle_active,
        }
    } else {
        let factor = if active {
            config.senior_active
        } else {
            config.senior_inactive
        };
        factor.for_gender(profile.gender)
    }
}

/// Calculate recommended daily protein intake
///
/// Formula: Protein (g) = `weight_kg` x multiplier, see [`protein_multiplier`].
#[must_use]
pub fn calculate_protein_grams(profile: &UserProfile, config: &ProteinConfig) -> f64 {
    profile.weight_kg * protein_multiplier(profile, config)
}

/// Build a macro set where carbohydrates absorb the calories left after protein and fat
///
/// Carbohydrates are floored at zero; when the floor engages the gram values
/// deliver fewer calories than the target.
#[must_use]
pub fn fill_carbs_from_remainder(target_calories: f64, protein_g: f64, fat_g: f64) -> Macros {
    let calories = target_calories.round();
    let protein_g = protein_g.round();
    let fat_g = fat_g.round();
    let remaining = fat_g.mul_add(
        -KCAL_PER_GRAM_FAT,
        protein_g.mul_add(-KCAL_PER_GRAM_PROTEIN, calories),
    );

    Macros {
        calories,
        protein_g,
        carbs_g: (remaining / KCAL_PER_GRAM_CARBS).round().max(0.0),
        fat_g,
    }
}

/// Calculate the macro split for a calorie target
///
/// - `Keto`: fixed percentages (25 / 5 / 70 by default)
/// - `CarbCycling`: protein by profile, carbohydrate by day type, fat absorbs the rest
/// - `Standard` with a lose or gain goal: protein by profile, fat 0.8 g/kg, carbohydrate absorbs the rest
/// - anything else: balanced percentages (30 / 40 / 30 by default)
///
/// Gram values and calories are rounded to whole numbers. The gram values
/// reproduce the calories within 2 kcal unless an absorbing macro was
/// floored at zero.
#[must_use]
pub fn calculate_macros(
    target_calories: f64,
    protocol: DietProtocol,
    goal: Goal,
    profile: &UserProfile,
    carb_cycle_day: Option<CarbCycleDay>,
    config: &NutritionConfig,
) -> Macros {
    let splits = &config.macro_splits;

    match (protocol, goal) {
        (DietProtocol::Keto, _) => split_by_percentages(target_calories, splits.keto),
        (DietProtocol::CarbCycling, _) => {
            let calories = target_calories.round();
            let protein_g = calculate_protein_grams(profile, &config.protein).round();
            let carbs_per_kg = match carb_cycle_day.unwrap_or_default() {
                CarbCycleDay::High => splits.carb_cycling.high_g_per_kg,
                CarbCycleDay::Medium => splits.carb_cycling.medium_g_per_kg,
                CarbCycleDay::Low | CarbCycleDay::Normal => splits.carb_cycling.low_g_per_kg,
            };
            let carbs_g = (profile.weight_kg * carbs_per_kg).round();
            let remaining = carbs_g.mul_add(
                -KCAL_PER_GRAM_CARBS,
                protein_g.mul_add(-KCAL_PER_GRAM_PROTEIN, calories),
            );
            let fat_g = (remaining / KCAL_PER_GRAM_FAT).round().max(0.0);

            let macros = Macros {
                calories,
                protein_g,
                carbs_g,
                fat_g,
            };
            if fat_g > 0.0 {
                close_energy_gap(macros)
            } else {
                macros
            }
        }
        (DietProtocol::Standard, Goal::Lose | Goal::Gain) => fill_carbs_from_remainder(
            target_calories,
            calculate_protein_grams(profile, &config.protein),
            profile.weight_kg * splits.fat_g_per_kg,
        ),
        (DietProtocol::Standard, Goal::Maintain | Goal::MiniCut) => {
            split_by_percentages(target_calories, splits.balanced)
        }
    }
}

/// Split calories by whole percentages, closing the rounding gap on carbohydrates
fn split_by_percentages(target_calories: f64, split: MacroDistribution) -> Macros {
    let calories = target_calories.round();
    let share = |pct: u8, kcal_per_gram: f64| (calories * f64::from(pct) / 100.0 / kcal_per_gram).round();

    close_energy_gap(Macros {
        calories,
        protein_g: share(split.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_g: share(split.carbs_pct, KCAL_PER_GRAM_CARBS),
        fat_g: share(split.fat_pct, KCAL_PER_GRAM_FAT),
    })
}

/// Shift the rounding residual into carbohydrates so the grams match the calories within 2 kcal
///
/// Carbohydrates cannot drop below zero, so an overshoot larger than their
/// energy is first taken off fat, rounding fat down to leave carbohydrates a
/// non-negative residual to absorb.
fn close_energy_gap(macros: Macros) -> Macros {
    let mut adjusted = macros;
    let carb_kcal = adjusted.carbs_g * KCAL_PER_GRAM_CARBS;
    let gap = adjusted.calories - adjusted.energy_from_macros();
    if gap < -carb_kcal {
        adjusted.fat_g = (adjusted.fat_g.mul_add(KCAL_PER_GRAM_FAT, gap + carb_kcal)
            / KCAL_PER_GRAM_FAT)
            .floor()
            .max(0.0);
    }

    let gap = adjusted.calories - adjusted.energy_from_macros();
    adjusted.carbs_g = (adjusted.carbs_g + gap / KCAL_PER_GRAM_CARBS).round().max(0.0);
    adjusted
}
