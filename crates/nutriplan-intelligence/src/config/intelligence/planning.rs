// ABOUTME: Plan generator configuration for calorie targets, safety floors and phase scheduling
// ABOUTME: Configures gain surplus, special-population adjustments and diet break / refeed cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Plan Generator Configuration
//!
//! The scheduling constants drive the weight-loss phase loop: a short water-loss
//! opening, work blocks of at most `max_block_weeks`, a refeed day once
//! `refeed_after_weeks` of deficit have accumulated, and a full diet-break week
//! once `diet_break_after_weeks` have accumulated.

use super::nutrition::GenderedValue;
use serde::{Deserialize, Serialize};

/// Plan generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanGeneratorConfig {
    /// Calorie target rules per goal
    pub goal_energy: GoalEnergyConfig,
    /// Minimum calorie floors
    pub safety_floors: SafetyFloorsConfig,
    /// Weight-loss phase scheduling
    pub phases: PhaseScheduleConfig,
    /// Minor, pregnancy and breastfeeding adjustments
    pub special_populations: SpecialPopulationConfig,
}

/// Calorie target rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEnergyConfig {
    /// Fixed surplus fraction for the gain goal: 0.125 male / 0.075 female
    pub gain_surplus: GenderedValue,
    /// Protein for mini-cuts: 2.5 g/kg
    pub mini_cut_protein_g_per_kg: f64,
    /// Fat for plan macros: 0.8 g/kg
    pub fat_g_per_kg: f64,
    /// Assumed gain rate when sizing a gain phase from a target weight: 0.5 kg/week
    pub gain_rate_kg_per_week: f64,
}

/// Minimum calorie floors, applied in order: gender floor, then BMR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyFloorsConfig {
    /// Minimum kcal/day: 1500 male / 1200 female
    pub min_calories: GenderedValue,
    /// Never plan below BMR
    pub enforce_bmr_floor: bool,
}

/// Weight-loss phase scheduling constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseScheduleConfig {
    /// Length of the opening water-loss phase: 2 weeks
    pub water_loss_weeks: u32,
    /// Expected water loss as a fraction of body weight: 0.025
    pub water_loss_fraction: f64,
    /// Upper bound of the water-loss range relative to the lower: 1.5
    pub water_loss_high_multiplier: f64,
    /// Energy content of body fat: 7700 kcal/kg
    pub kcal_per_kg_fat: f64,
    /// Weekly loss below which no schedule is built: 0.1 kg
    pub min_weekly_loss_kg: f64,
    /// Longest sustained fat-loss block: 6 weeks
    pub max_block_weeks: u32,
    /// Deficit weeks before a diet break is due: 8
    pub diet_break_after_weeks: u32,
    /// A diet break is only inserted if more than this many weeks remain: 2
    pub diet_break_min_remaining_weeks: u32,
    /// Deficit weeks before a refeed day is due: 6
    pub refeed_after_weeks: u32,
    /// Extra carbohydrate on a refeed day: 100 g
    pub refeed_extra_carbs_g: f64,
    /// Fat floor on a refeed day: 20 g
    pub refeed_min_fat_g: f64,
    /// Diet-break protein: 1.8 g/kg
    pub diet_break_protein_g_per_kg: f64,
    /// Diet-break carbohydrate share of TDEE: 0.45
    pub diet_break_carb_fraction: f64,
    /// Diet-break fat share of TDEE: 0.30
    pub diet_break_fat_fraction: f64,
    /// Review interval for open-ended fat-loss phases: 4 weeks
    pub open_ended_review_weeks: u32,
}

/// Special-population adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialPopulationConfig {
    /// Below this age the health-focus plan applies: 18
    pub adult_age: u32,
    /// Minor protein: 1.5 g/kg
    pub minor_protein_g_per_kg: f64,
    /// Minor fat floor as a share of calories: 0.30
    pub minor_fat_fraction: f64,
    /// Extra energy during pregnancy: 400 kcal
    pub pregnancy_extra_calories: f64,
    /// Extra energy while breastfeeding: 500 kcal
    pub breastfeeding_extra_calories: f64,
    /// Extra protein for pregnancy and breastfeeding: 25 g
    pub extra_protein_g: f64,
}

impl Default for GoalEnergyConfig {
    fn default() -> Self {
        Self {
            gain_surplus: GenderedValue::new(0.125, 0.075),
            mini_cut_protein_g_per_kg: 2.5,
            fat_g_per_kg: 0.8,
            gain_rate_kg_per_week: 0.5,
        }
    }
}

impl Default for SafetyFloorsConfig {
    fn default() -> Self {
        Self {
            min_calories: GenderedValue::new(1500.0, 1200.0),
            enforce_bmr_floor: true,
        }
    }
}

impl Default for PhaseScheduleConfig {
    fn default() -> Self {
        Self {
            water_loss_weeks: 2,
            water_loss_fraction: 0.025,
            water_loss_high_multiplier: 1.5,
            kcal_per_kg_fat: 7700.0,
            min_weekly_loss_kg: 0.1,
            max_block_weeks: 6,
            diet_break_after_weeks: 8,
            diet_break_min_remaining_weeks: 2,
            refeed_after_weeks: 6,
            refeed_extra_carbs_g: 100.0,
            refeed_min_fat_g: 20.0,
            diet_break_protein_g_per_kg: 1.8,
            diet_break_carb_fraction: 0.45,
            diet_break_fat_fraction: 0.30,
            open_ended_review_weeks: 4,
        }
    }
}

impl Default for SpecialPopulationConfig {
    fn default() -> Self {
        Self {
            adult_age: 18,
            minor_protein_g_per_kg: 1.5,
            minor_fat_fraction: 0.30,
            pregnancy_extra_calories: 400.0,
            breastfeeding_extra_calories: 500.0,
            extra_protein_g: 25.0,
        }
    }
}
