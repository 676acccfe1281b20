// ABOUTME: Engine configuration for nutrition targets, plan scheduling and body composition
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Planning Configuration Module
//!
//! Every numeric constant used by the calculation core lives here, with
//! defaults that reproduce the documented behaviour exactly.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity multipliers, protein factors, macro splits
//! - `planning` - calorie targets, safety floors, phase scheduling, special populations
//! - `body_composition` - muscularity correction, waist risk, category cutoffs

pub mod body_composition;
pub mod error;
pub mod nutrition;
pub mod planning;

pub use body_composition::{
    BodyCompositionConfig, BodyFatCategoryConfig, CompositionCorrectionConfig,
    MuscularityCategoryConfig, WaistRiskConfig,
};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CarbCyclingConfig, GenderedValue, MacroDistribution,
    MacroSplitConfig, NutritionConfig, ProteinConfig,
};
pub use planning::{
    GoalEnergyConfig, PhaseScheduleConfig, PlanGeneratorConfig, SafetyFloorsConfig,
    SpecialPopulationConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNING_CONFIG: OnceLock<PlanningConfig> = OnceLock::new();

/// Main configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Energy expenditure and macro constants
    pub nutrition: NutritionConfig,
    /// Plan generation constants
    pub plan: PlanGeneratorConfig,
    /// Body composition constants
    pub body_composition: BodyCompositionConfig,
}

impl PlanningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planning config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first incoherent setting found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = self.nutrition.activity_factors.ordered();
        if factors[0] <= 0.0 || factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be positive and strictly ascending",
            ));
        }

        let protein = &self.nutrition.protein;
        if protein.adult_min_age > protein.young_adult_max_age
            || protein.young_adult_max_age >= protein.middle_age_max_age
        {
            return Err(ConfigError::InvalidRange(
                "Protein age brackets must be in ascending order",
            ));
        }

        self.nutrition.macro_splits.validate()?;

        let phases = &self.plan.phases;
        if phases.kcal_per_kg_fat <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_kg_fat must be positive",
            ));
        }
        if phases.max_block_weeks == 0 || phases.water_loss_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Phase lengths must be at least one week",
            ));
        }
        if phases.max_block_weeks >= phases.diet_break_after_weeks {
            return Err(ConfigError::InvalidRange(
                "max_block_weeks must be < diet_break_after_weeks",
            ));
        }

        let floors = &self.plan.safety_floors.min_calories;
        if floors.male <= 0.0 || floors.female <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum calorie floors must be positive",
            ));
        }

        let categories = &self.body_composition.body_fat_categories;
        for gender_values in [
            (
                categories.below_baseline_max.male,
                categories.fitness_max.male,
                categories.general_health_max.male,
            ),
            (
                categories.below_baseline_max.female,
                categories.fitness_max.female,
                categories.general_health_max.female,
            ),
        ] {
            let (below, fitness, general) = gender_values;
            if below >= fitness || fitness >= general {
                return Err(ConfigError::InvalidRange(
                    "Body-fat category cutoffs must be in ascending order",
                ));
            }
        }

        if self.body_composition.correction.max_correction < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_correction must not be negative",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Safety floors
        Self::apply_env_var(
            "NUTRIPLAN_MALE_MIN_CALORIES",
            &mut self.plan.safety_floors.min_calories.male,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_FEMALE_MIN_CALORIES",
            &mut self.plan.safety_floors.min_calories.female,
        )?;

        // Goal energy
        Self::apply_env_var(
            "NUTRIPLAN_GAIN_SURPLUS_MALE",
            &mut self.plan.goal_energy.gain_surplus.male,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_GAIN_SURPLUS_FEMALE",
            &mut self.plan.goal_energy.gain_surplus.female,
        )?;

        // Phase scheduling
        Self::apply_env_var(
            "NUTRIPLAN_KCAL_PER_KG_FAT",
            &mut self.plan.phases.kcal_per_kg_fat,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_MAX_BLOCK_WEEKS",
            &mut self.plan.phases.max_block_weeks,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DIET_BREAK_AFTER_WEEKS",
            &mut self.plan.phases.diet_break_after_weeks,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_REFEED_AFTER_WEEKS",
            &mut self.plan.phases.refeed_after_weeks,
        )?;

        // Body composition
        Self::apply_env_var(
            "NUTRIPLAN_MIN_BODY_FAT_PERCENT",
            &mut self.body_composition.correction.min_body_fat_percent,
        )?;

        Ok(self)
    }
}
