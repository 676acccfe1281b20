// ABOUTME: Nutrition configuration for energy expenditure and macronutrient targets
// ABOUTME: Configures BMR coefficients, activity multipliers, protein factors and macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use nutriplan_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Nutrition Calculation Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Protein multipliers by age bracket, activity and gender
    pub protein: ProteinConfig,
    /// Macro split strategies per diet protocol
    pub macro_splits: MacroSplitConfig,
}

/// A value that differs between male and female profiles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GenderedValue {
    /// Value for male profiles
    pub male: f64,
    /// Value for female profiles
    pub female: f64,
}

impl GenderedValue {
    /// Create a gendered pair
    #[must_use]
    pub const fn new(male: f64, female: f64) -> Self {
        Self { male, female }
    }

    /// Pick the value for a gender
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard daily training): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multipliers in activity order
    #[must_use]
    pub const fn ordered(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ]
    }
}

/// Protein multipliers (g per kg bodyweight)
///
/// Three age brackets: young adult (18 to `young_adult_max_age`), middle age
/// (up to `middle_age_max_age`) and senior. Young adults and seniors are split by
/// gender and by whether activity is at least moderate; middle age is keyed by
/// activity level alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// First age of the young adult bracket (18)
    pub adult_min_age: u32,
    /// Last age of the young adult bracket (40)
    pub young_adult_max_age: u32,
    /// Last age of the middle-age bracket (60)
    pub middle_age_max_age: u32,
    /// Young adult, at least moderately active: 2.0 / 1.6
    pub young_active: GenderedValue,
    /// Young adult, below moderate activity: 1.4 / 1.0
    pub young_inactive: GenderedValue,
    /// Middle age, sedentary: 1.6
    pub middle_sedentary: f64,
    /// Middle age, light: 1.8
    pub middle_light: f64,
    /// Middle age, moderate: 2.0
    pub middle_moderate: f64,
    /// Middle age, active or very active: 2.2
    pub middle_active: f64,
    /// Senior, at least moderately active: 2.4 / 2.0
    pub senior_active: GenderedValue,
    /// Senior, below moderate activity: 1.6 / 1.2
    pub senior_inactive: GenderedValue,
    /// Any age outside the brackets (minors): 1.6
    pub fallback: f64,
}

/// Macro distribution as whole percentages of calories
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.protein_pct
            .saturating_add(self.carbs_pct)
            .saturating_add(self.fat_pct)
    }
}

/// Carbohydrate grams per kg bodyweight for each carb-cycling day type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbCyclingConfig {
    /// High day: 4.0 g/kg
    pub high_g_per_kg: f64,
    /// Medium day: 2.5 g/kg
    pub medium_g_per_kg: f64,
    /// Low or unspecified day: 1.0 g/kg
    pub low_g_per_kg: f64,
}

/// Macro split strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Ketogenic split: 25 / 5 / 70
    pub keto: MacroDistribution,
    /// Balanced split for maintenance without a protocol: 30 / 40 / 30
    pub balanced: MacroDistribution,
    /// Carb-cycling carbohydrate targets
    pub carb_cycling: CarbCyclingConfig,
    /// Fat for lose/gain goals without a protocol: 0.8 g/kg
    pub fat_g_per_kg: f64,
}

impl MacroSplitConfig {
    /// Validate that all macro distributions sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if a distribution does not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, split) in [("keto", &self.keto), ("balanced", &self.balanced)] {
            let sum = split.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            adult_min_age: 18,
            young_adult_max_age: 40,
            middle_age_max_age: 60,
            young_active: GenderedValue::new(2.0, 1.6),
            young_inactive: GenderedValue::new(1.4, 1.0),
            middle_sedentary: 1.6,
            middle_light: 1.8,
            middle_moderate: 2.0,
            middle_active: 2.2,
            senior_active: GenderedValue::new(2.4, 2.0),
            senior_inactive: GenderedValue::new(1.6, 1.2),
            fallback: 1.6,
        }
    }
}

impl Default for CarbCyclingConfig {
    fn default() -> Self {
        Self {
            high_g_per_kg: 4.0,
            medium_g_per_kg: 2.5,
            low_g_per_kg: 1.0,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            keto: MacroDistribution::new(25, 5, 70),
            balanced: MacroDistribution::new(30, 40, 30),
            carb_cycling: CarbCyclingConfig::default(),
            fat_g_per_kg: 0.8,
        }
    }
}
