// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
// ABOUTME: Shared profile flags for the nutrition subcommands
// ABOUTME: Converts parsed command-line values into a UserProfile

use clap::Args;
use nutriplan::models::{
    ActivityLevel, Gender, MedicalCondition, PregnancyStatus, SportActivity, UserProfile,
};

/// Biometric profile flags
#[derive(Args)]
pub struct ProfileArgs {
    /// Biological sex (male, female)
    #[arg(long)]
    gender: Gender,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Height (cm)
    #[arg(long)]
    height: f64,

    /// Body weight (kg)
    #[arg(long)]
    weight: f64,

    /// Target body weight (kg)
    #[arg(long)]
    target_weight: Option<f64>,

    /// Activity level (sedentary, light, moderate, active, very-active)
    #[arg(long, default_value = "sedentary")]
    activity: ActivityLevel,

    /// Primary sport activity, e.g. strength-bodybuilding
    #[arg(long)]
    sport: Option<SportActivity>,

    /// Current body-fat percentage
    #[arg(long)]
    body_fat: Option<f64>,

    /// Pregnancy status (none, pregnant, breastfeeding, menopause)
    #[arg(long, default_value = "none")]
    pregnancy: PregnancyStatus,

    /// Chronic condition; repeat for several
    #[arg(long = "condition")]
    conditions: Vec<MedicalCondition>,
}

impl ProfileArgs {
    /// Build the profile consumed by the calculation core
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            target_weight_kg: self.target_weight,
            sport_activity: self.sport,
            current_body_fat_percentage: self.body_fat,
            pregnancy_status: self.pregnancy,
            chronic_conditions: self.conditions,
            ..UserProfile::new(
                self.gender,
                self.age,
                self.height,
                self.weight,
                self.activity,
            )
        }
    }
}
