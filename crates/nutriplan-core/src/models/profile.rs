// ABOUTME: User biometric profile consumed by every calculation in the engine
// ABOUTME: Gender, activity level, sport activity, pregnancy status and medical condition vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};

/// Biological sex used by the metabolic and anthropometric formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

string_vocabulary!(Gender { Male => "male", Female => "female" });

/// Ordinal daily activity level used for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily exercise or a physical job
    VeryActive,
}

string_vocabulary!(ActivityLevel {
    Sedentary => "sedentary",
    Light => "light",
    Moderate => "moderate",
    Active => "active",
    VeryActive => "very_active",
});

impl ActivityLevel {
    /// Whether the level counts as "at least moderately active"
    #[must_use]
    pub fn is_at_least_moderate(self) -> bool {
        self >= Self::Moderate
    }
}

/// Primary sport, used for ideal body-fat ranges and activity recommendations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportActivity {
    /// Mixed recreational training
    GeneralFitness,
    /// Hypertrophy-focused resistance training
    StrengthBodybuilding,
    /// Maximal strength training
    Powerlifting,
    /// Distance running
    EnduranceRunning,
    /// Road or track cycling
    Cycling,
    /// Swimming
    Swimming,
    /// Football, basketball and similar
    TeamSports,
    /// Martial arts, boxing, wrestling
    CombatSports,
    /// Mixed-modal conditioning
    Crossfit,
    /// Yoga or pilates
    YogaPilates,
}

string_vocabulary!(SportActivity {
    GeneralFitness => "general_fitness",
    StrengthBodybuilding => "strength_bodybuilding",
    Powerlifting => "powerlifting",
    EnduranceRunning => "endurance_running",
    Cycling => "cycling",
    Swimming => "swimming",
    TeamSports => "team_sports",
    CombatSports => "combat_sports",
    Crossfit => "crossfit",
    YogaPilates => "yoga_pilates",
});

impl SportActivity {
    /// Sports that count as structured athletic training
    #[must_use]
    pub const fn is_athletic(self) -> bool {
        !matches!(self, Self::GeneralFitness | Self::YogaPilates)
    }
}

/// Reproductive status; only meaningful for female profiles
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyStatus {
    /// No special status
    #[default]
    None,
    /// Currently pregnant
    Pregnant,
    /// Currently breastfeeding
    Breastfeeding,
    /// Peri- or post-menopausal
    Menopause,
}

string_vocabulary!(PregnancyStatus {
    None => "none",
    Pregnant => "pregnant",
    Breastfeeding => "breastfeeding",
    Menopause => "menopause",
});

/// Chronic conditions that attach dietary guideline blocks to a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    /// Type 2 diabetes
    Type2Diabetes,
    /// High blood pressure
    Hypertension,
    /// Underactive thyroid
    Hypothyroidism,
    /// Polycystic ovary syndrome
    Pcos,
    /// Elevated LDL or total cholesterol
    HighCholesterol,
    /// Chronic kidney disease
    KidneyDisease,
    /// Coronary or other heart disease
    HeartDisease,
}

string_vocabulary!(MedicalCondition {
    Type2Diabetes => "type2_diabetes",
    Hypertension => "hypertension",
    Hypothyroidism => "hypothyroidism",
    Pcos => "pcos",
    HighCholesterol => "high_cholesterol",
    KidneyDisease => "kidney_disease",
    HeartDisease => "heart_disease",
});

/// Immutable biometric profile supplied by the caller
///
/// Numeric fields are not validated; non-positive values flow through the
/// formulas and surface as implausible or NaN results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Desired body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Daily activity level
    pub activity_level: ActivityLevel,
    /// Primary sport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_activity: Option<SportActivity>,
    /// Current body-fat percentage, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_body_fat_percentage: Option<f64>,
    /// Pregnancy, breastfeeding or menopause status
    #[serde(default)]
    pub pregnancy_status: PregnancyStatus,
    /// Chronic conditions, in the order the user reported them
    #[serde(default)]
    pub chronic_conditions: Vec<MedicalCondition>,
}

impl UserProfile {
    /// Minimal profile with no optional fields set
    #[must_use]
    pub const fn new(
        gender: Gender,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            gender,
            age,
            height_cm,
            weight_kg,
            target_weight_kg: None,
            activity_level,
            sport_activity: None,
            current_body_fat_percentage: None,
            pregnancy_status: PregnancyStatus::None,
            chronic_conditions: Vec::new(),
        }
    }

    /// Pregnancy status, ignored for male profiles
    #[must_use]
    pub fn effective_pregnancy_status(&self) -> PregnancyStatus {
        match self.gender {
            Gender::Female => self.pregnancy_status,
            Gender::Male => PregnancyStatus::None,
        }
    }

    /// Target weight when it is a finite value below the current weight
    #[must_use]
    pub fn weight_loss_target(&self) -> Option<f64> {
        self.target_weight_kg
            .filter(|target| target.is_finite() && *target > 0.0 && *target < self.weight_kg)
    }

    /// Target weight when it is a finite value above the current weight
    #[must_use]
    pub fn weight_gain_target(&self) -> Option<f64> {
        self.target_weight_kg
            .filter(|target| target.is_finite() && *target > self.weight_kg)
    }

    /// Whether the profile describes a structured athlete
    #[must_use]
    pub fn is_athlete(&self) -> bool {
        self.sport_activity.is_some_and(SportActivity::is_athletic)
    }
}
