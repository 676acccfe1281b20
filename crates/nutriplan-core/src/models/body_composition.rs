// ABOUTME: Circumference measurements and the derived body composition analysis records
// ABOUTME: Body-fat and muscularity categories, waist risk signals and the risk summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};

use super::profile::Gender;

/// Raw anthropometric input for body composition analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyMeasurements {
    /// Biological sex
    pub gender: Gender,
    /// Height (cm)
    pub height_cm: f64,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Neck circumference (cm)
    pub neck_cm: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Hip circumference (cm); required for female subjects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

/// Body-fat category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    /// Below the healthy baseline
    BelowBaseline,
    /// Athletic range
    Fitness,
    /// Acceptable for general health
    GeneralHealth,
    /// Above healthy range
    High,
}

impl BodyFatCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BelowBaseline => "Below healthy baseline",
            Self::Fitness => "Fitness",
            Self::GeneralHealth => "General health",
            Self::High => "High",
        }
    }
}

/// Muscularity (fat-free mass index) category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscularityCategory {
    /// Below average muscle mass
    Low,
    /// Typical untrained to lightly trained
    Normal,
    /// Well trained
    Advanced,
    /// Close to the natural ceiling
    VeryHigh,
    /// Above the natural ceiling; flags possible performance-enhancing substance use
    PossiblePerformanceEnhancement,
}

impl MuscularityCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::Advanced => "Advanced",
            Self::VeryHigh => "Very high",
            Self::PossiblePerformanceEnhancement => {
                "Exceptionally high (possible performance-enhancing substance use)"
            }
        }
    }
}

/// Overall health-risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No risk signals
    Low,
    /// Body fat above the fitness band
    Medium,
    /// High body fat or a central adiposity signal
    High,
}

/// Body-fat portion of the analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatAssessment {
    /// Final corrected percentage (1 decimal)
    pub percentage: f64,
    /// Uncorrected circumference-formula estimate, clamped to `[0, 100]`
    pub navy_percentage: f64,
    /// Category
    pub category: BodyFatCategory,
    /// Category display label
    pub category_label: String,
    /// Fat mass (kg, 1 decimal)
    pub fat_mass_kg: f64,
    /// Lean mass (kg, 1 decimal)
    pub lean_mass_kg: f64,
}

/// Muscularity index portion of the analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscularityAssessment {
    /// Lean mass / height² (1 decimal)
    pub value: f64,
    /// Category
    pub category: MuscularityCategory,
    /// Category display label
    pub category_label: String,
}

/// Waist circumference risk signal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaistAssessment {
    /// Waist circumference (cm)
    pub value_cm: f64,
    /// Above the gender threshold
    pub is_at_risk: bool,
    /// Display label
    pub risk_label: String,
}

/// Waist-to-hip ratio risk signal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaistHipRatioAssessment {
    /// Ratio (2 decimals), absent when hip was not measured
    pub value: Option<f64>,
    /// Above the gender threshold
    pub is_at_risk: bool,
    /// Display label
    pub risk_label: String,
}

/// Overall verdict
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompositionSummary {
    /// Risk level
    pub risk_level: RiskLevel,
    /// Single most relevant recommendation
    pub primary_recommendation: String,
}

/// Complete body composition analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyCompositionResult {
    /// Body-fat estimate
    pub body_fat: BodyFatAssessment,
    /// Muscularity index
    pub muscularity: MuscularityAssessment,
    /// Waist signal
    pub waist_circumference: WaistAssessment,
    /// Waist-to-hip signal
    pub whr: WaistHipRatioAssessment,
    /// Summary
    pub summary: CompositionSummary,
}
