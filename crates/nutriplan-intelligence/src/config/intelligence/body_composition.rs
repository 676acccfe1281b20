// ABOUTME: Body composition configuration for circumference-based fat estimation
// ABOUTME: Configures muscularity correction, waist risk thresholds and category cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Body Composition Configuration
//!
//! The muscularity baselines and correction clamp are heuristic tuning values;
//! they are preserved as-is for output parity.
//!
//! # Scientific References
//!
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for U.S. Navy men
//!   and women from body circumferences and height. Naval Health Research Center Report 84-11.
//! - Siri, W.E. (1961). Body composition from fluid spaces and density.
//! - WHO (2008). Waist circumference and waist-hip ratio: report of a WHO expert consultation.

use super::nutrition::GenderedValue;
use serde::{Deserialize, Serialize};

/// Body composition analysis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Correction of the raw circumference estimate
    pub correction: CompositionCorrectionConfig,
    /// Central adiposity risk thresholds
    pub risk: WaistRiskConfig,
    /// Body-fat category cutoffs
    pub body_fat_categories: BodyFatCategoryConfig,
    /// Muscularity index category cutoffs
    pub muscularity_categories: MuscularityCategoryConfig,
}

/// Correction applied to the raw estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionCorrectionConfig {
    /// Lower clamp applied to the raw estimate before correction: 2%
    pub min_body_fat_percent: f64,
    /// Baseline muscularity index: 19.5 male / 15.5 female
    pub muscularity_baseline: GenderedValue,
    /// Largest correction in either direction: 4 percentage points
    pub max_correction: f64,
}

/// Waist and waist-to-hip thresholds (strictly-greater-than means at risk)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaistRiskConfig {
    /// Waist: 102 cm male / 88 cm female
    pub waist_cm: GenderedValue,
    /// Waist-to-hip ratio: 0.95 male / 0.86 female
    pub waist_hip_ratio: GenderedValue,
}

/// Fixed body-fat category breakpoints
///
/// Below `below_baseline_max` is below baseline, up to and including
/// `fitness_max` is fitness, up to and including `general_health_max` is
/// general health, above that is high.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatCategoryConfig {
    /// 10 male / 16 female
    pub below_baseline_max: GenderedValue,
    /// 18 male / 25 female
    pub fitness_max: GenderedValue,
    /// 25 male / 30 female
    pub general_health_max: GenderedValue,
}

/// Muscularity index cutoffs (inclusive upper bounds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscularityCategoryConfig {
    /// Low: 17.9 male / 13.9 female
    pub low_max: GenderedValue,
    /// Normal: 20 male / 16 female
    pub normal_max: GenderedValue,
    /// Advanced: 22 male / 18 female
    pub advanced_max: GenderedValue,
    /// Very high for male profiles: 25; above flags possible enhancement
    pub male_very_high_max: f64,
}

impl Default for CompositionCorrectionConfig {
    fn default() -> Self {
        Self {
            min_body_fat_percent: 2.0,
            muscularity_baseline: GenderedValue::new(19.5, 15.5),
            max_correction: 4.0,
        }
    }
}

impl Default for WaistRiskConfig {
    fn default() -> Self {
        Self {
            waist_cm: GenderedValue::new(102.0, 88.0),
            waist_hip_ratio: GenderedValue::new(0.95, 0.86),
        }
    }
}

impl Default for BodyFatCategoryConfig {
    fn default() -> Self {
        Self {
            below_baseline_max: GenderedValue::new(10.0, 16.0),
            fitness_max: GenderedValue::new(18.0, 25.0),
            general_health_max: GenderedValue::new(25.0, 30.0),
        }
    }
}

impl Default for MuscularityCategoryConfig {
    fn default() -> Self {
        Self {
            low_max: GenderedValue::new(17.9, 13.9),
            normal_max: GenderedValue::new(20.0, 16.0),
            advanced_max: GenderedValue::new(22.0, 18.0),
            male_very_high_max: 25.0,
        }
    }
}
