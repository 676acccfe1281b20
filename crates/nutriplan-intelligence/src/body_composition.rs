// ABOUTME: Circumference-based body composition analysis with muscularity and risk corrections
// ABOUTME: Navy body-density estimate, fat/lean mass, muscularity index and central adiposity signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Body Composition Analyzer
//!
//! The raw estimate comes from the U.S. Navy circumference equations converted
//! through the Siri body-density formula. Three estimates are then averaged:
//!
//! 1. the raw estimate, floored at a minimum percentage
//! 2. the raw estimate corrected by how far the implied muscularity index sits
//!    from a gender baseline (clamped)
//! 3. the raw estimate when a waist or waist-to-hip signal flags central
//!    adiposity, otherwise the mean of the first two
//!
//! # Scientific References
//!
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Naval Health Research Center Report 84-11.
//! - Siri, W.E. (1961). Body composition from fluid spaces and density.

use crate::config::intelligence::BodyCompositionConfig;
use nutriplan_core::errors::MeasurementError;
use nutriplan_core::models::{
    BodyCompositionResult, BodyFatAssessment, BodyFatCategory, BodyMeasurements,
    CompositionSummary, Gender, MuscularityAssessment, MuscularityCategory, RiskLevel,
    WaistAssessment, WaistHipRatioAssessment,
};
use tracing::debug;

const AT_RISK_LABEL: &str = "Elevated health risk";
const NORMAL_RISK_LABEL: &str = "Within healthy range";
const NOT_MEASURED_LABEL: &str = "Not measured";

const HIGH_BODY_FAT_RECOMMENDATION: &str = "Body fat is in the high range. Focus on a moderate calorie deficit, daily movement and regular strength training, and consider a check-up with your physician.";
const VISCERAL_FAT_RECOMMENDATION: &str = "Your waist measurements point to abdominal (visceral) fat. Prioritise reducing it through a modest deficit, fewer refined carbohydrates and more daily activity.";
const RESISTANCE_TRAINING_RECOMMENDATION: &str = "Muscle mass is below average. Add progressive resistance training 2-4 times per week with adequate protein to build lean mass.";
const RECOMPOSITION_RECOMMENDATION: &str = "You are in a healthy range. A body recomposition phase (strength training at maintenance calories with high protein) can further improve your shape.";
const MAINTENANCE_RECOMMENDATION: &str = "Excellent body composition. Keep up your current training and nutrition to maintain it.";

/// Estimate body-fat percentage from circumferences (U.S. Navy method)
///
/// Male: density = 1.0324 - 0.19077 x log10(waist - neck) + 0.15456 x log10(height)
/// Female: density = 1.29579 - 0.35004 x log10(waist + hip - neck) + 0.22100 x log10(height)
/// Percentage = 495 / density - 450, clamped to `[0, 100]`.
///
/// # Errors
///
/// Returns a [`MeasurementError`] when height, neck, waist or a supplied hip
/// are not positive, when a female hip is missing, or when the circumference
/// difference inside the logarithm is not positive.
pub fn navy_body_fat_percentage(measurements: &BodyMeasurements) -> Result<f64, MeasurementError> {
    require_positive("height_cm", measurements.height_cm)?;
    require_positive("neck_cm", measurements.neck_cm)?;
    require_positive("waist_cm", measurements.waist_cm)?;
    if let Some(hip_cm) = measurements.hip_cm {
        require_positive("hip_cm", hip_cm)?;
    }

    let log_height = measurements.height_cm.log10();
    let density = match measurements.gender {
        Gender::Male => {
            if measurements.waist_cm <= measurements.neck_cm {
                return Err(MeasurementError::WaistNotAboveNeck {
                    waist_cm: measurements.waist_cm,
                    neck_cm: measurements.neck_cm,
                });
            }
            0.15456f64.mul_add(
                log_height,
                (-0.19077f64).mul_add((measurements.waist_cm - measurements.neck_cm).log10(), 1.0324),
            )
        }
        Gender::Female => {
            let hip_cm = measurements.hip_cm.ok_or(MeasurementError::MissingHip)?;
            let sum_cm = measurements.waist_cm + hip_cm;
            if sum_cm <= measurements.neck_cm {
                return Err(MeasurementError::WaistHipNotAboveNeck {
                    sum_cm,
                    neck_cm: measurements.neck_cm,
                });
            }
            0.22100f64.mul_add(
                log_height,
                (-0.35004f64).mul_add((sum_cm - measurements.neck_cm).log10(), 1.29579),
            )
        }
    };

    if !density.is_finite() || density <= 0.0 {
        return Err(MeasurementError::InvalidDensity(density));
    }

    Ok((495.0 / density - 450.0).clamp(0.0, 100.0))
}

/// Analyze body composition from circumference measurements
///
/// # Errors
///
/// Returns a [`MeasurementError`] when the measurements cannot produce an
/// estimate; see [`navy_body_fat_percentage`].
pub fn analyze_body_composition(
    measurements: &BodyMeasurements,
    config: &BodyCompositionConfig,
) -> Result<BodyCompositionResult, MeasurementError> {
    let gender = measurements.gender;
    let navy_percentage = navy_body_fat_percentage(measurements)?;
    let height_m_sq = (measurements.height_cm / 100.0).powi(2);

    // Raw estimate, floored
    let bf1 = navy_percentage.max(config.correction.min_body_fat_percent);

    // Muscularity correction
    let implied_lean_kg = measurements.weight_kg * (1.0 - bf1 / 100.0);
    let implied_index = implied_lean_kg / height_m_sq;
    let max_correction = config.correction.max_correction;
    let correction = (implied_index - config.correction.muscularity_baseline.for_gender(gender))
        .clamp(-max_correction, max_correction);
    let bf2 = bf1 - correction;

    // Central adiposity signals
    let waist_at_risk = measurements.waist_cm > config.risk.waist_cm.for_gender(gender);
    let whr = measurements.hip_cm.map(|hip_cm| measurements.waist_cm / hip_cm);
    let whr_at_risk = whr.is_some_and(|ratio| ratio > config.risk.waist_hip_ratio.for_gender(gender));
    let any_risk = waist_at_risk || whr_at_risk;

    let bf3 = if any_risk { bf1 } else { (bf1 + bf2) / 2.0 };

    let percentage = round_to_1(((bf1 + bf2 + bf3) / 3.0).clamp(0.0, 100.0));
    let fat_mass_kg = round_to_1(measurements.weight_kg * percentage / 100.0);
    let lean_mass_kg = round_to_1(measurements.weight_kg - fat_mass_kg);
    let muscularity_index = round_to_1(lean_mass_kg / height_m_sq);

    debug!(
        navy_percentage,
        bf1, bf2, bf3, percentage, muscularity_index, any_risk, "Body composition estimate"
    );

    let body_fat_category = categorize_body_fat(percentage, gender, config);
    let muscularity_category = categorize_muscularity(muscularity_index, gender, config);

    let risk_level = if body_fat_category == BodyFatCategory::High || any_risk {
        RiskLevel::High
    } else if percentage > config.body_fat_categories.fitness_max.for_gender(gender) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let primary_recommendation = if body_fat_category == BodyFatCategory::High {
        HIGH_BODY_FAT_RECOMMENDATION
    } else if any_risk {
        VISCERAL_FAT_RECOMMENDATION
    } else if muscularity_category == MuscularityCategory::Low {
        RESISTANCE_TRAINING_RECOMMENDATION
    } else if body_fat_category == BodyFatCategory::GeneralHealth {
        RECOMPOSITION_RECOMMENDATION
    } else {
        MAINTENANCE_RECOMMENDATION
    };

    Ok(BodyCompositionResult {
        body_fat: BodyFatAssessment {
            percentage,
            navy_percentage,
            category: body_fat_category,
            category_label: body_fat_category.label().to_owned(),
            fat_mass_kg,
            lean_mass_kg,
        },
        muscularity: MuscularityAssessment {
            value: muscularity_index,
            category: muscularity_category,
            category_label: muscularity_category.label().to_owned(),
        },
        waist_circumference: WaistAssessment {
            value_cm: measurements.waist_cm,
            is_at_risk: waist_at_risk,
            risk_label: risk_label(Some(waist_at_risk)).to_owned(),
        },
        whr: WaistHipRatioAssessment {
            value: whr.map(|ratio| (ratio * 100.0).round() / 100.0),
            is_at_risk: whr_at_risk,
            risk_label: risk_label(whr.map(|_| whr_at_risk)).to_owned(),
        },
        summary: CompositionSummary {
            risk_level,
            primary_recommendation: primary_recommendation.to_owned(),
        },
    })
}

/// Body-fat category from fixed gender breakpoints
#[must_use]
pub fn categorize_body_fat(
    percentage: f64,
    gender: Gender,
    config: &BodyCompositionConfig,
) -> BodyFatCategory {
    let cutoffs = &config.body_fat_categories;
    if percentage < cutoffs.below_baseline_max.for_gender(gender) {
        BodyFatCategory::BelowBaseline
    } else if percentage <= cutoffs.fitness_max.for_gender(gender) {
        BodyFatCategory::Fitness
    } else if percentage <= cutoffs.general_health_max.for_gender(gender) {
        BodyFatCategory::GeneralHealth
    } else {
        BodyFatCategory::High
    }
}

/// Muscularity category; only male profiles can reach the enhancement flag
#[must_use]
pub fn categorize_muscularity(
    index: f64,
    gender: Gender,
    config: &BodyCompositionConfig,
) -> MuscularityCategory {
    let cutoffs = &config.muscularity_categories;
    if index <= cutoffs.low_max.for_gender(gender) {
        MuscularityCategory::Low
    } else if index <= cutoffs.normal_max.for_gender(gender) {
        MuscularityCategory::Normal
    } else if index <= cutoffs.advanced_max.for_gender(gender) {
        MuscularityCategory::Advanced
    } else if gender == Gender::Female || index <= cutoffs.male_very_high_max {
        MuscularityCategory::VeryHigh
    } else {
        MuscularityCategory::PossiblePerformanceEnhancement
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), MeasurementError> {
    // NaN fails the finiteness check
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeasurementError::NonPositive { field, value })
    }
}

const fn risk_label(at_risk: Option<bool>) -> &'static str {
    match at_risk {
        Some(true) => AT_RISK_LABEL,
        Some(false) => NORMAL_RISK_LABEL,
        None => NOT_MEASURED_LABEL,
    }
}

/// Round to 1 decimal place
fn round_to_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BodyCompositionConfig {
        BodyCompositionConfig::default()
    }

    #[test]
    fn test_body_fat_breakpoints_are_inclusive_above_baseline() {
        let config = config();
        assert_eq!(
            categorize_body_fat(9.9, Gender::Male, &config),
            BodyFatCategory::BelowBaseline
        );
        assert_eq!(
            categorize_body_fat(10.0, Gender::Male, &config),
            BodyFatCategory::Fitness
        );
        assert_eq!(
            categorize_body_fat(18.0, Gender::Male, &config),
            BodyFatCategory::Fitness
        );
        assert_eq!(
            categorize_body_fat(25.0, Gender::Male, &config),
            BodyFatCategory::GeneralHealth
        );
        assert_eq!(
            categorize_body_fat(25.1, Gender::Male, &config),
            BodyFatCategory::High
        );
        assert_eq!(
            categorize_body_fat(30.0, Gender::Female, &config),
            BodyFatCategory::GeneralHealth
        );
        assert_eq!(
            categorize_body_fat(15.9, Gender::Female, &config),
            BodyFatCategory::BelowBaseline
        );
    }

    #[test]
    fn test_enhancement_flag_is_male_only() {
        let config = config();
        assert_eq!(
            categorize_muscularity(26.0, Gender::Male, &config),
            MuscularityCategory::PossiblePerformanceEnhancement
        );
        assert_eq!(
            categorize_muscularity(25.0, Gender::Male, &config),
            MuscularityCategory::VeryHigh
        );
        assert_eq!(
            categorize_muscularity(26.0, Gender::Female, &config),
            MuscularityCategory::VeryHigh
        );
        assert_eq!(
            categorize_muscularity(13.9, Gender::Female, &config),
            MuscularityCategory::Low
        );
    }

    #[test]
    fn test_require_positive_rejects_nan() {
        assert!(require_positive("neck_cm", f64::NAN).is_err());
        assert!(require_positive("neck_cm", 0.0).is_err());
        assert!(require_positive("neck_cm", 35.0).is_ok());
    }
}
