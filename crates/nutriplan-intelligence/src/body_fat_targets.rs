// ABOUTME: Sport-specific ideal body-fat ranges and suggested target weights
// ABOUTME: Classifies current body fat against the range and back-solves a goal weight at constant lean mass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Body-Fat Target Advisor

use nutriplan_core::models::{
    BodyFatRange, BodyFatStatus, BodyFatSuggestion, BodyFatTargetResult, Gender, SportActivity,
};

const BELOW_RECOMMENDATION: &str = "Your body fat is below the ideal range for your sport. Consider a small calorie surplus to support hormones, recovery and performance.";
const ABOVE_RECOMMENDATION: &str = "Your body fat is above the ideal range for your sport. A gradual fat-loss phase while keeping protein high will bring you into range.";
const IDEAL_RECOMMENDATION: &str = "Your body fat is within the ideal range for your sport. Focus on maintaining it while you train.";

/// Ideal body-fat range (%) for a gender and primary sport
#[must_use]
pub const fn ideal_body_fat_range(gender: Gender, sport: SportActivity) -> BodyFatRange {
    match gender {
        Gender::Male => match sport {
            SportActivity::GeneralFitness | SportActivity::YogaPilates => {
                BodyFatRange::new(14.0, 20.0)
            }
            SportActivity::StrengthBodybuilding => BodyFatRange::new(10.0, 15.0),
            SportActivity::Powerlifting => BodyFatRange::new(12.0, 20.0),
            SportActivity::EnduranceRunning | SportActivity::CombatSports => {
                BodyFatRange::new(8.0, 14.0)
            }
            SportActivity::Cycling => BodyFatRange::new(8.0, 15.0),
            SportActivity::Swimming | SportActivity::TeamSports | SportActivity::Crossfit => {
                BodyFatRange::new(10.0, 16.0)
            }
        },
        Gender::Female => match sport {
            SportActivity::GeneralFitness => BodyFatRange::new(21.0, 28.0),
            SportActivity::StrengthBodybuilding => BodyFatRange::new(18.0, 23.0),
            SportActivity::Powerlifting | SportActivity::YogaPilates => {
                BodyFatRange::new(20.0, 28.0)
            }
            SportActivity::EnduranceRunning => BodyFatRange::new(14.0, 22.0),
            SportActivity::Cycling | SportActivity::CombatSports => BodyFatRange::new(15.0, 22.0),
            SportActivity::Swimming | SportActivity::TeamSports => BodyFatRange::new(16.0, 24.0),
            SportActivity::Crossfit => BodyFatRange::new(16.0, 23.0),
        },
    }
}

/// Classify current body fat against the ideal range for the sport
#[must_use]
pub fn calculate_ideal_body_fat(
    gender: Gender,
    sport: SportActivity,
    current_body_fat: f64,
) -> BodyFatTargetResult {
    let ideal_range = ideal_body_fat_range(gender, sport);
    let (status, recommendation) = if current_body_fat < ideal_range.min {
        (BodyFatStatus::Below, BELOW_RECOMMENDATION)
    } else if current_body_fat > ideal_range.max {
        (BodyFatStatus::Above, ABOVE_RECOMMENDATION)
    } else {
        (BodyFatStatus::Ideal, IDEAL_RECOMMENDATION)
    };

    BodyFatTargetResult {
        ideal_range,
        recommendation: recommendation.to_owned(),
        status,
    }
}

/// Suggest a target body weight when current body fat is above the ideal range
///
/// Lean mass is held constant and the weight is solved for the range midpoint:
/// `target = weight x (1 - current / 100) / (1 - midpoint / 100)`, rounded to
/// 1 decimal. Returns `None` when the status is not [`BodyFatStatus::Above`]
/// or the result is not a finite positive weight.
#[must_use]
pub fn suggest_body_fat_target(
    gender: Gender,
    sport: SportActivity,
    current_body_fat: f64,
    current_weight_kg: f64,
) -> Option<BodyFatSuggestion> {
    let result = calculate_ideal_body_fat(gender, sport, current_body_fat);
    if result.status != BodyFatStatus::Above {
        return None;
    }

    let lean_mass_kg = current_weight_kg * (1.0 - current_body_fat / 100.0);
    let target_kg = lean_mass_kg / (1.0 - result.ideal_range.midpoint() / 100.0);
    let suggested_target_weight_kg = (target_kg * 10.0).round() / 10.0;
    if !suggested_target_weight_kg.is_finite() || suggested_target_weight_kg <= 0.0 {
        return None;
    }

    Some(BodyFatSuggestion {
        ideal_range: result.ideal_range,
        recommendation: result.recommendation,
        status: result.status,
        suggested_target_weight_kg,
    })
}
