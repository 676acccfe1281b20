// ABOUTME: Ideal body-fat range lookups and suggested target weights
// ABOUTME: BodyFatRange, BodyFatStatus, BodyFatTargetResult and BodyFatSuggestion definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};

/// Inclusive body-fat percentage range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatRange {
    /// Lower bound (%)
    pub min: f64,
    /// Upper bound (%)
    pub max: f64,
}

impl BodyFatRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Arithmetic mean of the bounds
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Current body fat relative to the ideal range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatStatus {
    /// Below the range
    Below,
    /// Above the range
    Above,
    /// Within the range
    Ideal,
}

/// Classification of current body fat against a sport-specific range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatTargetResult {
    /// Ideal range for the gender and sport
    pub ideal_range: BodyFatRange,
    /// Recommendation text for the status
    pub recommendation: String,
    /// Classification
    pub status: BodyFatStatus,
}

/// Classification plus a back-solved target body weight
///
/// Only produced when current body fat is above the ideal range and the
/// back-solve yields a finite positive weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatSuggestion {
    /// Ideal range for the gender and sport
    pub ideal_range: BodyFatRange,
    /// Recommendation text for the status
    pub recommendation: String,
    /// Always [`BodyFatStatus::Above`]
    pub status: BodyFatStatus,
    /// Weight (kg, 1 decimal) at which lean mass would sit at the range midpoint
    pub suggested_target_weight_kg: f64,
}
