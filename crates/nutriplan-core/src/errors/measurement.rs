// ABOUTME: Validation errors for anthropometric body measurements
// ABOUTME: Returned by body composition analysis when circumference geometry is impossible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use thiserror::Error;

/// Reasons a set of circumference measurements cannot produce a body-fat estimate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    /// A core measurement was zero or negative
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending measurement
        field: &'static str,
        /// Supplied value
        value: f64,
    },

    /// Male formula requires waist strictly greater than neck
    #[error("waist ({waist_cm} cm) must be greater than neck ({neck_cm} cm)")]
    WaistNotAboveNeck {
        /// Waist circumference in cm
        waist_cm: f64,
        /// Neck circumference in cm
        neck_cm: f64,
    },

    /// Female formula requires waist + hip strictly greater than neck
    #[error("waist + hip ({sum_cm} cm) must be greater than neck ({neck_cm} cm)")]
    WaistHipNotAboveNeck {
        /// Waist plus hip circumference in cm
        sum_cm: f64,
        /// Neck circumference in cm
        neck_cm: f64,
    },

    /// Female formula requires a hip circumference
    #[error("hip circumference is required for female measurements")]
    MissingHip,

    /// Measurements produced a non-positive body density
    #[error("measurements produce an invalid body density ({0})")]
    InvalidDensity(f64),
}

impl MeasurementError {
    /// Stable machine-readable identifier for this error
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NonPositive { .. } => "non_positive",
            Self::WaistNotAboveNeck { .. } => "waist_not_above_neck",
            Self::WaistHipNotAboveNeck { .. } => "waist_hip_not_above_neck",
            Self::MissingHip => "missing_hip",
            Self::InvalidDensity(_) => "invalid_density",
        }
    }
}
