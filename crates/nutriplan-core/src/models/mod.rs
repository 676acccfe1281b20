// ABOUTME: Core data models shared between the calculation engine and its callers
// ABOUTME: Profile and goal inputs, macro sets, plan results and body composition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! # Core Models
//!
//! All enum vocabularies here are shared contracts with adjacent persistence and
//! UI layers, so their serialized names are stable `snake_case` strings.

/// Generates `as_str`, `Display` and `FromStr` for a closed string vocabulary.
macro_rules! string_vocabulary {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Every member of the vocabulary, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable serialized name
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.as_str() == normalized)
                    .ok_or_else(|| {
                        $crate::errors::AppError::invalid_input(format!(
                            "unknown {} '{s}'",
                            stringify!($name)
                        ))
                    })
            }
        }
    };
}

/// Body composition measurements and analysis results
pub mod body_composition;
/// Ideal body-fat ranges and target suggestions
pub mod body_fat_target;
/// Goal selection and diet protocol vocabularies
pub mod goal;
/// Macro sets and energy constants
pub mod nutrition;
/// Plan phases, plan results and guideline blocks
pub mod plan;
/// User biometric profile and its vocabularies
pub mod profile;

pub use body_composition::{
    BodyCompositionResult, BodyFatAssessment, BodyFatCategory, BodyMeasurements,
    CompositionSummary, MuscularityAssessment, MuscularityCategory, RiskLevel, WaistAssessment,
    WaistHipRatioAssessment,
};
pub use body_fat_target::{BodyFatRange, BodyFatStatus, BodyFatSuggestion, BodyFatTargetResult};
pub use goal::{CarbCycleDay, DietProtocol, Goal, GoalSelection};
pub use nutrition::{Macros, PhaseMacros};
pub use plan::{GuidelineBlock, PhaseType, PlanPhase, PlanResult, GUIDELINE_SECTION_MARKER};
pub use profile::{
    ActivityLevel, Gender, MedicalCondition, PregnancyStatus, SportActivity, UserProfile,
};
