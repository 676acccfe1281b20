// ABOUTME: Multi-phase dietary plan records produced by the plan generator
// ABOUTME: PhaseType, PlanPhase, PlanResult and condition guideline blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::nutrition::{Macros, PhaseMacros};

/// Prefix marking a section header inside a flattened guideline list
pub const GUIDELINE_SECTION_MARKER: &str = "### ";

/// Kind of dietary phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PhaseType {
    /// Opening weeks of a deficit, dominated by glycogen and water loss
    WaterLoss,
    /// Sustained fat-loss block
    FatLoss,
    /// Single high-carbohydrate day at maintenance
    Refeed,
    /// Week at maintenance calories inside a long deficit
    DietBreak,
    /// Lean surplus
    MuscleGain,
    /// Short aggressive deficit
    MiniCut,
    /// Energy balance
    Maintenance,
    /// Non-restrictive plan for special populations
    HealthFocus,
}

impl PhaseType {
    /// Phases that count as recovery for activity programming
    #[must_use]
    pub const fn is_recovery(self) -> bool {
        matches!(self, Self::DietBreak | Self::HealthFocus)
    }
}

/// One step of a plan, in chronological order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanPhase {
    /// Phase kind
    pub phase_type: PhaseType,
    /// Display name
    pub name: String,
    /// Human-readable duration
    pub duration_label: String,
    /// Numeric length; `None` for open-ended phases
    pub duration_days: Option<u32>,
    /// Daily energy target (kcal)
    pub calories: f64,
    /// Daily gram targets
    pub macros: PhaseMacros,
    /// Free-text notes
    pub notes: Vec<String>,
    /// Expected weekly loss, for fat-loss type phases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_loss_rate: Option<String>,
    /// What to do when the phase ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_instruction: Option<String>,
    /// Training or step-count guidance for this phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_recommendation: Option<String>,
}

/// Complete plan returned by the generator; never mutated after return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanResult {
    /// Daily calorie target (kcal)
    pub target_calories: f64,
    /// Daily macro targets
    pub target_macros: Macros,
    /// Human-readable overall duration
    pub estimated_duration: String,
    /// Explanation of what the duration includes
    pub duration_context: String,
    /// Phases in chronological order; never empty
    pub phases: Vec<PlanPhase>,
    /// Safety and population warnings
    pub warnings: Vec<String>,
    /// Flattened guideline blocks, headers prefixed with [`GUIDELINE_SECTION_MARKER`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<Vec<String>>,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal the plan was actually built for
    pub goal: Goal,
    /// Sum of phase lengths when every phase is finite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_days: Option<u32>,
}

impl PlanResult {
    /// Phases of the given kind
    pub fn phases_of(&self, phase_type: PhaseType) -> impl Iterator<Item = &PlanPhase> {
        self.phases
            .iter()
            .filter(move |phase| phase.phase_type == phase_type)
    }
}

/// Titled list of dietary guideline bullet points
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuidelineBlock {
    /// Section title
    pub title: String,
    /// Ordered bullet points
    pub points: Vec<String>,
}

impl GuidelineBlock {
    /// Build a block from static text
    #[must_use]
    pub fn from_static(title: &str, points: &[&str]) -> Self {
        Self {
            title: title.to_owned(),
            points: points.iter().map(|point| (*point).to_owned()).collect(),
        }
    }

    /// Flatten blocks into a single list: marker-prefixed title, then points
    #[must_use]
    pub fn flatten(blocks: &[Self]) -> Vec<String> {
        blocks
            .iter()
            .flat_map(|block| {
                std::iter::once(format!("{GUIDELINE_SECTION_MARKER}{}", block.title))
                    .chain(block.points.iter().cloned())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_prefixes_titles() {
        let blocks = [
            GuidelineBlock::from_static("First", &["a", "b"]),
            GuidelineBlock::from_static("Second", &["c"]),
        ];
        let flat = GuidelineBlock::flatten(&blocks);
        assert_eq!(flat, vec!["### First", "a", "b", "### Second", "c"]);
    }
}
