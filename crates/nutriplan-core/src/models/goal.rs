// ABOUTME: Goal selection input and the diet protocol vocabularies used for macro splits
// ABOUTME: Goal, GoalSelection, DietProtocol and CarbCycleDay definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};

/// Body-weight goal driving the calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Sustained fat loss
    #[serde(alias = "lose_weight")]
    Lose,
    /// Hold current weight
    Maintain,
    /// Lean muscle gain
    #[serde(alias = "gain_muscle")]
    Gain,
    /// Short, aggressive fat-loss block
    MiniCut,
}

string_vocabulary!(Goal {
    Lose => "lose",
    Maintain => "maintain",
    Gain => "gain",
    MiniCut => "mini_cut",
});

/// Goal plus its modifier
///
/// The modifier is a fraction in `[0, 1]`: the deficit for `Lose` and
/// `MiniCut`. It is carried but not used for `Gain` (fixed surplus) or
/// `Maintain`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalSelection {
    /// Selected goal
    pub goal: Goal,
    /// Deficit or surplus fraction
    #[serde(default)]
    pub modifier: f64,
}

impl GoalSelection {
    /// Create a goal selection
    #[must_use]
    pub const fn new(goal: Goal, modifier: f64) -> Self {
        Self { goal, modifier }
    }

    /// Maintenance with no modifier
    #[must_use]
    pub const fn maintain() -> Self {
        Self::new(Goal::Maintain, 0.0)
    }
}

/// Dietary protocol selecting the macro split strategy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietProtocol {
    /// No special protocol
    #[default]
    Standard,
    /// Ketogenic split
    Keto,
    /// Carbohydrate cycling by day type
    CarbCycling,
}

string_vocabulary!(DietProtocol {
    Standard => "standard",
    Keto => "keto",
    CarbCycling => "carb_cycling",
});

/// Day type for carbohydrate cycling
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CarbCycleDay {
    /// Heavy training day
    High,
    /// Moderate training day
    Medium,
    /// Rest day
    Low,
    /// No cycling preference
    #[default]
    Normal,
}

string_vocabulary!(CarbCycleDay {
    High => "high",
    Medium => "medium",
    Low => "low",
    Normal => "normal",
});
