// ABOUTME: Per-phase training and step-count recommendations
// ABOUTME: Positional progression for athletes and non-athletes, with recovery phases kept light
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use nutriplan_core::models::{PhaseType, PlanPhase};

/// Training stage derived from a phase's position in the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrainingStage {
    Recovery,
    Foundation,
    Progression,
    Advanced,
}

impl TrainingStage {
    const fn for_phase(index: usize, phase_type: PhaseType) -> Self {
        if phase_type.is_recovery() {
            return Self::Recovery;
        }
        match index {
            0 | 1 => Self::Foundation,
            2 | 3 => Self::Progression,
            _ => Self::Advanced,
        }
    }

    const fn recommendation(self, athlete: bool) -> &'static str {
        match (athlete, self) {
            (true, Self::Recovery) => "Deload: cut training volume by 40-50% and keep intensity moderate so you recover fully.",
            (true, Self::Foundation) => "Master technique on your main lifts and add 2-3 low-intensity cardio sessions per week.",
            (true, Self::Progression) => "Apply progressive overload: add 2-5% load once every set is completed with good form.",
            (true, Self::Advanced) => "Introduce advanced techniques such as supersets and drop sets, plus one HIIT session per week.",
            (false, Self::Recovery) => "Maintain your current activity level; there is no pressure to do more during this phase.",
            (false, Self::Foundation) => "Start with a 15-20 minute walk every day.",
            (false, Self::Progression) => "Add 1000-1500 steps per day to your current daily average.",
            (false, Self::Advanced) => "Add 500 steps per day each week until you reach 8000-10000 steps per day.",
        }
    }
}

/// Attach an activity recommendation to every phase by position
pub(super) fn annotate(phases: &mut [PlanPhase], athlete: bool) {
    for (index, phase) in phases.iter_mut().enumerate() {
        let stage = TrainingStage::for_phase(index, phase.phase_type);
        phase.activity_recommendation = Some(stage.recommendation(athlete).to_owned());
    }
}
