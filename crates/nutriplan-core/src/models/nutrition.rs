// ABOUTME: Macro set definitions emitted by the calculation engine
// ABOUTME: Macros, PhaseMacros and Atwater energy factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};

/// Energy per gram of protein (kcal)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy per gram of carbohydrate (kcal)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// Energy per gram of fat (kcal)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Calorie target with its macro split
///
/// All values are rounded to whole units by the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl Macros {
    /// Energy implied by the gram values
    #[must_use]
    pub fn energy_from_macros(&self) -> f64 {
        self.fat_g.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein_g
                .mul_add(KCAL_PER_GRAM_PROTEIN, self.carbs_g * KCAL_PER_GRAM_CARBS),
        )
    }

    /// Gram values without the calorie total
    #[must_use]
    pub const fn phase_macros(&self) -> PhaseMacros {
        PhaseMacros {
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}

/// Per-phase gram values; calories are stored on the phase itself
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhaseMacros {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl PhaseMacros {
    /// Energy implied by the gram values
    #[must_use]
    pub fn energy(&self) -> f64 {
        Macros {
            calories: 0.0,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
        .energy_from_macros()
    }
}
