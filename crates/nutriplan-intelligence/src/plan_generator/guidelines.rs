// ABOUTME: Fixed dietary guideline text for special populations and chronic conditions
// ABOUTME: Static lookup tables turned into titled guideline blocks and plan warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use nutriplan_core::models::{GuidelineBlock, MedicalCondition, PregnancyStatus, UserProfile};

/// Titled bullet list held in static memory
struct StaticGuideline {
    title: &'static str,
    warning: &'static str,
    points: &'static [&'static str],
}

impl StaticGuideline {
    fn block(&self) -> GuidelineBlock {
        GuidelineBlock::from_static(self.title, self.points)
    }
}

static PREGNANCY: StaticGuideline = StaticGuideline {
    title: "Pregnancy Nutrition",
    warning: "Pregnancy: weight loss is not recommended. Calories are set to maintenance plus the pregnancy allowance; confirm targets with your obstetrician or midwife.",
    points: &[
        "Take a folic acid supplement (400 mcg/day) unless your doctor advises otherwise",
        "Eat iron-rich foods (lean red meat, legumes, leafy greens) with a source of vitamin C",
        "Include 2-3 servings of calcium-rich foods daily",
        "Avoid alcohol, raw or undercooked meat, fish and eggs, and unpasteurised dairy",
        "Limit caffeine to 200 mg/day and avoid high-mercury fish",
        "Eat small, frequent meals if nausea or heartburn are a problem",
    ],
};

static BREASTFEEDING: StaticGuideline = StaticGuideline {
    title: "Breastfeeding Nutrition",
    warning: "Breastfeeding: aggressive calorie restriction can reduce milk supply. Calories are set to maintenance plus the lactation allowance.",
    points: &[
        "Drink to thirst; aim for a glass of water at every feed",
        "Keep eating oily fish 1-2 times per week for omega-3 (DHA)",
        "Continue a vitamin D supplement (10 mcg/day)",
        "Limit caffeine and avoid alcohol close to feeds",
        "Gradual weight loss of at most 0.5 kg/week is acceptable once milk supply is established",
    ],
};

static MENOPAUSE: StaticGuideline = StaticGuideline {
    title: "Menopause Nutrition",
    warning: "Menopause: hormonal changes lower energy needs and bone density. Prioritise protein, calcium and strength training.",
    points: &[
        "Aim for 1200 mg calcium and 800-1000 IU vitamin D daily for bone health",
        "Spread protein evenly across meals to preserve muscle mass",
        "Include phytoestrogen sources such as soy and flaxseed",
        "Limit alcohol, caffeine and spicy foods if they trigger hot flushes",
        "Combine resistance training with weight-bearing exercise",
    ],
};

static TYPE2_DIABETES: StaticGuideline = StaticGuideline {
    title: "Type 2 Diabetes",
    warning: "Type 2 diabetes: coordinate carbohydrate intake and any calorie deficit with your doctor, especially if you take glucose-lowering medication.",
    points: &[
        "Choose low glycaemic index carbohydrates and pair them with protein or fat",
        "Distribute carbohydrates evenly across meals",
        "Prefer whole grains, legumes and vegetables over refined starches and sugars",
        "Monitor blood glucose when changing calorie intake or training load",
        "Aim for at least 25-30 g of fibre per day",
    ],
};

static HYPERTENSION: StaticGuideline = StaticGuideline {
    title: "Hypertension",
    warning: "Hypertension: keep sodium low and monitor blood pressure while changing diet or training.",
    points: &[
        "Limit sodium to under 2000 mg/day (about 5 g of salt)",
        "Follow a DASH-style pattern rich in fruit, vegetables and low-fat dairy",
        "Increase potassium-rich foods unless your doctor advises otherwise",
        "Limit alcohol and processed meats",
    ],
};

static HYPOTHYROIDISM: StaticGuideline = StaticGuideline {
    title: "Hypothyroidism",
    warning: "Hypothyroidism: energy expenditure may be lower than estimated. Expect slower progress and keep medication timing consistent.",
    points: &[
        "Take thyroid medication on an empty stomach, away from calcium and iron supplements",
        "Ensure adequate iodine, selenium and zinc intake",
        "Cook cruciferous vegetables rather than eating large raw amounts",
        "Reassess calorie targets after any change in medication dose",
    ],
};

static PCOS: StaticGuideline = StaticGuideline {
    title: "PCOS",
    warning: "PCOS: insulin resistance is common. Favour low glycaemic index carbohydrates and regular strength training.",
    points: &[
        "Favour low glycaemic index carbohydrates and high-fibre foods",
        "Include protein with every meal to improve satiety and insulin response",
        "Choose anti-inflammatory fats such as olive oil, nuts and oily fish",
        "Combine resistance training with regular cardio",
    ],
};

static HIGH_CHOLESTEROL: StaticGuideline = StaticGuideline {
    title: "High Cholesterol",
    warning: "High cholesterol: limit saturated and trans fats; prefer unsaturated fat sources.",
    points: &[
        "Keep saturated fat below 10% of total calories",
        "Avoid trans fats and heavily processed baked goods",
        "Include soluble fibre from oats, barley, legumes and fruit",
        "Eat oily fish at least twice per week",
        "Consider plant sterol fortified foods",
    ],
};

static KIDNEY_DISEASE: StaticGuideline = StaticGuideline {
    title: "Chronic Kidney Disease",
    warning: "Chronic kidney disease: protein, potassium and phosphorus needs are individual. Have these targets reviewed by a renal dietitian before following them.",
    points: &[
        "Protein targets may need to be reduced depending on disease stage",
        "Monitor potassium and phosphorus intake as advised by your care team",
        "Limit sodium and processed foods",
        "Follow fluid guidance from your nephrologist",
    ],
};

static HEART_DISEASE: StaticGuideline = StaticGuideline {
    title: "Heart Disease",
    warning: "Heart disease: obtain medical clearance before starting a calorie deficit or a new training programme.",
    points: &[
        "Follow a Mediterranean-style pattern built on vegetables, legumes, whole grains and olive oil",
        "Limit sodium, saturated fat and added sugars",
        "Eat oily fish at least twice per week",
        "Avoid large meals and very intense training without clearance",
    ],
};

fn condition_guideline(condition: MedicalCondition) -> &'static StaticGuideline {
    match condition {
        MedicalCondition::Type2Diabetes => &TYPE2_DIABETES,
        MedicalCondition::Hypertension => &HYPERTENSION,
        MedicalCondition::Hypothyroidism => &HYPOTHYROIDISM,
        MedicalCondition::Pcos => &PCOS,
        MedicalCondition::HighCholesterol => &HIGH_CHOLESTEROL,
        MedicalCondition::KidneyDisease => &KIDNEY_DISEASE,
        MedicalCondition::HeartDisease => &HEART_DISEASE,
    }
}

/// Guideline block for a medical condition
#[must_use]
pub fn condition_block(condition: MedicalCondition) -> GuidelineBlock {
    condition_guideline(condition).block()
}

/// Guideline block and warning for a pregnancy status that overrides the plan
pub(super) fn maternity_notes(status: PregnancyStatus) -> Option<(String, GuidelineBlock)> {
    let guideline = match status {
        PregnancyStatus::Pregnant => &PREGNANCY,
        PregnancyStatus::Breastfeeding => &BREASTFEEDING,
        PregnancyStatus::None | PregnancyStatus::Menopause => return None,
    };
    Some((guideline.warning.to_owned(), guideline.block()))
}

/// Warnings and guideline blocks appended to every plan
///
/// Menopause comes first, then each distinct condition in the order given.
pub(super) fn health_notes(profile: &UserProfile) -> (Vec<String>, Vec<GuidelineBlock>) {
    let mut seen: Vec<MedicalCondition> = Vec::with_capacity(profile.chronic_conditions.len());
    let menopause = (profile.effective_pregnancy_status() == PregnancyStatus::Menopause)
        .then_some(&MENOPAUSE);

    menopause
        .into_iter()
        .chain(profile.chronic_conditions.iter().filter_map(|condition| {
            if seen.contains(condition) {
                None
            } else {
                seen.push(*condition);
                Some(condition_guideline(*condition))
            }
        }))
        .map(|guideline| (guideline.warning.to_owned(), guideline.block()))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{ActivityLevel, Gender};

    #[test]
    fn test_every_condition_has_points() {
        for condition in MedicalCondition::ALL {
            let block = condition_block(*condition);
            assert!(!block.title.is_empty());
            assert!(!block.points.is_empty());
        }
    }

    #[test]
    fn test_duplicate_conditions_yield_one_block() {
        let mut profile = UserProfile::new(Gender::Female, 55, 165.0, 70.0, ActivityLevel::Light);
        profile.pregnancy_status = PregnancyStatus::Menopause;
        profile.chronic_conditions = vec![
            MedicalCondition::Hypertension,
            MedicalCondition::Pcos,
            MedicalCondition::Hypertension,
        ];

        let (warnings, blocks) = health_notes(&profile);
        let titles: Vec<&str> = blocks.iter().map(|block| block.title.as_str()).collect();
        assert_eq!(titles, vec!["Menopause Nutrition", "Hypertension", "PCOS"]);
        assert_eq!(warnings.len(), 3);
    }
}
