// ABOUTME: Integration tests for multi-phase diet plan generation
// ABOUTME: Covers goal schedules, safety floors, special-population overrides, guidelines and activity guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    config, energy_gap, male_with_target, phase_energy_gap, reference_female, reference_male,
};
use nutriplan::intelligence::create_plan;
use nutriplan::models::{
    ActivityLevel, Gender, Goal, GoalSelection, MedicalCondition, PhaseType, PlanResult,
    PregnancyStatus, SportActivity, UserProfile, GUIDELINE_SECTION_MARKER,
};

fn lose(modifier: f64) -> GoalSelection {
    GoalSelection::new(Goal::Lose, modifier)
}

fn assert_common_invariants(plan: &PlanResult) {
    assert!(!plan.phases.is_empty(), "plan must have at least one phase");
    for phase in &plan.phases {
        assert!(
            phase.activity_recommendation.is_some(),
            "{} has no activity recommendation",
            phase.name
        );
    }
}

// ============================================================================
// WEIGHT LOSS SCHEDULE TESTS
// ============================================================================

#[test]
fn test_weight_loss_schedule_reference_male() {
    let config = config();
    let plan = create_plan(&male_with_target(80.0), &lose(0.2), &config);
    assert_common_invariants(&plan);

    assert_eq!(plan.goal, Goal::Lose);
    assert!((plan.tdee - 2914.0).abs() < 1e-6);
    assert!((plan.target_calories - 2331.0).abs() < f64::EPSILON);
    assert!(plan.warnings.is_empty(), "{:?}", plan.warnings);

    let kinds: Vec<PhaseType> = plan.phases.iter().map(|phase| phase.phase_type).collect();
    assert_eq!(
        kinds,
        vec![
            PhaseType::WaterLoss,
            PhaseType::FatLoss,
            PhaseType::Refeed,
            PhaseType::DietBreak,
            PhaseType::FatLoss,
            PhaseType::Refeed,
            PhaseType::FatLoss,
        ]
    );
    assert_eq!(plan.phases[1].name, "Sustained Fat Loss 1");
    assert_eq!(plan.phases[6].name, "Sustained Fat Loss 3");
    assert_eq!(plan.total_duration_days, Some(128));
    assert_eq!(plan.estimated_duration, "18 weeks");
}

#[test]
fn test_total_duration_matches_block_arithmetic() {
    let config = config();
    let phases_cfg = &config.plan.phases;

    for (target, modifier) in [(80.0, 0.2), (70.0, 0.25), (84.0, 0.15), (60.0, 0.3)] {
        let profile = male_with_target(target);
        let plan = create_plan(&profile, &lose(modifier), &config);
        assert_common_invariants(&plan);

        let weekly_rate =
            (plan.tdee - plan.target_calories) * 7.0 / phases_cfg.kcal_per_kg_fat;
        let total_kg = profile.weight_kg - target;
        let water_kg = total_kg.min(profile.weight_kg * phases_cfg.water_loss_fraction);
        let weeks_needed = ((total_kg - water_kg) / weekly_rate).ceil() as u32;

        let fat_loss_days: u32 = plan
            .phases_of(PhaseType::FatLoss)
            .filter_map(|phase| phase.duration_days)
            .sum();
        let diet_breaks = plan.phases_of(PhaseType::DietBreak).count() as u32;
        let refeeds = plan.phases_of(PhaseType::Refeed).count() as u32;

        assert_eq!(fat_loss_days, 7 * weeks_needed, "target {target}");
        assert_eq!(
            plan.total_duration_days,
            Some(14 + 7 * weeks_needed + 7 * diet_breaks + refeeds),
            "target {target}"
        );
    }
}

#[test]
fn test_weight_loss_phase_ordering() {
    let config = config();
    let plan = create_plan(&male_with_target(60.0), &lose(0.3), &config);

    assert_eq!(plan.phases[0].phase_type, PhaseType::WaterLoss);
    let last = plan.phases.last().unwrap();
    assert_eq!(last.phase_type, PhaseType::FatLoss);
    assert!(last.review_instruction.as_deref().unwrap().contains("maintenance"));

    for pair in plan.phases.windows(2) {
        if pair[0].phase_type == PhaseType::DietBreak {
            assert_eq!(pair[1].phase_type, PhaseType::FatLoss, "a block follows every break");
        }
    }
    for phase in plan.phases_of(PhaseType::FatLoss) {
        assert!(phase.duration_days.unwrap() <= 7 * config.plan.phases.max_block_weeks);
        assert!(phase.weekly_loss_rate.as_deref().unwrap().ends_with("kg/week"));
    }
}

#[test]
fn test_refeed_and_diet_break_macros() {
    let config = config();
    let plan = create_plan(&male_with_target(80.0), &lose(0.2), &config);

    let refeed = plan.phases_of(PhaseType::Refeed).next().unwrap();
    assert_eq!(refeed.duration_days, Some(1));
    assert!((refeed.calories - 2914.0).abs() < f64::EPSILON);
    assert!((refeed.macros.carbs_g - (plan.target_macros.carbs_g + 100.0)).abs() < f64::EPSILON);
    assert!((refeed.macros.protein_g - plan.target_macros.protein_g).abs() < f64::EPSILON);
    assert!(refeed.macros.fat_g >= 20.0);
    assert!(phase_energy_gap(refeed.calories, &refeed.macros) <= 4.5);

    let diet_break = plan.phases_of(PhaseType::DietBreak).next().unwrap();
    assert_eq!(diet_break.duration_days, Some(7));
    assert!((diet_break.calories - 2914.0).abs() < f64::EPSILON);
    assert!((diet_break.macros.protein_g - 162.0).abs() < f64::EPSILON);
}

#[test]
fn test_target_within_water_loss_is_single_phase() {
    let config = config();
    let plan = create_plan(&male_with_target(88.0), &lose(0.2), &config);

    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].phase_type, PhaseType::WaterLoss);
    assert_eq!(plan.total_duration_days, Some(14));
    assert_eq!(
        plan.phases[0].weekly_loss_rate.as_deref(),
        Some("2.0-2.0 kg over 2 weeks")
    );
}

#[test]
fn test_no_target_gives_open_ended_phase() {
    let config = config();
    let plan = create_plan(&reference_male(), &lose(0.2), &config);
    assert_common_invariants(&plan);

    assert_eq!(plan.phases.len(), 1);
    let phase = &plan.phases[0];
    assert_eq!(phase.phase_type, PhaseType::FatLoss);
    assert_eq!(phase.duration_days, None);
    assert!(phase.review_instruction.as_deref().unwrap().contains("4 weeks"));
    assert_eq!(plan.total_duration_days, None);
    assert_eq!(plan.estimated_duration, "Open-ended");
}

#[test]
fn test_target_above_current_weight_is_ignored_for_loss() {
    let config = config();
    let plan = create_plan(&male_with_target(95.0), &lose(0.2), &config);
    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].duration_days, None);
}

#[test]
fn test_small_deficit_warns_and_stays_open_ended() {
    let config = config();
    let plan = create_plan(&male_with_target(80.0), &lose(0.01), &config);
    assert_common_invariants(&plan);

    assert_eq!(plan.phases.len(), 2);
    assert_eq!(plan.phases[0].phase_type, PhaseType::WaterLoss);
    assert_eq!(plan.phases[1].duration_days, None);
    assert_eq!(plan.total_duration_days, None);
    assert!(plan.warnings.iter().any(|w| w.contains("too small")));
}

// ============================================================================
// SAFETY FLOOR TESTS
// ============================================================================

#[test]
fn test_safety_floors_raise_calories_to_bmr() {
    let config = config();
    let mut profile = UserProfile::new(Gender::Female, 28, 165.0, 60.0, ActivityLevel::Sedentary);
    profile.target_weight_kg = Some(52.0);

    let plan = create_plan(&profile, &lose(0.4), &config);
    assert_common_invariants(&plan);

    // 1596 * 0.6 is below 1200, and 1200 is below BMR 1330
    assert!((plan.target_calories - 1330.0).abs() < f64::EPSILON);
    assert!(plan.target_calories >= plan.bmr.floor());
    assert_eq!(plan.warnings.len(), 2, "{:?}", plan.warnings);
    assert!(plan.warnings[0].contains("1200"));
    assert!(plan.warnings[1].contains("BMR"));
}

#[test]
fn test_male_gender_floor() {
    let config = config();
    let profile = UserProfile::new(Gender::Male, 70, 160.0, 55.0, ActivityLevel::Sedentary);
    let plan = create_plan(&profile, &GoalSelection::new(Goal::MiniCut, 0.5), &config);

    assert!(plan.target_calories >= 1500.0);
    assert!(plan.warnings.iter().any(|w| w.contains("1500")));
}

#[test]
fn test_target_macros_match_calories() {
    let config = config();
    for goal in [Goal::Lose, Goal::Maintain, Goal::Gain, Goal::MiniCut] {
        for profile in [reference_male(), reference_female()] {
            let plan = create_plan(&profile, &GoalSelection::new(goal, 0.2), &config);
            assert!(
                energy_gap(&plan.target_macros) <= 2.0,
                "{goal}: {:?}",
                plan.target_macros
            );
        }
    }
}

// ============================================================================
// OTHER GOAL TESTS
// ============================================================================

#[test]
fn test_gain_uses_fixed_surplus() {
    let config = config();
    let plan = create_plan(&reference_male(), &GoalSelection::new(Goal::Gain, 0.5), &config);
    assert_common_invariants(&plan);

    // 2914 * 1.125, the modifier does not change the surplus
    assert!((plan.target_calories - 3278.0).abs() < f64::EPSILON);
    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].phase_type, PhaseType::MuscleGain);
    assert_eq!(plan.phases[0].duration_label, "12-16 weeks");
    assert!(plan.phases[0]
        .review_instruction
        .as_deref()
        .unwrap()
        .contains("mini-cut"));
}

#[test]
fn test_gain_with_target_is_sized_by_rate() {
    let config = config();
    let plan = create_plan(&male_with_target(95.0), &GoalSelection::new(Goal::Gain, 0.1), &config);

    assert_eq!(plan.phases[0].duration_days, Some(70));
    assert_eq!(plan.total_duration_days, Some(70));
}

#[test]
fn test_mini_cut_single_phase_with_high_protein() {
    let config = config();
    let plan = create_plan(&reference_male(), &GoalSelection::new(Goal::MiniCut, 0.25), &config);
    assert_common_invariants(&plan);

    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].phase_type, PhaseType::MiniCut);
    assert_eq!(plan.phases[0].duration_label, "3-4 weeks");
    assert!((plan.target_macros.protein_g - 225.0).abs() < f64::EPSILON);
}

#[test]
fn test_maintain_single_ongoing_phase() {
    let config = config();
    let plan = create_plan(&reference_male(), &GoalSelection::maintain(), &config);
    assert_common_invariants(&plan);

    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].phase_type, PhaseType::Maintenance);
    assert_eq!(plan.estimated_duration, "Ongoing");
    assert!((plan.target_calories - 2914.0).abs() < f64::EPSILON);
    assert!(plan.guidelines.is_none());
}

// ============================================================================
// SPECIAL POPULATION TESTS
// ============================================================================

#[test]
fn test_minor_gets_health_focus_plan() {
    let config = config();
    let mut profile = UserProfile::new(Gender::Male, 16, 175.0, 85.0, ActivityLevel::Active);
    profile.target_weight_kg = Some(70.0);

    let plan = create_plan(&profile, &lose(0.3), &config);
    assert_common_invariants(&plan);

    assert_eq!(plan.goal, Goal::Maintain);
    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].phase_type, PhaseType::HealthFocus);
    assert!((plan.target_calories - plan.tdee.round()).abs() < f64::EPSILON);
    assert!((plan.target_macros.protein_g - 128.0).abs() < f64::EPSILON);
    assert!(plan.warnings[0].starts_with("Under 18"));
}

#[test]
fn test_minor_rule_wins_over_pregnancy() {
    let config = config();
    let mut profile = UserProfile::new(Gender::Female, 17, 165.0, 60.0, ActivityLevel::Light);
    profile.pregnancy_status = PregnancyStatus::Pregnant;

    let plan = create_plan(&profile, &GoalSelection::maintain(), &config);
    assert_eq!(plan.phases[0].phase_type, PhaseType::HealthFocus);
}

#[test]
fn test_pregnancy_plan() {
    let config = config();
    let profile = UserProfile {
        pregnancy_status: PregnancyStatus::Pregnant,
        target_weight_kg: Some(55.0),
        ..reference_female()
    };

    let plan = create_plan(&profile, &lose(0.25), &config);
    assert_common_invariants(&plan);

    assert_eq!(plan.goal, Goal::Maintain);
    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].phase_type, PhaseType::Maintenance);
    assert_eq!(plan.phases[0].name, "Pregnancy Nutrition");
    assert!((plan.target_calories - (plan.tdee + 400.0).round()).abs() < f64::EPSILON);
    // 60 kg * 1.0 g/kg + 25 g
    assert!((plan.target_macros.protein_g - 85.0).abs() < f64::EPSILON);

    let guidelines = plan.guidelines.as_ref().unwrap();
    assert_eq!(guidelines[0], format!("{GUIDELINE_SECTION_MARKER}Pregnancy Nutrition"));
    assert!(plan.warnings.iter().any(|w| w.starts_with("Pregnancy")));
}

#[test]
fn test_breastfeeding_plan() {
    let config = config();
    let profile = UserProfile {
        pregnancy_status: PregnancyStatus::Breastfeeding,
        ..reference_female()
    };

    let plan = create_plan(&profile, &GoalSelection::new(Goal::Gain, 0.1), &config);

    assert_eq!(plan.phases[0].name, "Breastfeeding Nutrition");
    assert!((plan.target_calories - (plan.tdee + 500.0).round()).abs() < f64::EPSILON);
}

#[test]
fn test_pregnancy_status_ignored_for_male_profiles() {
    let config = config();
    let profile = UserProfile {
        pregnancy_status: PregnancyStatus::Pregnant,
        ..male_with_target(80.0)
    };

    let plan = create_plan(&profile, &lose(0.2), &config);
    assert_eq!(plan.goal, Goal::Lose);
    assert_eq!(plan.phases[0].phase_type, PhaseType::WaterLoss);
}

// ============================================================================
// GUIDELINE TESTS
// ============================================================================

#[test]
fn test_conditions_add_guideline_blocks_in_order() {
    let config = config();
    let profile = UserProfile {
        chronic_conditions: vec![
            MedicalCondition::Hypertension,
            MedicalCondition::Type2Diabetes,
            MedicalCondition::Hypertension,
        ],
        ..male_with_target(80.0)
    };

    let plan = create_plan(&profile, &lose(0.2), &config);
    let guidelines = plan.guidelines.as_ref().unwrap();
    let headers: Vec<&str> = guidelines
        .iter()
        .map(String::as_str)
        .filter(|line| line.starts_with(GUIDELINE_SECTION_MARKER))
        .collect();

    assert_eq!(headers, vec!["### Hypertension", "### Type 2 Diabetes"]);
    assert_eq!(plan.warnings.len(), 2);
    assert!(guidelines.len() > headers.len(), "blocks carry bullet points");
}

#[test]
fn test_menopause_notes_come_first() {
    let config = config();
    let profile = UserProfile {
        age: 54,
        pregnancy_status: PregnancyStatus::Menopause,
        chronic_conditions: vec![MedicalCondition::HighCholesterol],
        ..reference_female()
    };

    let plan = create_plan(&profile, &GoalSelection::maintain(), &config);
    let guidelines = plan.guidelines.as_ref().unwrap();

    assert_eq!(guidelines[0], "### Menopause Nutrition");
    assert!(guidelines.iter().any(|line| line == "### High Cholesterol"));
    assert_eq!(plan.goal, Goal::Maintain);
}

#[test]
fn test_pregnancy_keeps_condition_blocks() {
    let config = config();
    let profile = UserProfile {
        pregnancy_status: PregnancyStatus::Pregnant,
        chronic_conditions: vec![MedicalCondition::Type2Diabetes],
        ..reference_female()
    };

    let plan = create_plan(&profile, &GoalSelection::maintain(), &config);
    let guidelines = plan.guidelines.as_ref().unwrap();
    assert_eq!(guidelines[0], "### Pregnancy Nutrition");
    assert!(guidelines.iter().any(|line| line == "### Type 2 Diabetes"));
}

// ============================================================================
// ACTIVITY RECOMMENDATION TESTS
// ============================================================================

#[test]
fn test_non_athlete_activity_progression() {
    let config = config();
    let plan = create_plan(&male_with_target(80.0), &lose(0.2), &config);
    let recommendation = |index: usize| plan.phases[index].activity_recommendation.as_deref().unwrap();

    assert!(recommendation(0).contains("walk"));
    assert!(recommendation(2).contains("steps"));
    assert!(recommendation(3).contains("Maintain your current activity"));
    assert!(recommendation(6).contains("500 steps"));
}

#[test]
fn test_athlete_activity_progression() {
    let config = config();
    let profile = UserProfile {
        sport_activity: Some(SportActivity::StrengthBodybuilding),
        ..male_with_target(80.0)
    };

    let plan = create_plan(&profile, &lose(0.2), &config);
    let diet_break = plan.phases_of(PhaseType::DietBreak).next().unwrap();

    assert!(plan.phases[0]
        .activity_recommendation
        .as_deref()
        .unwrap()
        .starts_with("Master technique"));
    assert!(diet_break
        .activity_recommendation
        .as_deref()
        .unwrap()
        .starts_with("Deload"));
}

#[test]
fn test_general_fitness_is_not_treated_as_athlete() {
    let config = config();
    let profile = UserProfile {
        sport_activity: Some(SportActivity::GeneralFitness),
        ..reference_male()
    };

    let plan = create_plan(&profile, &GoalSelection::maintain(), &config);
    assert!(plan.phases[0]
        .activity_recommendation
        .as_deref()
        .unwrap()
        .contains("walk"));
}
