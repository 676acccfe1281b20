// ABOUTME: Criterion benchmarks for the nutrition and body composition calculation core
// ABOUTME: Measures plan generation across target distances, macro splits and body composition analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Criterion benchmarks for the calculation core.
//!
//! Plan generation is measured for increasingly distant weight-loss targets,
//! since the block scheduler loop grows with the number of weeks needed.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutriplan::config::PlanningConfig;
use nutriplan::intelligence::{analyze_body_composition, calculate_macros, create_plan};
use nutriplan::models::{
    ActivityLevel, BodyMeasurements, CarbCycleDay, DietProtocol, Gender, Goal, GoalSelection,
    MedicalCondition, UserProfile,
};

fn profile_with_target(target_weight_kg: f64) -> UserProfile {
    let mut profile = UserProfile::new(Gender::Male, 35, 182.0, 120.0, ActivityLevel::Moderate);
    profile.target_weight_kg = Some(target_weight_kg);
    profile
}

fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_plan");
    let config = PlanningConfig::default();
    let selection = GoalSelection::new(Goal::Lose, 0.2);

    for kg_to_lose in [5.0, 20.0, 50.0] {
        let profile = profile_with_target(120.0 - kg_to_lose);
        group.bench_with_input(
            BenchmarkId::new("weight_loss_kg", kg_to_lose),
            &profile,
            |b, profile| {
                b.iter(|| create_plan(black_box(profile), black_box(&selection), &config));
            },
        );
    }

    let mut with_conditions = profile_with_target(100.0);
    with_conditions.chronic_conditions = vec![
        MedicalCondition::Type2Diabetes,
        MedicalCondition::Hypertension,
        MedicalCondition::HighCholesterol,
    ];
    group.bench_function("weight_loss_with_conditions", |b| {
        b.iter(|| create_plan(black_box(&with_conditions), black_box(&selection), &config));
    });

    group.finish();
}

fn bench_macro_splits(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_macros");
    let config = PlanningConfig::default();
    let profile = profile_with_target(100.0);

    for protocol in DietProtocol::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(protocol),
            protocol,
            |b, protocol| {
                b.iter(|| {
                    calculate_macros(
                        black_box(2400.0),
                        *protocol,
                        Goal::Lose,
                        &profile,
                        Some(CarbCycleDay::Medium),
                        &config.nutrition,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_body_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_composition");
    let config = PlanningConfig::default();
    let measurements = BodyMeasurements {
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 60.0,
        neck_cm: 32.0,
        waist_cm: 70.0,
        hip_cm: Some(95.0),
    };

    group.bench_function("analyze", |b| {
        b.iter(|| analyze_body_composition(black_box(&measurements), &config.body_composition));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_plan_generation,
    bench_macro_splits,
    bench_body_composition,
);
criterion_main!(benches);
