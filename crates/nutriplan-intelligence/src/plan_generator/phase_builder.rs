// ABOUTME: Phase schedules for each goal, including the weight-loss block scheduler
// ABOUTME: Water loss, fat-loss blocks, refeed days and diet breaks in chronological order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use super::{notes, phase, weekly_rate_label, weeks_label, PlanContext, Schedule};
use crate::config::intelligence::PhaseScheduleConfig;
use nutriplan_core::models::nutrition::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use nutriplan_core::models::{Macros, PhaseMacros, PhaseType, PlanPhase};
use tracing::{debug, warn};

/// Schedule for the weight-loss goal
///
/// Without a valid target below current weight a single open-ended phase is
/// returned. Otherwise a water-loss phase opens the plan and the remaining fat
/// is split into blocks, with refeed days and diet breaks inserted from a
/// rolling weeks-since-break counter.
pub(super) fn weight_loss_schedule(context: &PlanContext<'_>, macros: &Macros) -> Schedule {
    let profile = context.profile;
    let cfg = &context.config.plan.phases;

    let weekly_deficit = (context.tdee - macros.calories) * 7.0;
    let weekly_rate_kg = weekly_deficit / cfg.kcal_per_kg_fat;

    let Some(target_kg) = profile.weight_loss_target() else {
        return Schedule {
            phases: vec![open_ended_fat_loss(cfg, macros, weekly_rate_kg)],
            estimated_duration: "Open-ended".to_owned(),
            duration_context: "No target weight below your current weight was given, so progress is reviewed at fixed intervals instead of against a timeline.".to_owned(),
            warnings: Vec::new(),
        };
    };

    let total_kg = profile.weight_kg - target_kg;
    let water_low_kg = total_kg.min(profile.weight_kg * cfg.water_loss_fraction);
    let water_high_kg = total_kg.min(water_low_kg * cfg.water_loss_high_multiplier);
    let remaining_kg = total_kg - water_low_kg;

    let mut phases = vec![water_loss_phase(cfg, macros, water_low_kg, water_high_kg)];

    if remaining_kg <= 0.0 {
        return Schedule {
            phases,
            estimated_duration: weeks_label(cfg.water_loss_weeks),
            duration_context: "Your target is within the expected initial water and glycogen loss.".to_owned(),
            warnings: Vec::new(),
        };
    }

    if weekly_rate_kg.is_nan() || weekly_rate_kg <= cfg.min_weekly_loss_kg {
        warn!(weekly_rate_kg, "Deficit too small to schedule fat-loss blocks");
        phases.push(open_ended_fat_loss(cfg, macros, weekly_rate_kg));
        return Schedule {
            phases,
            estimated_duration: "Open-ended".to_owned(),
            duration_context: format!(
                "{} of initial water loss, then fat loss reviewed at fixed intervals.",
                weeks_label(cfg.water_loss_weeks)
            ),
            warnings: vec![format!(
                "The calorie deficit is too small to build a timeline ({}). Increase the deficit or your activity to reach {target_kg:.1} kg.",
                weekly_rate_label(weekly_rate_kg)
            )],
        };
    }

    let weeks_needed = (remaining_kg / weekly_rate_kg).ceil() as u32;
    let max_block_weeks = cfg.max_block_weeks.max(1);
    let rate_label = weekly_rate_label(weekly_rate_kg);

    let mut weeks_left = weeks_needed;
    let mut weeks_since_break = cfg.water_loss_weeks;
    let mut block_number = 0_u32;
    let mut diet_breaks = 0_u32;
    let mut refeeds = 0_u32;

    while weeks_left > 0 {
        if weeks_since_break >= cfg.diet_break_after_weeks
            && weeks_left > cfg.diet_break_min_remaining_weeks
        {
            phases.push(diet_break_phase(context));
            diet_breaks += 1;
            weeks_since_break = 0;
            continue;
        }

        let block_weeks = weeks_left.min(max_block_weeks);
        weeks_left -= block_weeks;
        weeks_since_break += block_weeks;
        block_number += 1;

        let review = if weeks_left == 0 {
            format!(
                "You should now be close to {target_kg:.1} kg. Move to maintenance at about {:.0} kcal for at least 2 weeks to stabilise your new weight.",
                context.tdee
            )
        } else {
            "Reassess at the end of this block: if your weekly average loss is below the expected rate, reduce intake by 100-150 kcal or add activity.".to_owned()
        };
        phases.push(PlanPhase {
            notes: notes(&[
                "Keep protein high to preserve lean mass",
                "Track the weekly average of daily weigh-ins rather than single readings",
            ]),
            weekly_loss_rate: Some(rate_label.clone()),
            review_instruction: Some(review),
            ..phase(
                PhaseType::FatLoss,
                &format!("Sustained Fat Loss {block_number}"),
                weeks_label(block_weeks),
                Some(block_weeks.saturating_mul(7)),
                macros.calories,
                macros.phase_macros(),
            )
        });

        if weeks_since_break >= cfg.refeed_after_weeks && weeks_left > 0 {
            phases.push(refeed_phase(context, macros));
            refeeds += 1;
        }
    }

    debug!(
        weeks_needed,
        blocks = block_number,
        diet_breaks,
        refeeds,
        "Scheduled weight-loss phases"
    );

    let total_weeks = cfg.water_loss_weeks + weeks_needed + diet_breaks;
    Schedule {
        phases,
        estimated_duration: weeks_label(total_weeks),
        duration_context: format!(
            "{} of initial water loss and {} of fat loss at about {rate_label}, including {diet_breaks} diet break week(s) and {refeeds} refeed day(s).",
            weeks_label(cfg.water_loss_weeks),
            weeks_label(weeks_needed)
        ),
        warnings: Vec::new(),
    }
}

/// Single lean-gain phase, sized from the target weight when one is given
pub(super) fn gain_schedule(context: &PlanContext<'_>, macros: &Macros) -> Schedule {
    let profile = context.profile;
    let rate = context.config.plan.goal_energy.gain_rate_kg_per_week;

    let (duration_label, duration_days, duration_context) = match profile.weight_gain_target() {
        Some(target_kg) => {
            let gap_kg = target_kg - profile.weight_kg;
            let weeks = (gap_kg / rate).ceil() as u32;
            (
                weeks_label(weeks),
                Some(weeks.saturating_mul(7)),
                format!("Time to gain {gap_kg:.1} kg at about {rate} kg per week."),
            )
        }
        None => (
            "12-16 weeks".to_owned(),
            None,
            "Typical length of a lean muscle-gain phase.".to_owned(),
        ),
    };

    let gain = PlanPhase {
        notes: notes(&[
            "Train each muscle group at least twice per week with progressive overload",
            "Aim for a slow gain; a faster rate mostly adds fat",
        ]),
        review_instruction: Some("At the end of this phase, consider a 3-4 week mini-cut to trim fat gained before starting the next gain phase.".to_owned()),
        ..phase(
            PhaseType::MuscleGain,
            "Lean Muscle Gain",
            duration_label.clone(),
            duration_days,
            macros.calories,
            macros.phase_macros(),
        )
    };

    Schedule {
        phases: vec![gain],
        estimated_duration: duration_label,
        duration_context,
        warnings: Vec::new(),
    }
}

/// Single short aggressive-deficit phase
pub(super) fn mini_cut_schedule(context: &PlanContext<'_>, macros: &Macros) -> Schedule {
    let cfg = &context.config.plan.phases;
    let weekly_rate_kg = (context.tdee - macros.calories) * 7.0 / cfg.kcal_per_kg_fat;

    let mini_cut = PlanPhase {
        notes: notes(&[
            "Protein is set high to protect muscle during the aggressive deficit",
            "Keep training intensity high and reduce volume slightly",
        ]),
        weekly_loss_rate: Some(weekly_rate_label(weekly_rate_kg)),
        review_instruction: Some(format!(
            "After 3-4 weeks, transition to a maintenance week at about {:.0} kcal before the next phase.",
            context.tdee
        )),
        ..phase(
            PhaseType::MiniCut,
            "Mini Cut",
            "3-4 weeks",
            None,
            macros.calories,
            macros.phase_macros(),
        )
    };

    Schedule {
        phases: vec![mini_cut],
        estimated_duration: "3-4 weeks".to_owned(),
        duration_context: "A short, aggressive deficit between muscle-gain phases.".to_owned(),
        warnings: Vec::new(),
    }
}

/// Single open-ended maintenance phase
pub(super) fn maintenance_schedule(macros: &Macros) -> Schedule {
    let maintenance = PlanPhase {
        notes: notes(&["Keep a consistent routine and weigh in weekly"]),
        review_instruction: Some("If your 4-week average weight drifts by more than 1 kg, adjust calories by 100-200 kcal.".to_owned()),
        ..phase(
            PhaseType::Maintenance,
            "Maintenance",
            "Ongoing",
            None,
            macros.calories,
            macros.phase_macros(),
        )
    };

    Schedule {
        phases: vec![maintenance],
        estimated_duration: "Ongoing".to_owned(),
        duration_context: "Maintenance has no fixed end date.".to_owned(),
        warnings: Vec::new(),
    }
}

fn water_loss_phase(
    cfg: &PhaseScheduleConfig,
    macros: &Macros,
    low_kg: f64,
    high_kg: f64,
) -> PlanPhase {
    PlanPhase {
        notes: notes(&[
            "Early weight loss is mostly water and glycogen, not fat",
            "Keep sodium and fluid intake consistent so the scale stays readable",
        ]),
        weekly_loss_rate: Some(format!(
            "{low_kg:.1}-{high_kg:.1} kg over {}",
            weeks_label(cfg.water_loss_weeks)
        )),
        review_instruction: Some(
            "Expect the rate of loss to slow after this phase; that is normal.".to_owned(),
        ),
        ..phase(
            PhaseType::WaterLoss,
            "Initial Water Loss",
            weeks_label(cfg.water_loss_weeks),
            Some(cfg.water_loss_weeks.saturating_mul(7)),
            macros.calories,
            macros.phase_macros(),
        )
    }
}

fn open_ended_fat_loss(cfg: &PhaseScheduleConfig, macros: &Macros, weekly_rate_kg: f64) -> PlanPhase {
    PlanPhase {
        notes: notes(&["Keep protein high to preserve lean mass"]),
        weekly_loss_rate: Some(weekly_rate_label(weekly_rate_kg)),
        review_instruction: Some(format!(
            "After {}, reassess: if the rate of loss is below expectation, cut 100-250 kcal or increase activity.",
            weeks_label(cfg.open_ended_review_weeks)
        )),
        ..phase(
            PhaseType::FatLoss,
            "Fat Loss",
            "Open-ended",
            None,
            macros.calories,
            macros.phase_macros(),
        )
    }
}

/// One week at maintenance with fixed protein and TDEE-share carbs and fat
///
/// The macro shares are fixed, so their energy does not add up to the calories.
fn diet_break_phase(context: &PlanContext<'_>) -> PlanPhase {
    let cfg = &context.config.plan.phases;
    let calories = context.tdee.round();
    let macros = PhaseMacros {
        protein_g: (context.profile.weight_kg * cfg.diet_break_protein_g_per_kg).round(),
        carbs_g: (context.tdee * cfg.diet_break_carb_fraction / KCAL_PER_GRAM_CARBS).round(),
        fat_g: (context.tdee * cfg.diet_break_fat_fraction / KCAL_PER_GRAM_FAT).round(),
    };

    PlanPhase {
        notes: notes(&[
            "Eat at maintenance to restore training performance and adherence",
            "A small scale increase from glycogen and water is expected",
        ]),
        review_instruction: Some("Return to your deficit after 7 days.".to_owned()),
        ..phase(PhaseType::DietBreak, "Diet Break", "1 week", Some(7), calories, macros)
    }
}

/// One high-carbohydrate day at maintenance; protein is unchanged and fat takes the rest
fn refeed_phase(context: &PlanContext<'_>, block: &Macros) -> PlanPhase {
    let cfg = &context.config.plan.phases;
    let calories = context.tdee.round();
    let protein_g = block.protein_g;
    let carbs_g = block.carbs_g + cfg.refeed_extra_carbs_g;
    let remaining = carbs_g.mul_add(
        -KCAL_PER_GRAM_CARBS,
        protein_g.mul_add(-KCAL_PER_GRAM_PROTEIN, calories),
    );
    let fat_g = (remaining / KCAL_PER_GRAM_FAT).round().max(cfg.refeed_min_fat_g);

    PlanPhase {
        notes: notes(&[
            "Add the extra carbohydrate mainly from starchy foods",
            "Return to your deficit the following day",
        ]),
        ..phase(
            PhaseType::Refeed,
            "Refeed Day",
            "1 day",
            Some(1),
            calories,
            PhaseMacros {
                protein_g,
                carbs_g,
                fat_g,
            },
        )
    }
}
