// ABOUTME: Nutriplan CLI - command-line surface over the nutrition and body composition engine
// ABOUTME: Parses profile flags, dispatches to the calculation core and prints pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
//!
//! Usage:
//! ```bash
//! # Energy expenditure and protein for a profile
//! nutriplan-cli energy --gender male --age 30 --height 180 --weight 90 --activity moderate
//!
//! # Macro split for a calorie target
//! nutriplan-cli macros --gender female --age 28 --height 165 --weight 60 --calories 1800 --protocol carb-cycling --day high
//!
//! # Multi-phase weight-loss plan
//! nutriplan-cli plan --gender male --age 30 --height 180 --weight 90 --activity moderate \
//!     --target-weight 80 --goal lose --modifier 0.2
//!
//! # Body composition from circumferences
//! nutriplan-cli body-composition --gender female --height 165 --weight 60 --neck 32 --waist 70 --hip 95
//!
//! # Ideal body-fat range and target weight for a sport
//! nutriplan-cli body-fat-target --gender male --sport strength-bodybuilding --body-fat 22 --weight 90
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutriplan::config::PlanningConfig;
use nutriplan::errors::{AppError, AppResult};
use nutriplan::logging::LoggingConfig;
use nutriplan::models::{
    BodyMeasurements, CarbCycleDay, DietProtocol, Gender, Goal, SportActivity,
};
use std::process::ExitCode;
use tracing::info;

use helpers::profile::ProfileArgs;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutrition targets, diet plans and body composition",
    long_about = "Computes energy expenditure, macro splits and multi-phase diet plans from a biometric profile, and estimates body composition from circumference measurements."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// BMR, TDEE and daily protein for a profile
    Energy {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Macro split for a calorie target
    Macros {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Daily calorie target (kcal)
        #[arg(long)]
        calories: f64,

        /// Diet protocol (standard, keto, carb-cycling)
        #[arg(long, default_value = "standard")]
        protocol: DietProtocol,

        /// Goal the calories serve (lose, maintain, gain, mini-cut)
        #[arg(long, default_value = "maintain")]
        goal: Goal,

        /// Carb-cycling day type (high, medium, low, normal)
        #[arg(long)]
        day: Option<CarbCycleDay>,
    },

    /// Multi-phase diet plan for a profile and goal
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Goal (lose, maintain, gain, mini-cut)
        #[arg(long, default_value = "maintain")]
        goal: Goal,

        /// Deficit fraction for lose and mini-cut goals, between 0 and 1
        #[arg(long, default_value_t = 0.0)]
        modifier: f64,
    },

    /// Body-fat estimate, muscularity index and risk summary from circumferences
    BodyComposition {
        /// Biological sex (male, female)
        #[arg(long)]
        gender: Gender,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Neck circumference (cm)
        #[arg(long)]
        neck: f64,

        /// Waist circumference (cm)
        #[arg(long)]
        waist: f64,

        /// Hip circumference (cm), required for female subjects
        #[arg(long)]
        hip: Option<f64>,
    },

    /// Ideal body-fat range for a sport and, when above it, a target weight
    BodyFatTarget {
        /// Biological sex (male, female)
        #[arg(long)]
        gender: Gender,

        /// Primary sport activity
        #[arg(long)]
        sport: SportActivity,

        /// Current body-fat percentage
        #[arg(long)]
        body_fat: f64,

        /// Current body weight (kg); enables the target weight suggestion
        #[arg(long)]
        weight: Option<f64>,
    },
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Energy { .. } => "energy",
            Self::Macros { .. } => "macros",
            Self::Plan { .. } => "plan",
            Self::BodyComposition { .. } => "body-composition",
            Self::BodyFatTarget { .. } => "body-fat-target",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(u8::try_from(error.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = PlanningConfig::load()?;
    info!(command = cli.command.name(), "Dispatching command");

    match cli.command {
        Command::Energy { profile } => commands::nutrition::energy(&profile.into_profile(), &config),
        Command::Macros {
            profile,
            calories,
            protocol,
            goal,
            day,
        } => commands::nutrition::macros(
            &profile.into_profile(),
            calories,
            protocol,
            goal,
            day,
            &config,
        ),
        Command::Plan {
            profile,
            goal,
            modifier,
        } => commands::nutrition::plan(&profile.into_profile(), goal, modifier, &config),
        Command::BodyComposition {
            gender,
            height,
            weight,
            neck,
            waist,
            hip,
        } => commands::body::composition(
            &BodyMeasurements {
                gender,
                height_cm: height,
                weight_kg: weight,
                neck_cm: neck,
                waist_cm: waist,
                hip_cm: hip,
            },
            &config,
        ),
        Command::BodyFatTarget {
            gender,
            sport,
            body_fat,
            weight,
        } => commands::body::fat_target(gender, sport, body_fat, weight),
    }
}
