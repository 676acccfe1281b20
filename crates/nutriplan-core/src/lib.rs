// ABOUTME: Core types for the nutriplan nutrition planning engine
// ABOUTME: Foundation crate with error handling, shared vocabularies and result models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing the shared records for the nutriplan engine.
//! It changes infrequently and carries no calculation logic.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the body measurement error
//! - **models**: profile and goal inputs, macro sets, plan and body composition results

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (profile, goal, macros, plans, body composition)
pub mod models;
