// ABOUTME: Intelligence module housing the periodization, composition, and feedback engines
// ABOUTME: Re-exports the plan engine facade and the component types it orchestrates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! # Plan Intelligence
//!
//! The algorithmic core of the engine: feedback aggregation, periodization
//! math, deterministic exercise composition, and plan assembly, fronted by
//! the [`PlanEngine`] facade.

/// Plan packaging and adaptation rules
pub mod assembler;
/// Deterministic session/exercise composition
pub mod composer;
/// Orchestrating facade
pub mod engine;
/// Feedback signal aggregation
pub mod feedback;
/// Periodization math and weekly skeletons
pub mod periodization;

pub use assembler::{adaptation_rules, assemble, plan_name};
pub use composer::{ComposedExercises, ExerciseComposer};
pub use engine::{GenerateOptions, PlanEngine};
pub use feedback::{decide, AdjustmentDecision};
pub use periodization::{
    block_sequence, focus_for_week, phase_strategy, session_templates, PeriodizationOutline,
    PeriodizationPlanner, SessionSlot, SessionTemplate, WeekSkeleton,
};
