// ABOUTME: Data model module for athlete profiles, plans, activity, and feedback signals
// ABOUTME: Re-exports the model types used across the engine and by the wrapping service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Engine data models.

/// Recent activity snapshot records
pub mod activity;
/// Feedback signal types
pub mod feedback;
/// Plan output types
pub mod plan;
/// Athlete profile types
pub mod profile;

pub use activity::{JournalEntry, RecentActivity, WorkoutLog};
pub use feedback::{FeedbackSignal, SignalKind};
pub use plan::{
    Exercise, FocusArea, IntensityBucket, Plan, PlanStatus, PlanType, Session, SessionKind,
    TrainingBlock, WeeklyPlan,
};
pub use profile::{
    AthleteProfile, EquipmentTier, ExperienceLevel, Goal, GoalCategory, GoalTimeline,
    MentalScores, RecoveryPriority, SeasonPhase, Sport, Weekday, WorkloadPerception,
};
