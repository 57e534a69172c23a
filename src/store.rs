// ABOUTME: Plan store collaborator trait for profiles, activity, signals, and plan persistence
// ABOUTME: Async interface implemented by the wrapping service's storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Plan store collaborator interface.
//!
//! Durable storage is external to the engine. The engine receives a
//! [`PlanStore`] handle by injection and performs no retries of its own:
//! storage errors propagate unchanged to the caller. The store is also the
//! place to enforce at-most-one-active-plan-per-athlete if the product wants
//! that, via its own query pattern; the engine does not coordinate
//! concurrent generations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{AthleteProfile, FeedbackSignal, JournalEntry, Plan, WorkoutLog};

/// Durable storage collaborator for profiles, plans, and feedback signals
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Fetch the athlete's profile
    ///
    /// # Errors
    /// Returns `ResourceNotFound` when the athlete has no profile, or a
    /// storage error on read failure.
    async fn get_profile(&self, athlete_id: Uuid) -> AppResult<AthleteProfile>;

    /// Fetch the athlete's most recent workouts, newest first
    ///
    /// # Errors
    /// Returns a storage error on read failure.
    async fn get_recent_workouts(
        &self,
        athlete_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutLog>>;

    /// Fetch the athlete's most recent journal entries, newest first
    ///
    /// # Errors
    /// Returns a storage error on read failure.
    async fn get_recent_journals(
        &self,
        athlete_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<JournalEntry>>;

    /// Fetch all of the athlete's unprocessed feedback signals
    ///
    /// # Errors
    /// Returns a storage error on read failure.
    async fn get_unprocessed_signals(&self, athlete_id: Uuid) -> AppResult<Vec<FeedbackSignal>>;

    /// Persist a plan, returning the stored record
    ///
    /// # Errors
    /// Returns a storage error on write failure.
    async fn save_plan(&self, plan: &Plan) -> AppResult<Plan>;

    /// Mark signals as processed, recording the plan that absorbed them
    ///
    /// Must only be called after the plan has been saved successfully, so a
    /// failed save leaves the signals unprocessed for the next attempt.
    ///
    /// # Errors
    /// Returns a storage error on write failure.
    async fn mark_signals_processed(&self, signal_ids: &[Uuid], plan_id: Uuid) -> AppResult<()>;
}
