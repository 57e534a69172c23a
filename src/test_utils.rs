// ABOUTME: Test utilities providing an in-memory plan store with an operation log
// ABOUTME: Centralizes test doubles so integration tests exercise the engine against consistent storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! In-memory [`PlanStore`] for tests.
//!
//! The store records the order of mutating operations so tests can assert
//! the save-before-mark-processed invariant, and can be told to fail saves
//! to exercise the retry-on-next-invocation path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{AthleteProfile, FeedbackSignal, JournalEntry, Plan, WorkoutLog};
use crate::store::PlanStore;

/// Mutating operations recorded by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// `save_plan` was called with this plan id
    SavePlan(Uuid),
    /// `mark_signals_processed` was called for this plan id
    MarkProcessed(Uuid),
}

/// In-memory plan store backed by mutex-guarded vectors
#[derive(Default)]
pub struct InMemoryPlanStore {
    /// Stored profiles
    pub profiles: Mutex<Vec<AthleteProfile>>,
    /// Stored workout logs, newest first
    pub workouts: Mutex<Vec<WorkoutLog>>,
    /// Stored journal entries, newest first
    pub journals: Mutex<Vec<JournalEntry>>,
    /// Stored feedback signals
    pub signals: Mutex<Vec<FeedbackSignal>>,
    /// Plans saved through the store
    pub saved_plans: Mutex<Vec<Plan>>,
    /// Ordered log of mutating operations
    pub op_log: Mutex<Vec<StoreOp>>,
    fail_save: AtomicBool,
}

impl InMemoryPlanStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one profile
    #[must_use]
    pub fn with_profile(profile: AthleteProfile) -> Self {
        let store = Self::new();
        store
            .profiles
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(profile);
        store
    }

    /// Make subsequent `save_plan` calls fail with a storage error
    pub fn fail_next_save(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    /// Add unprocessed signals for an athlete
    pub fn push_signals(&self, signals: Vec<FeedbackSignal>) {
        self.signals
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .extend(signals);
    }

    fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn get_profile(&self, athlete_id: Uuid) -> AppResult<AthleteProfile> {
        Self::lock(&self.profiles)
            .iter()
            .find(|p| p.athlete_id == athlete_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("profile for athlete {athlete_id}")))
    }

    async fn get_recent_workouts(
        &self,
        athlete_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutLog>> {
        Ok(Self::lock(&self.workouts)
            .iter()
            .filter(|w| w.athlete_id == athlete_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_recent_journals(
        &self,
        athlete_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<JournalEntry>> {
        Ok(Self::lock(&self.journals)
            .iter()
            .filter(|j| j.athlete_id == athlete_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_unprocessed_signals(&self, athlete_id: Uuid) -> AppResult<Vec<FeedbackSignal>> {
        Ok(Self::lock(&self.signals)
            .iter()
            .filter(|s| s.athlete_id == athlete_id && !s.processed)
            .cloned()
            .collect())
    }

    async fn save_plan(&self, plan: &Plan) -> AppResult<Plan> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(AppError::storage("simulated plan save failure"));
        }
        Self::lock(&self.op_log).push(StoreOp::SavePlan(plan.id));
        Self::lock(&self.saved_plans).push(plan.clone());
        Ok(plan.clone())
    }

    async fn mark_signals_processed(&self, signal_ids: &[Uuid], plan_id: Uuid) -> AppResult<()> {
        Self::lock(&self.op_log).push(StoreOp::MarkProcessed(plan_id));
        let mut signals = Self::lock(&self.signals);
        for signal in signals.iter_mut() {
            if signal_ids.contains(&signal.id) {
                signal.processed = true;
                signal.applied_to_plan_id = Some(plan_id);
            }
        }
        Ok(())
    }
}
