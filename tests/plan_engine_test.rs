// ABOUTME: End-to-end tests for PlanEngine against the in-memory store
// ABOUTME: Covers deterministic generation, adaptation rules, validation, and feedback adjustment ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use uuid::Uuid;

use grit_engine::config::EngineConfig;
use grit_engine::errors::ErrorCode;
use grit_engine::intelligence::{GenerateOptions, PlanEngine};
use grit_engine::models::{FeedbackSignal, PlanStatus, PlanType, SignalKind, TrainingBlock};
use grit_engine::test_utils::{InMemoryPlanStore, StoreOp};

use common::{football_profile, injured_profile};

fn engine_with_store() -> (Arc<InMemoryPlanStore>, PlanEngine) {
    let store = Arc::new(InMemoryPlanStore::new());
    let engine = PlanEngine::new(store.clone(), EngineConfig::default());
    (store, engine)
}

#[tokio::test]
async fn test_off_season_football_plan_end_to_end() {
    let (store, engine) = engine_with_store();
    let profile = football_profile();

    let plan = engine
        .generate_plan(&profile, &GenerateOptions::initial())
        .await
        .unwrap();

    assert_eq!(plan.name, "Football GRIT Plan - Off-Season");
    assert_eq!(plan.weeks.len(), 12);
    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(plan.plan_type, PlanType::Initial);
    assert!(!plan.ai_generated);

    // Off-season block sequence, three weeks per block.
    assert_eq!(plan.weeks[0].block, TrainingBlock::Hypertrophy);
    assert_eq!(plan.weeks[3].block, TrainingBlock::Strength);
    assert_eq!(plan.weeks[6].block, TrainingBlock::Power);
    assert_eq!(plan.weeks[11].block, TrainingBlock::Conditioning);

    for week in &plan.weeks {
        assert_eq!(week.sessions.len(), 3, "week {} session count", week.week);
        assert!(week.sessions.iter().all(|s| s.duration_minutes == 60));
        assert_eq!(week.volume_minutes, 180, "week {} volume", week.week);
        assert!(week.sessions.iter().all(|s| !s.warmup.is_empty()
            && !s.main.is_empty()
            && !s.cooldown.is_empty()));
    }

    // Deload weeks land on every fourth week regardless of block boundaries.
    for deload in [4, 8, 12] {
        let week = &plan.weeks[deload - 1];
        assert!(
            (week.intensity_score - 5.0).abs() < f64::EPSILON,
            "week {deload} should be a deload"
        );
    }

    // The generated plan was persisted through the store.
    let saved = store.saved_plans.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, plan.id);
}

#[tokio::test]
async fn test_injured_profile_gets_conditional_adaptation_rules() {
    let (_store, engine) = engine_with_store();
    let profile = injured_profile();

    let plan = engine
        .generate_plan(&profile, &GenerateOptions::initial())
        .await
        .unwrap();

    assert_eq!(plan.adaptation_rules.len(), 7);
    assert!(plan
        .adaptation_rules
        .contains(&"Modify exercises to avoid injury areas".to_owned()));
    assert!(plan
        .adaptation_rules
        .contains(&"Schedule extra recovery days when fatigue runs high".to_owned()));
    assert!(plan
        .adaptation_rules
        .contains(&"Adjust intensity to daily readiness".to_owned()));
}

#[tokio::test]
async fn test_incomplete_profile_is_rejected_with_field_names() {
    let (store, engine) = engine_with_store();
    let mut profile = football_profile();
    profile.training_days.clear();
    profile.equipment.clear();
    profile.goals.clear();

    let err = engine
        .generate_plan(&profile, &GenerateOptions::initial())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("training_days"));
    assert!(err.message.contains("equipment"));
    assert!(err.message.contains("goals"));
    assert!(store.saved_plans.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_for_unknown_athlete_is_not_found() {
    let (_store, engine) = engine_with_store();
    let err = engine
        .generate_plan_for_athlete(Uuid::new_v4(), PlanType::Initial)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_feedback_adjustment_saves_before_marking_processed() {
    let profile = football_profile();
    let athlete_id = profile.athlete_id;
    let store = Arc::new(InMemoryPlanStore::with_profile(profile));
    store.push_signals(vec![
        FeedbackSignal::new(athlete_id, SignalKind::TooHard),
        FeedbackSignal::new(athlete_id, SignalKind::TooHard),
        FeedbackSignal::new(athlete_id, SignalKind::TooHard),
    ]);
    let engine = PlanEngine::new(store.clone(), EngineConfig::default());

    let plan = engine
        .adjust_plan_based_on_feedback(athlete_id)
        .await
        .unwrap()
        .expect("three too-hard signals should trigger an adjustment");

    assert_eq!(plan.plan_type, PlanType::Adjustment);

    let ops = store.op_log.lock().unwrap();
    assert_eq!(
        *ops,
        vec![StoreOp::SavePlan(plan.id), StoreOp::MarkProcessed(plan.id)]
    );

    let signals = store.signals.lock().unwrap();
    assert!(signals
        .iter()
        .all(|s| s.processed && s.applied_to_plan_id == Some(plan.id)));
}

#[tokio::test]
async fn test_feedback_below_thresholds_leaves_plan_alone() {
    let profile = football_profile();
    let athlete_id = profile.athlete_id;
    let store = Arc::new(InMemoryPlanStore::with_profile(profile));
    store.push_signals(vec![
        FeedbackSignal::new(athlete_id, SignalKind::TooHard),
        FeedbackSignal::new(athlete_id, SignalKind::TooEasy),
    ]);
    let engine = PlanEngine::new(store.clone(), EngineConfig::default());

    let outcome = engine.adjust_plan_based_on_feedback(athlete_id).await.unwrap();
    assert!(outcome.is_none());
    assert!(store.op_log.lock().unwrap().is_empty());
    assert!(store.signals.lock().unwrap().iter().all(|s| !s.processed));
}

#[tokio::test]
async fn test_failed_save_leaves_signals_unprocessed() {
    let profile = football_profile();
    let athlete_id = profile.athlete_id;
    let store = Arc::new(InMemoryPlanStore::with_profile(profile));
    store.push_signals(vec![FeedbackSignal::new(athlete_id, SignalKind::Injury)]);
    store.fail_next_save(true);
    let engine = PlanEngine::new(store.clone(), EngineConfig::default());

    let err = engine
        .adjust_plan_based_on_feedback(athlete_id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);

    // The signal stays queued, so the next invocation retries the adjustment.
    assert!(store.op_log.lock().unwrap().is_empty());
    assert!(store.signals.lock().unwrap().iter().all(|s| !s.processed));

    store.fail_next_save(false);
    let retried = engine
        .adjust_plan_based_on_feedback(athlete_id)
        .await
        .unwrap();
    assert!(retried.is_some());
}

#[tokio::test]
async fn test_unknown_sport_plan_generates_without_error() {
    let (_store, engine) = engine_with_store();
    let profile = common::lacrosse_profile();

    let plan = engine
        .generate_plan(&profile, &GenerateOptions::initial())
        .await
        .unwrap();

    assert_eq!(plan.name, "Lacrosse GRIT Plan - Off-Season");
    assert!(plan
        .weeks
        .iter()
        .flat_map(|w| &w.sessions)
        .all(|s| !s.main.is_empty()));
}
