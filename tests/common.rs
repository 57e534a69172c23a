// ABOUTME: Shared profile builders for integration tests
// ABOUTME: Provides canonical athlete profiles matching the product's onboarding shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance
#![allow(dead_code)]

use uuid::Uuid;

use grit_engine::models::{
    AthleteProfile, EquipmentTier, ExperienceLevel, Goal, GoalCategory, GoalTimeline,
    MentalScores, RecoveryPriority, SeasonPhase, Sport, Weekday, WorkloadPerception,
};

/// Off-season football profile: 3 training days, full gym, 12-week goal
pub fn football_profile() -> AthleteProfile {
    AthleteProfile {
        athlete_id: Uuid::new_v4(),
        sport: Sport::Football,
        position: Some("Linebacker".to_owned()),
        competitive_level: Some("varsity".to_owned()),
        season_phase: SeasonPhase::OffSeason,
        equipment: vec![EquipmentTier::FullGym],
        training_days: vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
        session_duration_minutes: 60,
        experience: ExperienceLevel::Intermediate,
        workload: WorkloadPerception::Moderate,
        recovery_priority: RecoveryPriority::Moderate,
        mental: MentalScores {
            confidence: 7,
            focus: 6,
            readiness: 8,
        },
        strengths: vec!["explosiveness".to_owned()],
        weaknesses: vec!["conditioning".to_owned()],
        injuries: Vec::new(),
        goals: vec![Goal {
            category: GoalCategory::Physical,
            subcategory: "strength".to_owned(),
            priority: 4,
            timeline: GoalTimeline::ThreeMonths,
        }],
    }
}

/// Profile with a shoulder injury and high recovery priority
pub fn injured_profile() -> AthleteProfile {
    let mut profile = football_profile();
    profile.injuries = vec!["shoulder".to_owned()];
    profile.recovery_priority = RecoveryPriority::High;
    profile
}

/// Profile for an unrecognized sport with bodyweight-only equipment
pub fn lacrosse_profile() -> AthleteProfile {
    let mut profile = football_profile();
    profile.sport = Sport::parse("Lacrosse");
    profile.position = None;
    profile.equipment = vec![EquipmentTier::Bodyweight];
    profile
}

/// Profile with a timeline override on the primary goal
pub fn profile_with_timeline(timeline: GoalTimeline) -> AthleteProfile {
    let mut profile = football_profile();
    profile.goals[0].timeline = timeline;
    profile
}
