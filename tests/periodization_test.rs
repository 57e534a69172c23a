// ABOUTME: Unit tests for the periodization planner
// ABOUTME: Tests week counts, block distribution, wave loading, deloads, and intensity bucketing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod common;

use common::{football_profile, profile_with_timeline};
use grit_engine::config::PeriodizationConfig;
use grit_engine::intelligence::{block_sequence, PeriodizationPlanner};
use grit_engine::models::{GoalTimeline, IntensityBucket, SeasonPhase, TrainingBlock};

fn planner() -> PeriodizationPlanner {
    PeriodizationPlanner::new(PeriodizationConfig::default())
}

#[test]
fn test_total_weeks_follows_primary_goal_timeline() {
    let cases = [
        (GoalTimeline::SixWeeks, 6),
        (GoalTimeline::ThreeMonths, 12),
        (GoalTimeline::SixMonths, 24),
        (GoalTimeline::TwelveMonths, 52),
    ];
    for (timeline, expected) in cases {
        let profile = profile_with_timeline(timeline);
        let outline = planner().outline(&profile).unwrap();
        assert_eq!(outline.total_weeks, expected);
    }
}

#[test]
fn test_off_season_blocks_cycle_three_weeks_each() {
    // 12 weeks over 4 blocks: Hypertrophy, Strength, Power, Conditioning,
    // 3 weeks each.
    let profile = football_profile();
    let planner = planner();
    let outline = planner.outline(&profile).unwrap();
    assert_eq!(outline.weeks_per_block, 3);

    let weeks = planner.generate_weeks(&profile, &outline);
    let blocks: Vec<TrainingBlock> = weeks.iter().map(|w| w.block).collect();
    assert_eq!(&blocks[0..3], &[TrainingBlock::Hypertrophy; 3]);
    assert_eq!(&blocks[3..6], &[TrainingBlock::Strength; 3]);
    assert_eq!(&blocks[6..9], &[TrainingBlock::Power; 3]);
    assert_eq!(&blocks[9..12], &[TrainingBlock::Conditioning; 3]);
}

#[test]
fn test_phase_block_sequences() {
    assert_eq!(
        block_sequence(SeasonPhase::PreSeason),
        &[
            TrainingBlock::Foundation,
            TrainingBlock::Strength,
            TrainingBlock::Power,
            TrainingBlock::SportSpecific,
        ]
    );
    assert_eq!(
        block_sequence(SeasonPhase::InSeason),
        &[
            TrainingBlock::Maintenance,
            TrainingBlock::Recovery,
            TrainingBlock::Peak,
            TrainingBlock::Taper,
        ]
    );
    assert_eq!(
        block_sequence(SeasonPhase::PostSeason),
        &[
            TrainingBlock::Recovery,
            TrainingBlock::SkillFocus,
            TrainingBlock::Foundation,
            TrainingBlock::Preparation,
        ]
    );
}

#[test]
fn test_every_fourth_week_deloads_at_exactly_five() {
    let planner = planner();
    for total_weeks in [6, 12, 24, 52] {
        for week in 1..=total_weeks {
            let intensity = planner.intensity_for_week(week, total_weeks);
            if week % 4 == 0 {
                assert!(
                    (intensity - 5.0).abs() < f64::EPSILON,
                    "week {week} of {total_weeks} should deload at 5.0, got {intensity}"
                );
            } else {
                assert!(intensity > 5.0, "week {week} of {total_weeks}");
            }
        }
    }
}

#[test]
fn test_intensity_never_decreases_at_fixed_wave_position() {
    // Holding the wave position fixed, the global drift term means a later
    // week is never less intense.
    let planner = planner();
    let total = 52;
    for position in 1..=3u32 {
        let mut previous = 0.0;
        let mut week = position;
        while week <= total {
            let intensity = planner.intensity_for_week(week, total);
            assert!(
                intensity >= previous,
                "intensity dropped at week {week} (position {position})"
            );
            previous = intensity;
            week += 4;
        }
    }
}

#[test]
fn test_intensity_bucket_boundaries_map_to_lower_bucket() {
    assert_eq!(IntensityBucket::from_score(3.0), IntensityBucket::Low);
    assert_eq!(IntensityBucket::from_score(6.0), IntensityBucket::Moderate);
    assert_eq!(IntensityBucket::from_score(8.0), IntensityBucket::High);
    assert_eq!(IntensityBucket::from_score(8.5), IntensityBucket::Max);
}

#[test]
fn test_six_week_plan_truncates_trailing_block() {
    // ceil(6/4) = 2 weeks per block; the Conditioning tail is never reached.
    let profile = profile_with_timeline(GoalTimeline::SixWeeks);
    let planner = planner();
    let outline = planner.outline(&profile).unwrap();
    assert_eq!(outline.weeks_per_block, 2);

    let weeks = planner.generate_weeks(&profile, &outline);
    assert_eq!(weeks.len(), 6);
    assert!(weeks.iter().all(|w| w.block != TrainingBlock::Conditioning));
    assert_eq!(weeks[5].block, TrainingBlock::Power);
}

#[test]
fn test_skeleton_has_one_slot_per_training_day_in_order() {
    let profile = football_profile();
    let planner = planner();
    let outline = planner.outline(&profile).unwrap();
    let weeks = planner.generate_weeks(&profile, &outline);

    for week in &weeks {
        assert_eq!(week.slots.len(), profile.training_days.len());
        for (slot, &day) in week.slots.iter().zip(&profile.training_days) {
            assert_eq!(slot.day, day);
            assert_eq!(slot.duration_minutes, 60);
        }
    }
}

#[test]
fn test_session_templates_cycle_round_robin() {
    use grit_engine::models::Weekday;

    // Seven training days against a four-template block wraps around.
    let mut profile = football_profile();
    profile.training_days = vec![
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
    let planner = planner();
    let outline = planner.outline(&profile).unwrap();
    let weeks = planner.generate_weeks(&profile, &outline);

    let first_week = &weeks[0];
    assert_eq!(first_week.slots[0].template, first_week.slots[4].template);
    assert_eq!(first_week.slots[1].template, first_week.slots[5].template);
}

#[test]
fn test_deload_week_focus_text_mentions_deload() {
    let profile = football_profile();
    let planner = planner();
    let outline = planner.outline(&profile).unwrap();
    let weeks = planner.generate_weeks(&profile, &outline);
    assert!(weeks[3].focus.to_lowercase().contains("deload"));
}
