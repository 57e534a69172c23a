// ABOUTME: Unit tests for the feedback signal aggregator
// ABOUTME: Tests rule precedence, thresholds, and the unprocessed-only tally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use uuid::Uuid;

use grit_engine::intelligence::decide;
use grit_engine::models::{FeedbackSignal, SignalKind};

fn signals_of(kinds: &[SignalKind]) -> Vec<FeedbackSignal> {
    let athlete = Uuid::new_v4();
    kinds
        .iter()
        .map(|&kind| FeedbackSignal::new(athlete, kind))
        .collect()
}

#[test]
fn test_injury_outranks_too_hard() {
    // An injury signal plus three too-hard signals must yield the injury
    // reason: first match wins.
    let signals = signals_of(&[
        SignalKind::Injury,
        SignalKind::TooHard,
        SignalKind::TooHard,
        SignalKind::TooHard,
    ]);
    let decision = decide(&signals);
    assert!(decision.should_adjust);
    let reason = decision.reason.unwrap();
    assert!(reason.contains("injury"));
    assert!(!reason.contains("difficult"));
}

#[test]
fn test_too_hard_fires_before_great_progress() {
    // Scenario: three too-hard and two great-progress signals. The too-hard
    // rule is both higher priority and the only one at threshold.
    let signals = signals_of(&[
        SignalKind::TooHard,
        SignalKind::TooHard,
        SignalKind::TooHard,
        SignalKind::GreatProgress,
        SignalKind::GreatProgress,
    ]);
    let decision = decide(&signals);
    assert!(decision.should_adjust);
    assert!(decision.reason.unwrap().contains("too difficult"));
}

#[test]
fn test_high_fatigue_threshold_is_two() {
    assert!(!decide(&signals_of(&[SignalKind::HighFatigue])).should_adjust);
    assert!(decide(&signals_of(&[SignalKind::HighFatigue, SignalKind::HighFatigue])).should_adjust);
}

#[test]
fn test_too_easy_and_great_progress_thresholds_are_three() {
    assert!(!decide(&signals_of(&[SignalKind::TooEasy, SignalKind::TooEasy])).should_adjust);
    let easy = decide(&signals_of(&[
        SignalKind::TooEasy,
        SignalKind::TooEasy,
        SignalKind::TooEasy,
    ]));
    assert!(easy.reason.unwrap().contains("too easy"));

    let progress = decide(&signals_of(&[
        SignalKind::GreatProgress,
        SignalKind::GreatProgress,
        SignalKind::GreatProgress,
    ]));
    assert!(progress.reason.unwrap().contains("progress"));
}

#[test]
fn test_processed_signals_do_not_count() {
    let mut signals = signals_of(&[
        SignalKind::TooHard,
        SignalKind::TooHard,
        SignalKind::TooHard,
    ]);
    signals[0].processed = true;
    assert!(!decide(&signals).should_adjust);
}

#[test]
fn test_mixed_below_threshold_signals_keep_plan() {
    let signals = signals_of(&[
        SignalKind::TooHard,
        SignalKind::TooEasy,
        SignalKind::HighFatigue,
        SignalKind::GreatProgress,
    ]);
    let decision = decide(&signals);
    assert!(!decision.should_adjust);
    assert!(decision.reason.is_none());
}
