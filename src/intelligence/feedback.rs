// ABOUTME: Feedback signal aggregator reducing logged signals to an adjustment decision
// ABOUTME: Priority-ordered rule evaluation over unprocessed signal tallies, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Feedback signal aggregation.
//!
//! [`decide`] is a pure function: it reads a snapshot of signals and returns
//! a coarse adjustment decision. The caller is responsible for marking
//! signals processed after a plan has been produced and saved from the
//! decision.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{FeedbackSignal, SignalKind};

/// Minimum high-fatigue signals before an adjustment fires
const HIGH_FATIGUE_THRESHOLD: usize = 2;
/// Minimum too-hard / too-easy / great-progress signals before an adjustment fires
const SENTIMENT_THRESHOLD: usize = 3;

/// Coarse adjustment decision produced from recent feedback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdjustmentDecision {
    /// Whether a plan adjustment should be generated
    pub should_adjust: bool,
    /// Reason string carried into the adjusted plan's generation context
    pub reason: Option<String>,
}

impl AdjustmentDecision {
    fn adjust(reason: &str) -> Self {
        Self {
            should_adjust: true,
            reason: Some(reason.to_owned()),
        }
    }

    fn keep() -> Self {
        Self {
            should_adjust: false,
            reason: None,
        }
    }
}

/// Decide whether recent feedback warrants regenerating the plan
///
/// Only unprocessed signals are tallied. Rules are evaluated in priority
/// order and the first match wins: an injury always outranks volume or
/// difficulty complaints.
#[must_use]
pub fn decide(signals: &[FeedbackSignal]) -> AdjustmentDecision {
    let mut counts: HashMap<SignalKind, usize> = HashMap::new();
    for signal in signals.iter().filter(|s| !s.processed) {
        *counts.entry(signal.kind).or_insert(0) += 1;
    }
    let count = |kind: SignalKind| counts.get(&kind).copied().unwrap_or(0);

    if count(SignalKind::Injury) > 0 {
        return AdjustmentDecision::adjust(
            "injury reported - modify exercises to avoid affected areas",
        );
    }
    if count(SignalKind::HighFatigue) >= HIGH_FATIGUE_THRESHOLD {
        return AdjustmentDecision::adjust("consistent high fatigue - reduce volume and intensity");
    }
    if count(SignalKind::TooHard) >= SENTIMENT_THRESHOLD {
        return AdjustmentDecision::adjust(
            "workouts consistently too difficult - reduce intensity",
        );
    }
    if count(SignalKind::TooEasy) >= SENTIMENT_THRESHOLD {
        return AdjustmentDecision::adjust("workouts consistently too easy - increase challenge");
    }
    if count(SignalKind::GreatProgress) >= SENTIMENT_THRESHOLD {
        return AdjustmentDecision::adjust("excellent progress - ready for progression");
    }

    AdjustmentDecision::keep()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn signals_of(kinds: &[SignalKind]) -> Vec<FeedbackSignal> {
        let athlete = Uuid::new_v4();
        kinds
            .iter()
            .map(|&kind| FeedbackSignal::new(athlete, kind))
            .collect()
    }

    #[test]
    fn test_no_signals_keeps_plan() {
        let decision = decide(&[]);
        assert!(!decision.should_adjust);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_single_injury_triggers_adjustment() {
        let decision = decide(&signals_of(&[SignalKind::Injury]));
        assert!(decision.should_adjust);
        assert!(decision.reason.unwrap().contains("injury"));
    }

    #[test]
    fn test_processed_signals_are_ignored() {
        let mut signals = signals_of(&[SignalKind::Injury]);
        signals[0].processed = true;
        assert!(!decide(&signals).should_adjust);
    }

    #[test]
    fn test_two_high_fatigue_signals_fire() {
        let decision = decide(&signals_of(&[SignalKind::HighFatigue, SignalKind::HighFatigue]));
        assert!(decision.should_adjust);
        assert!(decision.reason.unwrap().contains("fatigue"));
    }

    #[test]
    fn test_two_too_hard_signals_do_not_fire() {
        let decision = decide(&signals_of(&[SignalKind::TooHard, SignalKind::TooHard]));
        assert!(!decision.should_adjust);
    }
}
