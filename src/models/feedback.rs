// ABOUTME: Feedback signal model derived from workout logs and journal entries
// ABOUTME: Typed signal kinds with a processed flag and plan-application audit reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Feedback signal types.
//!
//! Signals are created by the external logging surfaces, read by the
//! aggregator while unprocessed, and marked processed (with the plan that
//! absorbed them) once a plan adjustment has been produced and saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of feedback signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Workout reported as too difficult
    TooHard,
    /// Workout reported as too easy
    TooEasy,
    /// Elevated fatigue reported in a journal
    HighFatigue,
    /// Injury flagged during logging
    Injury,
    /// Strong progress reported
    GreatProgress,
}

/// A discrete typed observation derived from logged activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSignal {
    /// Signal identifier
    pub id: Uuid,
    /// Athlete this signal belongs to
    pub athlete_id: Uuid,
    /// Signal kind
    pub kind: SignalKind,
    /// Signal strength on a 1-10 scale, when the source surface provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u8>,
    /// Whether this signal has been folded into a plan adjustment
    pub processed: bool,
    /// Plan that absorbed this signal, for auditability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_to_plan_id: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl FeedbackSignal {
    /// Create a new unprocessed signal
    #[must_use]
    pub fn new(athlete_id: Uuid, kind: SignalKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            athlete_id,
            kind,
            strength: None,
            processed: false,
            applied_to_plan_id: None,
            created_at: Utc::now(),
        }
    }
}
