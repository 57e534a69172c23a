// ABOUTME: Recent activity snapshot models consumed as generation context
// ABOUTME: Workout log and journal entry records read from the external store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Recent activity snapshot.
//!
//! These records are produced by the external logging surfaces. The engine
//! reads them as an immutable snapshot: they feed the LLM user prompt and
//! give the adjustment path its context. The engine never writes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::plan::SessionKind;

/// A logged workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Log identifier
    pub id: Uuid,
    /// Athlete who logged the workout
    pub athlete_id: Uuid,
    /// Date of the workout
    pub date: NaiveDate,
    /// Session kind, when the workout came from a plan session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_kind: Option<SessionKind>,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Rate of perceived exertion, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A practice or game journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Athlete who wrote the entry
    pub athlete_id: Uuid,
    /// Date of the entry
    pub date: NaiveDate,
    /// Self-reported fatigue, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue: Option<u8>,
    /// Self-reported confidence, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Bundle of recent activity passed into plan generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentActivity {
    /// Most recent workouts, newest first
    pub workouts: Vec<WorkoutLog>,
    /// Most recent journal entries, newest first
    pub journals: Vec<JournalEntry>,
}

impl RecentActivity {
    /// Whether the snapshot carries any data at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty() && self.journals.is_empty()
    }
}
