// ABOUTME: Plan, weekly plan, session, and exercise models with intensity bucketing
// ABOUTME: Defines training block and session kind enums plus the persisted Plan record shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Plan output types.
//!
//! A [`Plan`] owns its [`WeeklyPlan`]s, which own their [`Session`]s. These
//! records are what the external Plan Store persists; the engine only ever
//! produces them as immutable values.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::{Goal, Weekday};

/// Named multi-week sub-phase of a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingBlock {
    /// General physical preparation
    Foundation,
    /// Maximal strength development
    Strength,
    /// Rate-of-force development
    Power,
    /// Transfer to sport demands
    SportSpecific,
    /// In-season performance maintenance
    Maintenance,
    /// Dedicated recovery
    Recovery,
    /// Peak performance expression
    Peak,
    /// Pre-competition volume reduction
    Taper,
    /// Technical skill emphasis
    SkillFocus,
    /// Ramp back into structured training
    Preparation,
    /// Muscle growth emphasis
    Hypertrophy,
    /// Energy-system development
    Conditioning,
}

impl TrainingBlock {
    /// Human-readable block name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Strength => "Strength",
            Self::Power => "Power",
            Self::SportSpecific => "Sport-Specific",
            Self::Maintenance => "Maintenance",
            Self::Recovery => "Recovery",
            Self::Peak => "Peak",
            Self::Taper => "Taper",
            Self::SkillFocus => "Skill Focus",
            Self::Preparation => "Preparation",
            Self::Hypertrophy => "Hypertrophy",
            Self::Conditioning => "Conditioning",
        }
    }
}

impl fmt::Display for TrainingBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of training session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Resistance training
    Strength,
    /// Energy-system work
    Conditioning,
    /// Sport technique and decision making
    Skill,
    /// Explosive force production
    Power,
    /// Sprint and agility work
    Speed,
    /// Low-intensity restorative work
    Recovery,
    /// Scrimmage / game-simulation work
    Sport,
}

impl SessionKind {
    /// Lowercase kind name used in logs and serialized records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Conditioning => "conditioning",
            Self::Skill => "skill",
            Self::Power => "power",
            Self::Speed => "speed",
            Self::Recovery => "recovery",
            Self::Sport => "sport",
        }
    }
}

/// Discrete intensity bucket derived from the continuous 0-10 score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBucket {
    /// Score at or below 3
    Low,
    /// Score above 3 up to 6
    Moderate,
    /// Score above 6 up to 8
    High,
    /// Score above 8
    Max,
}

impl IntensityBucket {
    /// Bucket a continuous intensity score
    ///
    /// Boundary values map to the lower bucket: 3.0 is low, 6.0 is moderate,
    /// 8.0 is high.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            Self::Low
        } else if score <= 6.0 {
            Self::Moderate
        } else if score <= 8.0 {
            Self::High
        } else {
            Self::Max
        }
    }
}

/// Muscle-group focus area for strength work
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    /// Pressing musculature
    Chest,
    /// Pulling musculature
    Back,
    /// Lower body
    Legs,
    /// Shoulders and overhead work
    Shoulders,
    /// Trunk stability
    Core,
}

impl FocusArea {
    /// Lowercase tag used in session focus lists
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Core => "core",
        }
    }
}

/// A single prescribed exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Reps per set; may be a range ("6-8") or a duration ("30 seconds")
    pub reps: String,
    /// Rest between sets, in seconds
    pub rest_seconds: u32,
    /// Load guidance (e.g. "75-85% 1RM" or descriptive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_guidance: Option<String>,
    /// Tempo or coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    /// Create an exercise with no load guidance or notes
    pub fn new(name: impl Into<String>, sets: u32, reps: impl Into<String>, rest_seconds: u32) -> Self {
        Self {
            name: name.into(),
            sets,
            reps: reps.into(),
            rest_seconds,
            weight_guidance: None,
            notes: None,
        }
    }

    /// Attach load guidance
    #[must_use]
    pub fn with_weight(mut self, guidance: impl Into<String>) -> Self {
        self.weight_guidance = Some(guidance.into());
        self
    }

    /// Attach coaching notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A scheduled training session within a week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Session identifier
    pub id: Uuid,
    /// Scheduled day
    pub day: Weekday,
    /// Session kind
    pub kind: SessionKind,
    /// Display name (e.g. "Heavy Lower Strength")
    pub name: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Generic preparation exercises
    pub warmup: Vec<Exercise>,
    /// Main working set
    pub main: Vec<Exercise>,
    /// Generic recovery exercises
    pub cooldown: Vec<Exercise>,
    /// Focus-area tags for display and filtering
    pub focus_areas: Vec<String>,
    /// Intensity bucket derived from the week's continuous score
    pub intensity: IntensityBucket,
    /// Coaching note carried from the session template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One week of the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    /// 1-based week index
    pub week: u32,
    /// Block this week belongs to
    pub block: TrainingBlock,
    /// Textual focus description for the week
    pub focus: String,
    /// Ordered sessions, one per training day
    pub sessions: Vec<Session>,
    /// Sum of session durations, in minutes
    pub volume_minutes: u32,
    /// Continuous intensity score, 0-10
    pub intensity_score: f64,
}

/// Lifecycle status of a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Currently being followed
    Active,
    /// Ran to completion
    Completed,
    /// Superseded or abandoned
    Archived,
}

/// Whether a plan is a first generation or a feedback-driven adjustment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// First plan generated from the profile
    #[default]
    Initial,
    /// Re-generation folding in feedback signals
    Adjustment,
}

/// A complete persisted training plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier
    pub id: Uuid,
    /// Owning athlete
    pub athlete_id: Uuid,
    /// Plan title, `"{sport} GRIT Plan - {phase}"`
    pub name: String,
    /// Short description of the plan's intent
    pub description: String,
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Day after the final week (`start + weeks * 7 days`)
    pub end_date: NaiveDate,
    /// Season phase name the plan was built for
    pub phase: String,
    /// Snapshot of the athlete's goals at generation time
    pub goals: Vec<Goal>,
    /// Ordered weekly plans
    pub weeks: Vec<WeeklyPlan>,
    /// Progression strategy description
    pub progression_strategy: String,
    /// Advisory adaptation policy strings for a human coach
    pub adaptation_rules: Vec<String>,
    /// Lifecycle status
    pub status: PlanStatus,
    /// Initial generation or feedback adjustment
    pub plan_type: PlanType,
    /// Whether an external language model produced the session content
    pub ai_generated: bool,
    /// Generation cost in USD when LLM-backed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_cost: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Plan {
    /// Total plan duration in weeks
    #[must_use]
    pub fn duration_weeks(&self) -> u32 {
        u32::try_from((self.end_date - self.start_date).num_days() / 7).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_bucket_boundaries_map_low() {
        assert_eq!(IntensityBucket::from_score(3.0), IntensityBucket::Low);
        assert_eq!(IntensityBucket::from_score(6.0), IntensityBucket::Moderate);
        assert_eq!(IntensityBucket::from_score(8.0), IntensityBucket::High);
    }

    #[test]
    fn test_intensity_bucket_interiors() {
        assert_eq!(IntensityBucket::from_score(0.0), IntensityBucket::Low);
        assert_eq!(IntensityBucket::from_score(3.1), IntensityBucket::Moderate);
        assert_eq!(IntensityBucket::from_score(6.5), IntensityBucket::High);
        assert_eq!(IntensityBucket::from_score(8.01), IntensityBucket::Max);
        assert_eq!(IntensityBucket::from_score(10.0), IntensityBucket::Max);
    }

    #[test]
    fn test_exercise_builder() {
        let exercise = Exercise::new("Back Squat", 4, "5-8", 210).with_weight("75-85% 1RM");
        assert_eq!(exercise.sets, 4);
        assert_eq!(exercise.weight_guidance.as_deref(), Some("75-85% 1RM"));
        assert!(exercise.notes.is_none());
    }
}
