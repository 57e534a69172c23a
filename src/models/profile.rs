// ABOUTME: Athlete profile model normalized from onboarding answers
// ABOUTME: Defines sport, season phase, equipment, schedule, goal, and readiness types with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Athlete profile types.
//!
//! The profile is produced by the external onboarding collaborator and
//! consumed read-only by the periodization planner. [`AthleteProfile::validate`]
//! enforces the invariants a plan cannot be produced without; mental scores
//! are clamped rather than rejected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Supported team sports
///
/// The `Other` variant carries unrecognized sport names so that generation
/// never fails for a sport we have no bespoke drill bank for; the composer
/// logs the fallback branch when it substitutes generic work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// American football
    Football,
    /// Basketball
    Basketball,
    /// Soccer / association football
    Soccer,
    /// Any sport without a bespoke drill bank
    Other(String),
}

impl Sport {
    /// Parse a sport from a user-supplied string
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "football" => Self::Football,
            "basketball" => Self::Basketball,
            "soccer" => Self::Soccer,
            _ => Self::Other(s.trim().to_owned()),
        }
    }

    /// Human-readable sport name
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Football => "Football",
            Self::Basketball => "Basketball",
            Self::Soccer => "Soccer",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Phase of the competitive season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonPhase {
    /// Building toward the competitive season
    PreSeason,
    /// Actively competing
    InSeason,
    /// Immediately after the competitive season
    PostSeason,
    /// Extended gap between seasons
    OffSeason,
}

impl SeasonPhase {
    /// Human-readable phase name used in plan titles
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PreSeason => "Pre-Season",
            Self::InSeason => "In-Season",
            Self::PostSeason => "Post-Season",
            Self::OffSeason => "Off-Season",
        }
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Equipment available to the athlete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentTier {
    /// No equipment at all
    Bodyweight,
    /// Dumbbells and bands at home
    HomeGym,
    /// School weight room (barbells, racks)
    SchoolGym,
    /// Commercial gym with full equipment
    FullGym,
}

impl EquipmentTier {
    /// Whether this tier provides loaded barbell work
    #[must_use]
    pub const fn has_barbell(self) -> bool {
        matches!(self, Self::FullGym | Self::SchoolGym)
    }
}

/// Athlete training experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than a year of structured training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three or more years
    Advanced,
    /// Competitive at a high level with a long training history
    Elite,
}

/// Athlete's perception of their current overall workload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadPerception {
    /// Plenty of capacity
    Light,
    /// Manageable
    Moderate,
    /// Close to capacity
    Heavy,
    /// Over capacity
    Overwhelming,
}

/// How much the athlete needs to prioritize recovery
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryPriority {
    /// Recovering well
    Low,
    /// Typical recovery needs
    Moderate,
    /// Recovery is a limiting factor
    High,
}

/// Day of the week for scheduling sessions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// Human-readable day name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Self-reported mental readiness scores, each on a 1-10 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentalScores {
    /// Confidence in own abilities
    pub confidence: u8,
    /// Ability to stay focused in training and competition
    pub focus: u8,
    /// Readiness to take on hard training
    pub readiness: u8,
}

impl MentalScores {
    /// Clamp all scores into the valid 1-10 range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            confidence: self.confidence.clamp(1, 10),
            focus: self.focus.clamp(1, 10),
            readiness: self.readiness.clamp(1, 10),
        }
    }
}

impl Default for MentalScores {
    fn default() -> Self {
        Self {
            confidence: 5,
            focus: 5,
            readiness: 5,
        }
    }
}

/// Goal category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    /// Strength, speed, conditioning, body composition
    Physical,
    /// Sport technique and decision making
    Skill,
    /// Confidence, focus, composure
    Mental,
    /// Sleep, mobility, injury resilience
    Recovery,
    /// Nutrition, habits, schedule
    Lifestyle,
}

/// Goal timeline, which also determines total plan duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalTimeline {
    /// Six-week push
    #[serde(rename = "6-weeks")]
    SixWeeks,
    /// One quarter
    #[serde(rename = "3-months")]
    ThreeMonths,
    /// Half a year
    #[serde(rename = "6-months")]
    SixMonths,
    /// Full year
    #[serde(rename = "12-months")]
    TwelveMonths,
}

impl GoalTimeline {
    /// Total plan duration derived from this timeline
    #[must_use]
    pub const fn total_weeks(self) -> u32 {
        match self {
            Self::SixWeeks => 6,
            Self::ThreeMonths => 12,
            Self::SixMonths => 24,
            Self::TwelveMonths => 52,
        }
    }
}

/// A single athlete goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Goal category
    pub category: GoalCategory,
    /// Free-text subcategory from the onboarding catalog
    pub subcategory: String,
    /// Priority 1-5; validated but currently not read by the periodization math
    pub priority: u8,
    /// Timeline; the first goal's timeline sets the plan duration
    pub timeline: GoalTimeline,
}

/// Normalized athlete profile produced by the onboarding collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Identity reference into the external user store
    pub athlete_id: Uuid,

    /// Primary sport
    pub sport: Sport,

    /// Playing position, when the sport has one
    #[serde(default)]
    pub position: Option<String>,

    /// Competitive level description (e.g. "varsity", "club")
    #[serde(default)]
    pub competitive_level: Option<String>,

    /// Current phase of the competitive season
    pub season_phase: SeasonPhase,

    /// Available equipment tiers (at least one required)
    pub equipment: Vec<EquipmentTier>,

    /// Training days in the athlete's declared order (at least one required)
    pub training_days: Vec<Weekday>,

    /// Target session duration in minutes
    pub session_duration_minutes: u32,

    /// Training experience level
    pub experience: ExperienceLevel,

    /// Current workload perception
    pub workload: WorkloadPerception,

    /// Recovery priority
    #[serde(default = "default_recovery_priority")]
    pub recovery_priority: RecoveryPriority,

    /// Mental readiness scores
    #[serde(default)]
    pub mental: MentalScores,

    /// Self-reported strengths (at most three kept)
    #[serde(default)]
    pub strengths: Vec<String>,

    /// Self-reported weaknesses (at most three kept)
    #[serde(default)]
    pub weaknesses: Vec<String>,

    /// Free-text injury list
    #[serde(default)]
    pub injuries: Vec<String>,

    /// Ordered goals (at least one required); the first is the primary goal
    pub goals: Vec<Goal>,
}

const fn default_recovery_priority() -> RecoveryPriority {
    RecoveryPriority::Moderate
}

impl AthleteProfile {
    /// Validate the invariants required to produce a plan
    ///
    /// # Errors
    /// Returns a validation error naming every missing field when the profile
    /// has no training days, no equipment tier, or no goals, or when a goal
    /// priority is outside 1-5.
    pub fn validate(&self) -> AppResult<()> {
        let mut missing = Vec::new();
        if self.training_days.is_empty() {
            missing.push("training_days");
        }
        if self.equipment.is_empty() {
            missing.push("equipment");
        }
        if self.goals.is_empty() {
            missing.push("goals");
        }
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "profile is missing required field(s): {}",
                missing.join(", ")
            )));
        }
        if let Some(goal) = self.goals.iter().find(|g| !(1..=5).contains(&g.priority)) {
            return Err(AppError::validation(format!(
                "goal priority {} is outside the 1-5 range",
                goal.priority
            )));
        }
        Ok(())
    }

    /// Copy of the profile with mental scores clamped and strength/weakness
    /// lists truncated to three entries
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.mental = self.mental.clamped();
        normalized.strengths.truncate(3);
        normalized.weaknesses.truncate(3);
        normalized
    }

    /// The primary goal, which determines plan duration
    ///
    /// # Errors
    /// Returns a validation error for a profile with no goals.
    pub fn primary_goal(&self) -> AppResult<&Goal> {
        self.goals
            .first()
            .ok_or_else(|| AppError::validation("profile is missing required field(s): goals"))
    }

    /// Best available equipment tier
    #[must_use]
    pub fn best_equipment(&self) -> EquipmentTier {
        self.equipment
            .iter()
            .copied()
            .max()
            .unwrap_or(EquipmentTier::Bodyweight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_parse_known_and_unknown() {
        assert_eq!(Sport::parse("Football"), Sport::Football);
        assert_eq!(Sport::parse("soccer"), Sport::Soccer);
        assert_eq!(
            Sport::parse("Lacrosse"),
            Sport::Other("Lacrosse".to_owned())
        );
    }

    #[test]
    fn test_timeline_week_lookup() {
        assert_eq!(GoalTimeline::SixWeeks.total_weeks(), 6);
        assert_eq!(GoalTimeline::ThreeMonths.total_weeks(), 12);
        assert_eq!(GoalTimeline::SixMonths.total_weeks(), 24);
        assert_eq!(GoalTimeline::TwelveMonths.total_weeks(), 52);
    }

    #[test]
    fn test_mental_scores_clamped() {
        let scores = MentalScores {
            confidence: 0,
            focus: 14,
            readiness: 7,
        };
        let clamped = scores.clamped();
        assert_eq!(clamped.confidence, 1);
        assert_eq!(clamped.focus, 10);
        assert_eq!(clamped.readiness, 7);
    }

    #[test]
    fn test_best_equipment_prefers_barbell_access() {
        let tiers = vec![EquipmentTier::Bodyweight, EquipmentTier::SchoolGym];
        assert_eq!(
            tiers.iter().copied().max(),
            Some(EquipmentTier::SchoolGym)
        );
        assert!(EquipmentTier::SchoolGym.has_barbell());
        assert!(!EquipmentTier::HomeGym.has_barbell());
    }
}
