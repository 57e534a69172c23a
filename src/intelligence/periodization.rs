// ABOUTME: Periodization planner producing phase strategy, block sequence, and weekly skeletons
// ABOUTME: Implements wave loading with fixed deloads and a global progressive-overload drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Periodization math.
//!
//! The planner converts a profile into a [`PeriodizationOutline`] (phase
//! strategy, block sequence, total weeks) and a week-by-week skeleton. The
//! four-week loading wave is anchored to the global week index: intensity
//! climbs for three weeks, drops to a fixed deload on the fourth, and a
//! `week / total_weeks` drift raises the whole curve as the plan advances.
//! Blocks are distributed evenly via ceiling division; when the total week
//! count is not a multiple of the block count the tail blocks are truncated
//! (short plans may never reach them) so the week count always matches the
//! goal timeline.

use serde::{Deserialize, Serialize};

use crate::config::PeriodizationConfig;
use crate::errors::AppResult;
use crate::models::{
    AthleteProfile, FocusArea, SeasonPhase, SessionKind, TrainingBlock, Weekday,
};

/// Fixed session template attached to a skeleton slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTemplate {
    /// Session kind
    pub kind: SessionKind,
    /// Display name
    pub name: &'static str,
    /// Focus-area tags for display
    pub tags: &'static [&'static str],
    /// Muscle-group focus driving strength exercise selection
    pub focus: &'static [FocusArea],
    /// Default coaching note
    pub note: &'static str,
}

/// A session slot before exercises are filled in
#[derive(Debug, Clone)]
pub struct SessionSlot {
    /// Scheduled day
    pub day: Weekday,
    /// Template selected for this slot
    pub template: &'static SessionTemplate,
    /// Duration in minutes, from the profile
    pub duration_minutes: u32,
}

/// The day/type/duration shell of one week before composition
#[derive(Debug, Clone)]
pub struct WeekSkeleton {
    /// 1-based week index
    pub week: u32,
    /// Block this week belongs to
    pub block: TrainingBlock,
    /// Textual focus for the week
    pub focus: String,
    /// Continuous intensity score, 0-10
    pub intensity_score: f64,
    /// One slot per training day, in the athlete's declared order
    pub slots: Vec<SessionSlot>,
}

/// Phase strategy and block sequence for a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodizationOutline {
    /// Season phase the outline was built for
    pub phase: SeasonPhase,
    /// Progression strategy description
    pub strategy: String,
    /// Ordered block sequence
    pub blocks: Vec<TrainingBlock>,
    /// Total plan duration in weeks
    pub total_weeks: u32,
    /// Weeks allotted per block (ceiling division)
    pub weeks_per_block: u32,
}

/// Deterministic periodization planner
#[derive(Debug, Clone)]
pub struct PeriodizationPlanner {
    config: PeriodizationConfig,
}

impl PeriodizationPlanner {
    /// Create a planner with the given tunables
    #[must_use]
    pub const fn new(config: PeriodizationConfig) -> Self {
        Self { config }
    }

    /// Build the phase outline for a profile
    ///
    /// # Errors
    /// Returns a validation error when the profile has no goals.
    pub fn outline(&self, profile: &AthleteProfile) -> AppResult<PeriodizationOutline> {
        let blocks = block_sequence(profile.season_phase);
        let total_weeks = profile.primary_goal()?.timeline.total_weeks();
        let block_count = u32::try_from(blocks.len()).unwrap_or(1);
        let weeks_per_block = total_weeks.div_ceil(block_count);

        Ok(PeriodizationOutline {
            phase: profile.season_phase,
            strategy: phase_strategy(profile.season_phase).to_owned(),
            blocks: blocks.to_vec(),
            total_weeks,
            weeks_per_block,
        })
    }

    /// Generate week-by-week session skeletons for an outline
    #[must_use]
    pub fn generate_weeks(
        &self,
        profile: &AthleteProfile,
        outline: &PeriodizationOutline,
    ) -> Vec<WeekSkeleton> {
        (1..=outline.total_weeks)
            .map(|week| {
                let block = block_for_week(outline, week);
                let wave = self.week_in_wave(week);
                let slots = profile
                    .training_days
                    .iter()
                    .enumerate()
                    .map(|(day_index, &day)| {
                        let templates = session_templates(block);
                        SessionSlot {
                            day,
                            template: &templates[day_index % templates.len()],
                            duration_minutes: profile.session_duration_minutes,
                        }
                    })
                    .collect();

                WeekSkeleton {
                    week,
                    block,
                    focus: focus_for_week(block, wave).to_owned(),
                    intensity_score: self.intensity_for_week(week, outline.total_weeks),
                    slots,
                }
            })
            .collect()
    }

    /// Position of a week within the loading wave, 1-based
    #[must_use]
    pub const fn week_in_wave(&self, week: u32) -> u32 {
        ((week - 1) % self.config.wave_length_weeks) + 1
    }

    /// Whether a week is a deload week
    #[must_use]
    pub const fn is_deload(&self, week: u32) -> bool {
        self.week_in_wave(week) == self.config.wave_length_weeks
    }

    /// Continuous intensity score for a week
    ///
    /// Deload weeks are pinned to the configured recovery intensity. Other
    /// weeks climb within the wave and drift upward with overall plan
    /// progress, capped at the configured maximum.
    #[must_use]
    pub fn intensity_for_week(&self, week: u32, total_weeks: u32) -> f64 {
        if self.is_deload(week) {
            return self.config.deload_intensity;
        }
        let wave = self.week_in_wave(week);
        let ramp = self.config.wave_increment * f64::from(wave - 1);
        let drift = self.config.drift_weight * f64::from(week) / f64::from(total_weeks.max(1));
        (self.config.base_intensity + ramp + drift).min(self.config.max_intensity)
    }
}

/// Ordered block sequence for a season phase
#[must_use]
pub const fn block_sequence(phase: SeasonPhase) -> &'static [TrainingBlock; 4] {
    match phase {
        SeasonPhase::PreSeason => &[
            TrainingBlock::Foundation,
            TrainingBlock::Strength,
            TrainingBlock::Power,
            TrainingBlock::SportSpecific,
        ],
        SeasonPhase::InSeason => &[
            TrainingBlock::Maintenance,
            TrainingBlock::Recovery,
            TrainingBlock::Peak,
            TrainingBlock::Taper,
        ],
        SeasonPhase::PostSeason => &[
            TrainingBlock::Recovery,
            TrainingBlock::SkillFocus,
            TrainingBlock::Foundation,
            TrainingBlock::Preparation,
        ],
        SeasonPhase::OffSeason => &[
            TrainingBlock::Hypertrophy,
            TrainingBlock::Strength,
            TrainingBlock::Power,
            TrainingBlock::Conditioning,
        ],
    }
}

/// Progression strategy description for a season phase
#[must_use]
pub const fn phase_strategy(phase: SeasonPhase) -> &'static str {
    match phase {
        SeasonPhase::PreSeason => {
            "Progressive build toward competition readiness: convert off-season gains into sport-ready power"
        }
        SeasonPhase::InSeason => {
            "Maintain performance while managing fatigue: minimum effective dose around competition"
        }
        SeasonPhase::PostSeason => {
            "Restore and rebuild: recover from the season, then address weaknesses"
        }
        SeasonPhase::OffSeason => {
            "Maximize physical development: build muscle, strength, and work capacity"
        }
    }
}

/// Block index for a week, clamped to the final block
fn block_for_week(outline: &PeriodizationOutline, week: u32) -> TrainingBlock {
    let index = ((week - 1) / outline.weeks_per_block) as usize;
    outline.blocks[index.min(outline.blocks.len() - 1)]
}

/// Weekly focus text, indexed by position in the loading wave
///
/// Four flavors per block: building, progression, peak work, deload.
#[must_use]
pub fn focus_for_week(block: TrainingBlock, week_in_wave: u32) -> &'static str {
    let index = (week_in_wave.saturating_sub(1)).min(3) as usize;
    focus_texts(block)[index]
}

const fn focus_texts(block: TrainingBlock) -> [&'static str; 4] {
    match block {
        TrainingBlock::Foundation => [
            "Establish movement quality and training rhythm",
            "Progress foundational loads and positions",
            "Consolidate base strength and capacity",
            "Deload: easy movement, extra mobility",
        ],
        TrainingBlock::Strength => [
            "Build top-end strength in the main lifts",
            "Push working weights while holding bar speed",
            "Heaviest strength work of the block",
            "Deload: drop the load, keep the patterns",
        ],
        TrainingBlock::Power => [
            "Introduce explosive intent on every rep",
            "Increase power output against moderate loads",
            "Peak power expression at game speeds",
            "Deload: low-dose springiness, full recovery",
        ],
        TrainingBlock::SportSpecific => [
            "Blend physical qualities into sport movement",
            "Sharpen position-specific demands",
            "Compete-level intensity in sport drills",
            "Deload: light skill work, stay fresh",
        ],
        TrainingBlock::Maintenance => [
            "Hold strength with minimum effective volume",
            "Keep intensity, trim volume around games",
            "Touch heavy weights briefly to preserve output",
            "Deload: recovery takes priority this week",
        ],
        TrainingBlock::Recovery => [
            "Downshift: easy movement and sleep focus",
            "Gentle reintroduction of structured work",
            "Restore range of motion and aerobic base",
            "Deload: near-complete rest",
        ],
        TrainingBlock::Peak => [
            "Raise intensity while cutting volume",
            "Sharpen speed and power for competition",
            "Peak outputs: short, fast, explosive",
            "Deload: taper volume ahead of competition",
        ],
        TrainingBlock::Taper => [
            "Cut volume hard, keep small intensity touches",
            "Stay sharp with brief quality work",
            "Prime the nervous system for competition",
            "Deload: rest, visualize, arrive fresh",
        ],
        TrainingBlock::SkillFocus => [
            "High-frequency technical repetitions",
            "Layer decision making onto technique",
            "Pressure-test skills at game tempo",
            "Deload: light touches, film review",
        ],
        TrainingBlock::Preparation => [
            "Ramp training volume back up gradually",
            "Reintroduce loaded work across the body",
            "Full structured sessions at building loads",
            "Deload: absorb the ramp before the next phase",
        ],
        TrainingBlock::Hypertrophy => [
            "Accumulate volume in the 8-12 rep ranges",
            "Add sets and load across the week",
            "Top volume week: push close to failure",
            "Deload: halve the volume, keep moving",
        ],
        TrainingBlock::Conditioning => [
            "Build the aerobic base with steady intervals",
            "Increase repeat-sprint density",
            "Hardest conditioning week of the block",
            "Deload: easy aerobic work only",
        ],
    }
}

/// Ordered session templates for a block, cycled across training days
#[must_use]
pub const fn session_templates(block: TrainingBlock) -> &'static [SessionTemplate] {
    match block {
        TrainingBlock::Foundation => &[
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Foundational Strength",
                tags: &["full-body", "technique"],
                focus: &[FocusArea::Legs, FocusArea::Back],
                note: "Own every position before adding load",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Aerobic Base",
                tags: &["aerobic", "capacity"],
                focus: &[],
                note: "Conversational pace, nasal breathing where possible",
            },
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Movement Skills",
                tags: &["coordination", "technique"],
                focus: &[],
                note: "Quality over fatigue",
            },
            SessionTemplate {
                kind: SessionKind::Recovery,
                name: "Mobility & Recovery",
                tags: &["mobility", "recovery"],
                focus: &[],
                note: "Slow down, breathe, restore range",
            },
        ],
        TrainingBlock::Strength => &[
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Heavy Upper Strength",
                tags: &["upper-body", "strength"],
                focus: &[FocusArea::Chest, FocusArea::Shoulders],
                note: "Leave one rep in reserve on top sets",
            },
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Heavy Lower Strength",
                tags: &["lower-body", "strength"],
                focus: &[FocusArea::Legs],
                note: "Brace hard, move the bar with intent",
            },
            SessionTemplate {
                kind: SessionKind::Power,
                name: "Contrast Power",
                tags: &["explosiveness"],
                focus: &[],
                note: "Pair heavy and fast, full rest between efforts",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Alactic Conditioning",
                tags: &["conditioning", "speed-endurance"],
                focus: &[],
                note: "Short bursts, complete recovery",
            },
        ],
        TrainingBlock::Power => &[
            SessionTemplate {
                kind: SessionKind::Power,
                name: "Explosive Power",
                tags: &["explosiveness", "rate-of-force"],
                focus: &[],
                note: "Every rep at maximal intent, stop when speed drops",
            },
            SessionTemplate {
                kind: SessionKind::Speed,
                name: "Acceleration & Top Speed",
                tags: &["speed", "sprinting"],
                focus: &[],
                note: "Full recovery between sprints",
            },
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Strength Maintenance",
                tags: &["lower-body", "core"],
                focus: &[FocusArea::Legs, FocusArea::Core],
                note: "Hold strength without accumulating fatigue",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Game-Speed Conditioning",
                tags: &["conditioning", "agility"],
                focus: &[],
                note: "Match work-to-rest ratios to the sport",
            },
        ],
        TrainingBlock::SportSpecific => &[
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Sport-Specific Skills",
                tags: &["technique", "sport"],
                focus: &[],
                note: "Train the skills the season will demand",
            },
            SessionTemplate {
                kind: SessionKind::Sport,
                name: "Scrimmage Simulation",
                tags: &["sport", "competition"],
                focus: &[],
                note: "Game intensity, game decisions",
            },
            SessionTemplate {
                kind: SessionKind::Speed,
                name: "Game Speed",
                tags: &["speed", "agility"],
                focus: &[],
                note: "Sprint mechanics under sport contexts",
            },
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Strength Maintenance",
                tags: &["lower-body", "core"],
                focus: &[FocusArea::Legs, FocusArea::Core],
                note: "Brief and heavy, out of the gym fast",
            },
        ],
        TrainingBlock::Maintenance => &[
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "In-Season Strength",
                tags: &["strength", "maintenance"],
                focus: &[FocusArea::Legs, FocusArea::Core],
                note: "Two to three working sets, never to failure",
            },
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Skill Sharpening",
                tags: &["technique"],
                focus: &[],
                note: "Short, crisp, confidence-building",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Tempo Conditioning",
                tags: &["conditioning", "recovery"],
                focus: &[],
                note: "Flush legs without adding fatigue",
            },
        ],
        TrainingBlock::Recovery => &[
            SessionTemplate {
                kind: SessionKind::Recovery,
                name: "Restorative Session",
                tags: &["recovery", "mobility"],
                focus: &[],
                note: "This is training too",
            },
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Light Technical Work",
                tags: &["technique"],
                focus: &[],
                note: "Play with the sport, no stopwatch",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Easy Aerobic Flush",
                tags: &["aerobic", "recovery"],
                focus: &[],
                note: "Zone 1 only",
            },
        ],
        TrainingBlock::Peak => &[
            SessionTemplate {
                kind: SessionKind::Power,
                name: "Peak Power",
                tags: &["explosiveness"],
                focus: &[],
                note: "Low volume, maximal outputs",
            },
            SessionTemplate {
                kind: SessionKind::Speed,
                name: "Max Velocity",
                tags: &["speed"],
                focus: &[],
                note: "Fast and fresh or not at all",
            },
            SessionTemplate {
                kind: SessionKind::Sport,
                name: "Competition Rehearsal",
                tags: &["sport", "competition"],
                focus: &[],
                note: "Rehearse the full competition routine",
            },
        ],
        TrainingBlock::Taper => &[
            SessionTemplate {
                kind: SessionKind::Recovery,
                name: "Taper Recovery",
                tags: &["recovery"],
                focus: &[],
                note: "Sleep is the priority",
            },
            SessionTemplate {
                kind: SessionKind::Speed,
                name: "Sharpening Sprints",
                tags: &["speed"],
                focus: &[],
                note: "A few fast touches, then done",
            },
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Mental Rehearsal & Skills",
                tags: &["technique", "visualization"],
                focus: &[],
                note: "Walk through competition scenarios",
            },
        ],
        TrainingBlock::SkillFocus => &[
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Technical Development",
                tags: &["technique"],
                focus: &[],
                note: "Block practice first, then variability",
            },
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Position Mastery",
                tags: &["technique", "position"],
                focus: &[],
                note: "Detail work for your position",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "General Conditioning",
                tags: &["conditioning"],
                focus: &[],
                note: "Support the skill work, do not bury it",
            },
            SessionTemplate {
                kind: SessionKind::Recovery,
                name: "Recovery",
                tags: &["recovery"],
                focus: &[],
                note: "Keep the engine idling",
            },
        ],
        TrainingBlock::Preparation => &[
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Preparation Strength",
                tags: &["strength", "ramp-up"],
                focus: &[FocusArea::Chest, FocusArea::Legs],
                note: "Rebuild tolerance before chasing numbers",
            },
            SessionTemplate {
                kind: SessionKind::Power,
                name: "Intro Power",
                tags: &["explosiveness"],
                focus: &[],
                note: "Reintroduce jumping and throwing gradually",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Build-Up Conditioning",
                tags: &["conditioning"],
                focus: &[],
                note: "Extend intervals week over week",
            },
            SessionTemplate {
                kind: SessionKind::Skill,
                name: "Skill Integration",
                tags: &["technique"],
                focus: &[],
                note: "Reconnect physical work to the sport",
            },
        ],
        TrainingBlock::Hypertrophy => &[
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Upper Body Hypertrophy",
                tags: &["upper-body", "hypertrophy"],
                focus: &[FocusArea::Chest, FocusArea::Back],
                note: "Control the eccentric, chase the pump",
            },
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Lower Body Hypertrophy",
                tags: &["lower-body", "hypertrophy"],
                focus: &[FocusArea::Legs, FocusArea::Core],
                note: "Full range of motion beats heavy partials",
            },
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Work Capacity Circuit",
                tags: &["conditioning", "capacity"],
                focus: &[],
                note: "Keep moving, keep breathing",
            },
            SessionTemplate {
                kind: SessionKind::Recovery,
                name: "Active Recovery",
                tags: &["recovery"],
                focus: &[],
                note: "Growth happens while recovering",
            },
        ],
        TrainingBlock::Conditioning => &[
            SessionTemplate {
                kind: SessionKind::Conditioning,
                name: "Aerobic Intervals",
                tags: &["aerobic", "intervals"],
                focus: &[],
                note: "Even splits across all intervals",
            },
            SessionTemplate {
                kind: SessionKind::Speed,
                name: "Agility & Change of Direction",
                tags: &["agility", "speed"],
                focus: &[],
                note: "Decelerate as well as you accelerate",
            },
            SessionTemplate {
                kind: SessionKind::Strength,
                name: "Full-Body Strength",
                tags: &["full-body", "strength"],
                focus: &[FocusArea::Back, FocusArea::Legs],
                note: "Maintain strength while conditioning climbs",
            },
            SessionTemplate {
                kind: SessionKind::Recovery,
                name: "Recovery & Mobility",
                tags: &["recovery", "mobility"],
                focus: &[],
                note: "Absorb the week's conditioning load",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PeriodizationConfig;

    fn planner() -> PeriodizationPlanner {
        PeriodizationPlanner::new(PeriodizationConfig::default())
    }

    #[test]
    fn test_block_sequences_per_phase() {
        assert_eq!(
            block_sequence(SeasonPhase::OffSeason)[0],
            TrainingBlock::Hypertrophy
        );
        assert_eq!(
            block_sequence(SeasonPhase::InSeason)[3],
            TrainingBlock::Taper
        );
        assert_eq!(
            block_sequence(SeasonPhase::PostSeason)[0],
            TrainingBlock::Recovery
        );
        assert_eq!(
            block_sequence(SeasonPhase::PreSeason)[3],
            TrainingBlock::SportSpecific
        );
    }

    #[test]
    fn test_deload_every_fourth_week() {
        let planner = planner();
        for week in 1..=52 {
            assert_eq!(planner.is_deload(week), week % 4 == 0, "week {week}");
        }
    }

    #[test]
    fn test_deload_intensity_is_exactly_five() {
        let planner = planner();
        assert!((planner.intensity_for_week(4, 12) - 5.0).abs() < f64::EPSILON);
        assert!((planner.intensity_for_week(8, 12) - 5.0).abs() < f64::EPSILON);
        assert!((planner.intensity_for_week(48, 52) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_intensity_climbs_within_wave() {
        let planner = planner();
        let w1 = planner.intensity_for_week(1, 12);
        let w2 = planner.intensity_for_week(2, 12);
        let w3 = planner.intensity_for_week(3, 12);
        assert!(w2 > w1);
        assert!(w3 > w2);
    }

    #[test]
    fn test_global_drift_raises_same_wave_position() {
        let planner = planner();
        // Week 1 and week 5 are both wave position 1; the later one is higher.
        assert!(planner.intensity_for_week(5, 12) > planner.intensity_for_week(1, 12));
        assert!(planner.intensity_for_week(9, 12) > planner.intensity_for_week(5, 12));
    }

    #[test]
    fn test_intensity_capped_at_ten() {
        let planner = planner();
        for week in 1..=52 {
            assert!(planner.intensity_for_week(week, 52) <= 10.0);
        }
    }

    #[test]
    fn test_block_distribution_truncates_tail() {
        // 6-week plan: ceil(6/4) = 2 weeks per block, so only three of the
        // four blocks are ever reached.
        let outline = PeriodizationOutline {
            phase: SeasonPhase::OffSeason,
            strategy: String::new(),
            blocks: block_sequence(SeasonPhase::OffSeason).to_vec(),
            total_weeks: 6,
            weeks_per_block: 2,
        };
        assert_eq!(block_for_week(&outline, 1), TrainingBlock::Hypertrophy);
        assert_eq!(block_for_week(&outline, 2), TrainingBlock::Hypertrophy);
        assert_eq!(block_for_week(&outline, 3), TrainingBlock::Strength);
        assert_eq!(block_for_week(&outline, 6), TrainingBlock::Power);
    }

    #[test]
    fn test_every_block_has_templates_and_focus_texts() {
        let blocks = [
            TrainingBlock::Foundation,
            TrainingBlock::Strength,
            TrainingBlock::Power,
            TrainingBlock::SportSpecific,
            TrainingBlock::Maintenance,
            TrainingBlock::Recovery,
            TrainingBlock::Peak,
            TrainingBlock::Taper,
            TrainingBlock::SkillFocus,
            TrainingBlock::Preparation,
            TrainingBlock::Hypertrophy,
            TrainingBlock::Conditioning,
        ];
        for block in blocks {
            assert!(!session_templates(block).is_empty());
            for wave in 1..=4 {
                assert!(!focus_for_week(block, wave).is_empty());
            }
        }
    }
}
