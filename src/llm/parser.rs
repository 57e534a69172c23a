// ABOUTME: Defensive parser for LLM plan responses with repair and fallback
// ABOUTME: Extracts the JSON object, repairs trailing commas and raw newlines, falls back to a plan shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Defensive LLM response parsing.
//!
//! Model output is untrusted text that usually contains one JSON object and
//! sometimes contains it badly: wrapped in prose or code fences, with
//! trailing commas, or with raw newlines inside string values. The parser
//! extracts and repairs before strict deserialization, and on any failure
//! returns a minimal valid plan shell instead of erroring. This is the one
//! place in the engine where degradation is silent toward the caller; it is
//! always logged.

use std::sync::OnceLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::intelligence::assembler::{end_date, plan_name};
use crate::intelligence::periodization::block_sequence;
use crate::models::{
    AthleteProfile, Exercise, IntensityBucket, Plan, PlanStatus, PlanType, SeasonPhase, Session,
    SessionKind, TrainingBlock, Weekday, WeeklyPlan,
};

/// Plan shape expected inside the response text
#[derive(Debug, Deserialize)]
struct LlmPlan {
    name: String,
    #[serde(default)]
    description: String,
    duration_weeks: u32,
    #[serde(default)]
    weeks: Vec<LlmWeek>,
    #[serde(default)]
    progression_strategy: String,
    #[serde(default)]
    adaptation_rules: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LlmWeek {
    week: u32,
    #[serde(default)]
    focus: String,
    #[serde(default = "default_intensity")]
    intensity: f64,
    #[serde(default)]
    sessions: Vec<LlmSession>,
}

#[derive(Debug, Deserialize)]
struct LlmSession {
    day: String,
    kind: String,
    name: String,
    duration_minutes: u32,
    #[serde(default)]
    exercises: Vec<LlmExercise>,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LlmExercise {
    name: String,
    sets: u32,
    reps: String,
    rest_seconds: u32,
    #[serde(default)]
    weight_guidance: Option<String>,
}

const fn default_intensity() -> f64 {
    5.0
}

/// Parse an LLM plan response, falling back to a minimal plan shell
///
/// Never fails: a malformed or absent JSON object produces the fallback
/// shell (plan name, description, the configured default duration, and the
/// requested plan type) so the caller never receives an invalid plan.
#[must_use]
pub fn parse_plan_response(
    raw: &str,
    profile: &AthleteProfile,
    plan_type: PlanType,
    fallback_weeks: u32,
    start_date: NaiveDate,
) -> Plan {
    match try_parse(raw) {
        Ok(parsed) => to_plan(parsed, profile, plan_type, start_date),
        Err(reason) => {
            warn!(
                athlete_id = %profile.athlete_id,
                %reason,
                "LLM plan response unparseable, using fallback plan shell"
            );
            fallback_shell(profile, plan_type, fallback_weeks, start_date)
        }
    }
}

fn try_parse(raw: &str) -> Result<LlmPlan, String> {
    let object = extract_json_object(raw).ok_or("no JSON object found in response")?;
    let repaired = repair_json(object);
    serde_json::from_str(&repaired).map_err(|e| e.to_string())
}

/// Extract the outermost JSON object from surrounding prose or code fences
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Repair common LLM JSON defects before strict parsing
///
/// Escapes raw newlines and carriage returns inside string literals, then
/// strips trailing commas before closing braces and brackets.
#[must_use]
pub fn repair_json(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut prev_backslash = false;
    for ch in raw.chars() {
        match ch {
            '"' if !prev_backslash => {
                in_string = !in_string;
                escaped.push(ch);
            }
            '\n' if in_string => escaped.push_str("\\n"),
            '\r' if in_string => {}
            _ => escaped.push(ch),
        }
        prev_backslash = ch == '\\' && !prev_backslash;
    }

    static TRAILING_COMMA: OnceLock<Regex> = OnceLock::new();
    let trailing_comma = TRAILING_COMMA
        .get_or_init(|| Regex::new(r",\s*([}\]])").unwrap_or_else(|_| unreachable!()));
    trailing_comma.replace_all(&escaped, "$1").into_owned()
}

fn to_plan(
    parsed: LlmPlan,
    profile: &AthleteProfile,
    plan_type: PlanType,
    start_date: NaiveDate,
) -> Plan {
    let weeks = parsed
        .weeks
        .into_iter()
        .map(|week| {
            let bucket = IntensityBucket::from_score(week.intensity);
            let sessions: Vec<Session> = week
                .sessions
                .into_iter()
                .map(|s| to_session(s, bucket))
                .collect();
            let volume_minutes = sessions.iter().map(|s| s.duration_minutes).sum();
            WeeklyPlan {
                week: week.week,
                block: block_for(profile.season_phase, week.week, parsed.duration_weeks),
                focus: week.focus,
                sessions,
                volume_minutes,
                intensity_score: week.intensity,
            }
        })
        .collect();

    Plan {
        id: Uuid::new_v4(),
        athlete_id: profile.athlete_id,
        name: parsed.name,
        description: parsed.description,
        start_date,
        end_date: end_date(start_date, parsed.duration_weeks),
        phase: profile.season_phase.display_name().to_owned(),
        goals: profile.goals.clone(),
        weeks,
        progression_strategy: parsed.progression_strategy,
        adaptation_rules: parsed.adaptation_rules,
        status: PlanStatus::Active,
        plan_type,
        ai_generated: true,
        generation_cost: None,
        created_at: Utc::now(),
    }
}

/// Block for an LLM-parsed week, from the phase's block sequence
///
/// The model reports only week numbers, so blocks follow the same even
/// distribution (ceiling division, clamped tail) as deterministic plans.
fn block_for(phase: SeasonPhase, week: u32, total_weeks: u32) -> TrainingBlock {
    let blocks = block_sequence(phase);
    let block_count = u32::try_from(blocks.len()).unwrap_or(1);
    let weeks_per_block = total_weeks.max(1).div_ceil(block_count);
    let index = (week.max(1) - 1) / weeks_per_block;
    blocks[(index as usize).min(blocks.len() - 1)]
}

fn to_session(session: LlmSession, intensity: IntensityBucket) -> Session {
    Session {
        id: Uuid::new_v4(),
        day: parse_weekday(&session.day),
        kind: parse_kind(&session.kind),
        name: session.name,
        duration_minutes: session.duration_minutes,
        warmup: Vec::new(),
        main: session
            .exercises
            .into_iter()
            .map(|e| Exercise {
                name: e.name,
                sets: e.sets,
                reps: e.reps,
                rest_seconds: e.rest_seconds,
                weight_guidance: e.weight_guidance,
                notes: None,
            })
            .collect(),
        cooldown: Vec::new(),
        focus_areas: Vec::new(),
        intensity,
        notes: session.notes,
    }
}

fn parse_weekday(day: &str) -> Weekday {
    match day.trim().to_lowercase().as_str() {
        "tuesday" => Weekday::Tuesday,
        "wednesday" => Weekday::Wednesday,
        "thursday" => Weekday::Thursday,
        "friday" => Weekday::Friday,
        "saturday" => Weekday::Saturday,
        "sunday" => Weekday::Sunday,
        _ => Weekday::Monday,
    }
}

fn parse_kind(kind: &str) -> SessionKind {
    match kind.trim().to_lowercase().as_str() {
        "strength" => SessionKind::Strength,
        "conditioning" => SessionKind::Conditioning,
        "power" => SessionKind::Power,
        "speed" => SessionKind::Speed,
        "recovery" => SessionKind::Recovery,
        "sport" => SessionKind::Sport,
        _ => SessionKind::Skill,
    }
}

/// Minimal valid plan shell used when parsing degrades
fn fallback_shell(
    profile: &AthleteProfile,
    plan_type: PlanType,
    fallback_weeks: u32,
    start_date: NaiveDate,
) -> Plan {
    Plan {
        id: Uuid::new_v4(),
        athlete_id: profile.athlete_id,
        name: plan_name(profile),
        description: format!(
            "Baseline {fallback_weeks}-week plan; detailed generation was unavailable"
        ),
        start_date,
        end_date: end_date(start_date, fallback_weeks),
        phase: profile.season_phase.display_name().to_owned(),
        goals: profile.goals.clone(),
        weeks: Vec::new(),
        progression_strategy: "Re-generate for a full periodized plan".to_owned(),
        adaptation_rules: Vec::new(),
        status: PlanStatus::Active,
        plan_type,
        ai_generated: true,
        generation_cost: None,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_object_from_prose() {
        let raw = "Here is your plan:\n```json\n{\"a\": 1}\n```\nEnjoy!";
        assert_eq!(extract_json_object(raw), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_repair_strips_trailing_commas() {
        let raw = r#"{"a": [1, 2,], "b": {"c": 3,},}"#;
        let repaired = repair_json(raw);
        assert!(serde_json::from_str::<serde_json::Value>(&repaired).is_ok());
    }

    #[test]
    fn test_repair_escapes_raw_newlines_in_strings() {
        let raw = "{\"a\": \"line one\nline two\"}";
        let repaired = repair_json(raw);
        let value: serde_json::Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value["a"], "line one\nline two");
    }

    #[test]
    fn test_repair_preserves_newlines_outside_strings() {
        let raw = "{\n  \"a\": 1\n}";
        assert_eq!(repair_json(raw), raw);
    }

    #[test]
    fn test_block_follows_phase_sequence_and_clamps() {
        assert_eq!(
            block_for(SeasonPhase::OffSeason, 1, 12),
            TrainingBlock::Hypertrophy
        );
        assert_eq!(
            block_for(SeasonPhase::OffSeason, 10, 12),
            TrainingBlock::Conditioning
        );
        // Out-of-range week numbers clamp to the final block.
        assert_eq!(
            block_for(SeasonPhase::OffSeason, 40, 12),
            TrainingBlock::Conditioning
        );
        assert_eq!(
            block_for(SeasonPhase::InSeason, 1, 0),
            TrainingBlock::Maintenance
        );
    }
}
