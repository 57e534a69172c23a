// ABOUTME: System and user prompt builders for LLM-backed plan generation
// ABOUTME: Serializes coaching policy, profile, recent activity, and adjustment reason into prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Prompt construction.
//!
//! The system prompt carries the coaching policy and a summary of the
//! exercise catalog; the user prompt carries the athlete snapshot. Prompt
//! text is the only part of the LLM exchange this crate controls, so the
//! required output shape is stated explicitly and strictly.

use std::fmt::Write;

use crate::errors::AppResult;
use crate::models::{AthleteProfile, RecentActivity};

/// Build the system prompt: coaching policy plus expected output schema
#[must_use]
pub fn build_system_prompt() -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "You are an experienced strength and conditioning coach for youth and \
         collegiate athletes. You design periodized, sport-specific training \
         plans with progressive overload and a deload every fourth week.\n\n",
    );
    prompt.push_str(
        "Coaching policy:\n\
         - Respect the athlete's available equipment; never prescribe gear they lack.\n\
         - Respect the athlete's listed injuries; avoid loading affected areas.\n\
         - Sessions fit the athlete's stated duration and training days.\n\
         - Exercise catalog: barbell lifts (squat, bench, row, press, clean), \
           dumbbell and bodyweight variations, sprint and agility drills, \
           sport skill work, and low-intensity recovery work.\n\n",
    );
    prompt.push_str(
        "Respond with exactly one JSON object and no surrounding prose, in this shape:\n\
         {\"name\": string, \"description\": string, \"duration_weeks\": number, \
         \"weeks\": [{\"week\": number, \"focus\": string, \"sessions\": [{\"day\": string, \
         \"kind\": string, \"name\": string, \"duration_minutes\": number, \
         \"exercises\": [{\"name\": string, \"sets\": number, \"reps\": string, \
         \"rest_seconds\": number}]}]}], \"progression_strategy\": string, \
         \"adaptation_rules\": [string]}\n",
    );
    prompt
}

/// Build the user prompt from the athlete snapshot
///
/// # Errors
/// Returns a serialization error if the profile or activity snapshot cannot
/// be serialized.
pub fn build_user_prompt(
    profile: &AthleteProfile,
    recent: &RecentActivity,
    adjustment_reason: Option<&str>,
) -> AppResult<String> {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Athlete profile:\n{}",
        serde_json::to_string_pretty(profile)?
    );

    if !recent.is_empty() {
        let _ = writeln!(
            prompt,
            "\nRecent activity:\n{}",
            serde_json::to_string_pretty(recent)?
        );
    }

    if let Some(reason) = adjustment_reason {
        let _ = writeln!(
            prompt,
            "\nThis is an adjustment of the athlete's current plan. Reason: {reason}"
        );
    }

    prompt.push_str("\nGenerate the training plan now.");
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_states_output_shape() {
        let prompt = build_system_prompt();
        assert!(prompt.contains("exactly one JSON object"));
        assert!(prompt.contains("duration_weeks"));
    }
}
