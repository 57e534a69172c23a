// ABOUTME: Plan assembler packaging weeks and metadata into a persisted Plan record
// ABOUTME: Computes plan dates, copies goal snapshots, and builds advisory adaptation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Plan assembly.
//!
//! The assembler is the last deterministic step: it never talks to
//! collaborators. Adaptation rules are advisory strings for a human coach or
//! a future adaptive-scheduling layer; nothing in this crate enforces them.

use chrono::{Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{
    AthleteProfile, Plan, PlanStatus, PlanType, RecoveryPriority, WeeklyPlan, WorkloadPerception,
};

use super::periodization::PeriodizationOutline;

/// Assemble a complete plan from the outline and composed weeks
#[must_use]
pub fn assemble(
    profile: &AthleteProfile,
    outline: &PeriodizationOutline,
    weeks: Vec<WeeklyPlan>,
    plan_type: PlanType,
    start_date: NaiveDate,
) -> Plan {
    Plan {
        id: Uuid::new_v4(),
        athlete_id: profile.athlete_id,
        name: plan_name(profile),
        description: format!(
            "{}-week {} plan for {} ({} sessions per week)",
            outline.total_weeks,
            outline.phase.display_name().to_lowercase(),
            profile.sport,
            profile.training_days.len()
        ),
        start_date,
        end_date: end_date(start_date, outline.total_weeks),
        phase: outline.phase.display_name().to_owned(),
        goals: profile.goals.clone(),
        weeks,
        progression_strategy: format!(
            "{}; wave loading with a deload every 4th week",
            outline.strategy
        ),
        adaptation_rules: adaptation_rules(profile),
        status: PlanStatus::Active,
        plan_type,
        ai_generated: false,
        generation_cost: None,
        created_at: Utc::now(),
    }
}

/// Plan title in the product's standard format
#[must_use]
pub fn plan_name(profile: &AthleteProfile) -> String {
    format!(
        "{} GRIT Plan - {}",
        profile.sport,
        profile.season_phase.display_name()
    )
}

/// End date is the start plus the full plan duration
#[must_use]
pub fn end_date(start_date: NaiveDate, total_weeks: u32) -> NaiveDate {
    start_date
        .checked_add_days(Days::new(u64::from(total_weeks) * 7))
        .unwrap_or(start_date)
}

/// Build the advisory adaptation rule list for a profile
///
/// Conditional rules come first (injuries, recovery priority, workload),
/// followed by three always-present general rules.
#[must_use]
pub fn adaptation_rules(profile: &AthleteProfile) -> Vec<String> {
    let mut rules = Vec::new();

    if !profile.injuries.is_empty() {
        rules.push("Modify exercises to avoid injury areas".to_owned());
        rules.push("Add extra mobility work for affected areas".to_owned());
    }
    if profile.recovery_priority == RecoveryPriority::High {
        rules.push("Schedule extra recovery days when fatigue runs high".to_owned());
        rules.push("Monitor sleep and stress closely".to_owned());
    }
    if matches!(
        profile.workload,
        WorkloadPerception::Heavy | WorkloadPerception::Overwhelming
    ) {
        rules.push("Start with reduced volume and build gradually".to_owned());
        rules.push("Prioritize quality over quantity".to_owned());
    }

    rules.push("Adjust intensity to daily readiness".to_owned());
    rules.push("Substitute exercises if equipment is unavailable".to_owned());
    rules.push("Modify rest periods based on recovery".to_owned());

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_end_date_adds_weeks() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(
            end_date(start, 12),
            NaiveDate::from_ymd_opt(2026, 3, 30).unwrap()
        );
    }
}
