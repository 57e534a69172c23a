// ABOUTME: Tests for environment-driven engine configuration
// ABOUTME: Serialized because environment variables are process-global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use serial_test::serial;

use grit_engine::config::EngineConfig;

fn clear_grit_env() {
    for key in [
        "GRIT_WAVE_LENGTH_WEEKS",
        "GRIT_DELOAD_INTENSITY",
        "GRIT_LLM_TIMEOUT_SECS",
        "GRIT_FALLBACK_PLAN_WEEKS",
        "GRIT_RECENT_WORKOUTS_LIMIT",
        "GRIT_RECENT_JOURNALS_LIMIT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_uses_defaults_when_unset() {
    clear_grit_env();
    let config = EngineConfig::from_env();
    assert_eq!(config.periodization.wave_length_weeks, 4);
    assert_eq!(config.llm.request_timeout_secs, 60);
    assert_eq!(config.recent_workouts_limit, 10);
}

#[test]
#[serial]
fn test_from_env_overrides_take_effect() {
    clear_grit_env();
    std::env::set_var("GRIT_LLM_TIMEOUT_SECS", "15");
    std::env::set_var("GRIT_RECENT_WORKOUTS_LIMIT", "25");
    let config = EngineConfig::from_env();
    assert_eq!(config.llm.request_timeout_secs, 15);
    assert_eq!(config.recent_workouts_limit, 25);
    clear_grit_env();
}

#[test]
#[serial]
fn test_zero_wave_length_is_clamped_to_one() {
    // The wave position math divides by the wave length, so a zero override
    // must never reach the planner.
    clear_grit_env();
    std::env::set_var("GRIT_WAVE_LENGTH_WEEKS", "0");
    let config = EngineConfig::from_env();
    assert_eq!(config.periodization.wave_length_weeks, 1);
    clear_grit_env();
}

#[test]
#[serial]
fn test_from_env_ignores_unparseable_values() {
    clear_grit_env();
    std::env::set_var("GRIT_WAVE_LENGTH_WEEKS", "not-a-number");
    let config = EngineConfig::from_env();
    assert_eq!(config.periodization.wave_length_weeks, 4);
    clear_grit_env();
}
