// ABOUTME: Engine configuration with periodization tunables and LLM settings
// ABOUTME: Provides typed defaults with environment variable overrides, passed by value into the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Engine configuration.
//!
//! All periodization constants live here rather than as magic numbers in the
//! planner. The configuration is constructed once at the composition root and
//! passed into [`crate::intelligence::PlanEngine`] by value; there is no
//! global configuration singleton.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Read an environment variable and parse it, falling back to a default
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Periodization tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodizationConfig {
    /// Length of the wave-loading cycle in weeks; the final week is a deload
    pub wave_length_weeks: u32,
    /// Fixed intensity score assigned to deload weeks
    pub deload_intensity: f64,
    /// Intensity score at the start of each wave
    pub base_intensity: f64,
    /// Intensity added per week within a wave
    pub wave_increment: f64,
    /// Weight of the global progress term (`week / total_weeks`)
    pub drift_weight: f64,
    /// Upper bound on the continuous intensity score
    pub max_intensity: f64,
}

impl Default for PeriodizationConfig {
    fn default() -> Self {
        Self {
            wave_length_weeks: 4,
            deload_intensity: 5.0,
            base_intensity: 6.0,
            wave_increment: 0.5,
            drift_weight: 2.0,
            max_intensity: 10.0,
        }
    }
}

/// LLM generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Timeout for the single plan-generation request, in seconds
    pub request_timeout_secs: u64,
    /// Duration of the fallback plan shell when parsing degrades, in weeks
    pub fallback_plan_weeks: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 60,
            fallback_plan_weeks: 4,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Periodization math tunables
    pub periodization: PeriodizationConfig,
    /// LLM generation settings
    pub llm: LlmConfig,
    /// How many recent workouts to fold into generation context
    pub recent_workouts_limit: usize,
    /// How many recent journal entries to fold into generation context
    pub recent_journals_limit: usize,
}

impl EngineConfig {
    /// Build configuration from environment variables, falling back to defaults
    ///
    /// Recognized variables: `GRIT_WAVE_LENGTH_WEEKS`, `GRIT_DELOAD_INTENSITY`,
    /// `GRIT_LLM_TIMEOUT_SECS`, `GRIT_FALLBACK_PLAN_WEEKS`,
    /// `GRIT_RECENT_WORKOUTS_LIMIT`, `GRIT_RECENT_JOURNALS_LIMIT`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            periodization: PeriodizationConfig {
                // A zero wave length would divide by zero in the wave math.
                wave_length_weeks: env_or(
                    "GRIT_WAVE_LENGTH_WEEKS",
                    defaults.periodization.wave_length_weeks,
                )
                .max(1),
                deload_intensity: env_or(
                    "GRIT_DELOAD_INTENSITY",
                    defaults.periodization.deload_intensity,
                ),
                ..defaults.periodization
            },
            llm: LlmConfig {
                request_timeout_secs: env_or(
                    "GRIT_LLM_TIMEOUT_SECS",
                    defaults.llm.request_timeout_secs,
                ),
                fallback_plan_weeks: env_or(
                    "GRIT_FALLBACK_PLAN_WEEKS",
                    defaults.llm.fallback_plan_weeks,
                ),
            },
            recent_workouts_limit: env_or(
                "GRIT_RECENT_WORKOUTS_LIMIT",
                defaults.recent_workouts_limit,
            ),
            recent_journals_limit: env_or(
                "GRIT_RECENT_JOURNALS_LIMIT",
                defaults.recent_journals_limit,
            ),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            periodization: PeriodizationConfig::default(),
            llm: LlmConfig::default(),
            recent_workouts_limit: 10,
            recent_journals_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_periodization_constants() {
        let config = PeriodizationConfig::default();
        assert_eq!(config.wave_length_weeks, 4);
        assert!((config.deload_intensity - 5.0).abs() < f64::EPSILON);
        assert!((config.base_intensity - 6.0).abs() < f64::EPSILON);
    }
}
