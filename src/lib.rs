// ABOUTME: Main library entry point for the GRIT plan generation engine
// ABOUTME: Exposes the periodization planner, exercise composer, feedback aggregator, and plan engine facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

#![deny(unsafe_code)]

//! # GRIT Plan Engine
//!
//! Training-plan generation and periodization engine for the GRIT athlete
//! performance-tracking platform. The engine converts a multi-dimensional
//! athlete profile (experience, goals, schedule, equipment, injuries, season
//! phase) into a multi-week, multi-session workout plan with
//! progressive-overload and deload logic, and supports feedback-driven
//! re-generation.
//!
//! ## Architecture
//!
//! - **Models**: profile, plan, activity, and feedback signal records
//! - **Intelligence**: periodization math, deterministic exercise
//!   composition, feedback aggregation, and plan assembly
//! - **Store**: the async collaborator interface durable storage implements
//! - **LLM**: optional natural-language generation path with defensive
//!   parsing and a fallback plan shell
//!
//! The engine is stateless: each call receives an immutable snapshot and
//! returns a new plan value. Collaborators are injected; there are no
//! ambient singletons.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use grit_engine::config::EngineConfig;
//! use grit_engine::intelligence::{GenerateOptions, PlanEngine};
//! # async fn example(store: Arc<dyn grit_engine::store::PlanStore>,
//! #                  profile: grit_engine::models::AthleteProfile)
//! #                  -> grit_engine::errors::AppResult<()> {
//! let engine = PlanEngine::new(store, EngineConfig::from_env());
//! let plan = engine.generate_plan(&profile, &GenerateOptions::initial()).await?;
//! println!("{} weeks: {}", plan.weeks.len(), plan.name);
//! # Ok(())
//! # }
//! ```

/// Engine configuration with periodization tunables
pub mod config;
/// Unified error handling
pub mod errors;
/// Periodization, composition, feedback, and the plan engine facade
pub mod intelligence;
/// LLM-backed generation path
pub mod llm;
/// Structured logging setup for the composition root
pub mod logging;
/// Engine data models
pub mod models;
/// Plan store collaborator interface
pub mod store;

/// Test support: in-memory plan store with an operation log
pub mod test_utils;
