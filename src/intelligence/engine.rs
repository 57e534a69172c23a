// ABOUTME: Plan engine facade orchestrating validation, periodization, composition, and persistence
// ABOUTME: Injected store and optional LLM provider; deterministic path by default, LLM path when configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Plan engine facade.
//!
//! [`PlanEngine`] is the crate's public entry point. It owns no state beyond
//! its injected collaborators and configuration: every generation call reads
//! an immutable snapshot and returns a new plan value. The save-then-mark
//! ordering in the adjustment path is the engine's one consistency
//! obligation: a failed save leaves feedback signals unprocessed, so the
//! adjustment is retried on the next invocation rather than lost.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::llm::{
    build_system_prompt, build_user_prompt, parse_plan_response, ChatCompletionProvider,
    ChatMessage, ChatRequest,
};
use crate::models::{
    AthleteProfile, IntensityBucket, Plan, PlanType, RecentActivity, Session, WeeklyPlan,
};
use crate::store::PlanStore;

use super::composer::ExerciseComposer;
use super::feedback;
use super::periodization::{PeriodizationPlanner, WeekSkeleton};

/// Options for a plan generation call
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Initial generation or feedback adjustment
    pub plan_type: PlanType,
    /// Aggregator reason carried into the generation context
    pub adjustment_reason: Option<String>,
    /// Recent activity snapshot for the LLM prompt
    pub recent: RecentActivity,
}

impl GenerateOptions {
    /// Options for a first plan
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Options for a feedback-driven adjustment
    #[must_use]
    pub fn adjustment(reason: impl Into<String>) -> Self {
        Self {
            plan_type: PlanType::Adjustment,
            adjustment_reason: Some(reason.into()),
            recent: RecentActivity::default(),
        }
    }

    /// Attach a recent activity snapshot
    #[must_use]
    pub fn with_recent(mut self, recent: RecentActivity) -> Self {
        self.recent = recent;
        self
    }
}

/// Training plan generation engine
///
/// Construct once at the composition root and share by reference. The store
/// handle is required; the LLM provider is optional and switches session
/// content generation from the deterministic composer to the external model.
pub struct PlanEngine {
    store: Arc<dyn PlanStore>,
    llm: Option<Arc<dyn ChatCompletionProvider>>,
    config: EngineConfig,
    planner: PeriodizationPlanner,
    composer: ExerciseComposer,
}

impl PlanEngine {
    /// Create an engine with the deterministic composer path
    #[must_use]
    pub fn new(store: Arc<dyn PlanStore>, config: EngineConfig) -> Self {
        let planner = PeriodizationPlanner::new(config.periodization.clone());
        Self {
            store,
            llm: None,
            config,
            planner,
            composer: ExerciseComposer::new(),
        }
    }

    /// Delegate session content generation to an external language model
    #[must_use]
    pub fn with_llm(mut self, provider: Arc<dyn ChatCompletionProvider>) -> Self {
        self.llm = Some(provider);
        self
    }

    /// Generate and persist a plan for a profile
    ///
    /// # Errors
    /// Returns a validation error for an incomplete profile, or a storage
    /// error when the save fails. LLM failures degrade to a fallback plan
    /// shell rather than erroring (the degradation is logged).
    pub async fn generate_plan(
        &self,
        profile: &AthleteProfile,
        options: &GenerateOptions,
    ) -> AppResult<Plan> {
        profile.validate()?;
        let profile = profile.normalized();
        let start_date = Utc::now().date_naive();

        let plan = if let Some(llm) = &self.llm {
            self.generate_with_llm(llm.as_ref(), &profile, options, start_date)
                .await?
        } else {
            self.generate_deterministic(&profile, options, start_date)?
        };

        let saved = self.store.save_plan(&plan).await?;
        info!(
            athlete_id = %saved.athlete_id,
            plan_id = %saved.id,
            weeks = saved.weeks.len(),
            ai_generated = saved.ai_generated,
            "generated training plan"
        );
        Ok(saved)
    }

    /// Generate and persist a plan from stored profile and activity data
    ///
    /// # Errors
    /// Returns `ResourceNotFound` when the athlete has no profile, plus the
    /// same errors as [`Self::generate_plan`].
    pub async fn generate_plan_for_athlete(
        &self,
        athlete_id: Uuid,
        plan_type: PlanType,
    ) -> AppResult<Plan> {
        let profile = self.store.get_profile(athlete_id).await?;
        let recent = self.load_recent(athlete_id).await?;
        let options = GenerateOptions {
            plan_type,
            adjustment_reason: None,
            recent,
        };
        self.generate_plan(&profile, &options).await
    }

    /// Regenerate the plan when recent feedback warrants it
    ///
    /// Returns `None` when the aggregator decides no adjustment is needed.
    /// The new plan is saved before the signals are marked processed; a
    /// failed save leaves them unprocessed for the next invocation.
    ///
    /// # Errors
    /// Propagates store errors unchanged and validation errors from the
    /// stored profile.
    pub async fn adjust_plan_based_on_feedback(
        &self,
        athlete_id: Uuid,
    ) -> AppResult<Option<Plan>> {
        let signals = self.store.get_unprocessed_signals(athlete_id).await?;
        let decision = feedback::decide(&signals);
        let Some(reason) = decision.reason else {
            return Ok(None);
        };

        info!(athlete_id = %athlete_id, %reason, "feedback warrants plan adjustment");

        let profile = self.store.get_profile(athlete_id).await?;
        let recent = self.load_recent(athlete_id).await?;
        let options = GenerateOptions {
            plan_type: PlanType::Adjustment,
            adjustment_reason: Some(reason),
            recent,
        };
        let plan = self.generate_plan(&profile, &options).await?;

        let signal_ids: Vec<Uuid> = signals
            .iter()
            .filter(|s| !s.processed)
            .map(|s| s.id)
            .collect();
        self.store.mark_signals_processed(&signal_ids, plan.id).await?;

        Ok(Some(plan))
    }

    async fn load_recent(&self, athlete_id: Uuid) -> AppResult<RecentActivity> {
        let workouts = self
            .store
            .get_recent_workouts(athlete_id, self.config.recent_workouts_limit)
            .await?;
        let journals = self
            .store
            .get_recent_journals(athlete_id, self.config.recent_journals_limit)
            .await?;
        Ok(RecentActivity { workouts, journals })
    }

    fn generate_deterministic(
        &self,
        profile: &AthleteProfile,
        options: &GenerateOptions,
        start_date: NaiveDate,
    ) -> AppResult<Plan> {
        let outline = self.planner.outline(profile)?;
        let skeletons = self.planner.generate_weeks(profile, &outline);
        let weeks = skeletons
            .into_iter()
            .map(|skeleton| self.compose_week(profile, skeleton))
            .collect();
        Ok(super::assembler::assemble(
            profile,
            &outline,
            weeks,
            options.plan_type,
            start_date,
        ))
    }

    fn compose_week(&self, profile: &AthleteProfile, skeleton: WeekSkeleton) -> WeeklyPlan {
        let bucket = IntensityBucket::from_score(skeleton.intensity_score);
        let sessions: Vec<Session> = skeleton
            .slots
            .into_iter()
            .map(|slot| {
                let composed = self.composer.compose(
                    slot.template,
                    &profile.sport,
                    profile.position.as_deref(),
                    &profile.equipment,
                );
                Session {
                    id: Uuid::new_v4(),
                    day: slot.day,
                    kind: slot.template.kind,
                    name: slot.template.name.to_owned(),
                    duration_minutes: slot.duration_minutes,
                    warmup: composed.warmup,
                    main: composed.main,
                    cooldown: composed.cooldown,
                    focus_areas: slot.template.tags.iter().map(|&t| t.to_owned()).collect(),
                    intensity: bucket,
                    notes: Some(slot.template.note.to_owned()),
                }
            })
            .collect();
        let volume_minutes = sessions.iter().map(|s| s.duration_minutes).sum();

        WeeklyPlan {
            week: skeleton.week,
            block: skeleton.block,
            focus: skeleton.focus,
            sessions,
            volume_minutes,
            intensity_score: skeleton.intensity_score,
        }
    }

    async fn generate_with_llm(
        &self,
        llm: &dyn ChatCompletionProvider,
        profile: &AthleteProfile,
        options: &GenerateOptions,
        start_date: NaiveDate,
    ) -> AppResult<Plan> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(build_system_prompt()),
            ChatMessage::user(build_user_prompt(
                profile,
                &options.recent,
                options.adjustment_reason.as_deref(),
            )?),
        ]);

        let timeout = Duration::from_secs(self.config.llm.request_timeout_secs);
        let (raw, cost) = match tokio::time::timeout(timeout, llm.complete(&request)).await {
            Ok(Ok(response)) => {
                if let Some(usage) = response.usage {
                    debug!(
                        provider = llm.name(),
                        prompt_tokens = usage.prompt_tokens,
                        completion_tokens = usage.completion_tokens,
                        total_tokens = usage.total_tokens,
                        "LLM token usage"
                    );
                }
                (response.content, response.cost_usd)
            }
            Ok(Err(err)) => {
                warn!(provider = llm.name(), error = %err, "LLM generation failed, degrading to fallback shell");
                (String::new(), None)
            }
            Err(_) => {
                warn!(provider = llm.name(), timeout_secs = timeout.as_secs(), "LLM generation timed out, degrading to fallback shell");
                (String::new(), None)
            }
        };

        let mut plan = parse_plan_response(
            &raw,
            profile,
            options.plan_type,
            self.config.llm.fallback_plan_weeks,
            start_date,
        );
        plan.generation_cost = cost;
        Ok(plan)
    }
}
