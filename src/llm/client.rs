// ABOUTME: OpenAI-compatible chat completion client over HTTP
// ABOUTME: Single POST to /chat/completions with bearer auth and connect/request timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! OpenAI-compatible provider.
//!
//! Works against any server exposing the `chat/completions` shape (OpenAI,
//! Groq, Ollama, vLLM). Configured explicitly at the composition root; the
//! engine never reads provider credentials itself.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult, ErrorCode};

use super::{ChatCompletionProvider, ChatMessage, ChatRequest, ChatResponse, TokenUsage};

/// Connection timeout for the completion endpoint
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Request timeout; generation responses are large and slow
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Environment variable carrying the API key
const API_KEY_ENV: &str = "GRIT_LLM_API_KEY";
/// Environment variable carrying the API base URL
const BASE_URL_ENV: &str = "GRIT_LLM_BASE_URL";
/// Environment variable carrying the default model name
const MODEL_ENV: &str = "GRIT_LLM_MODEL";

/// OpenAI-compatible chat completion provider
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    default_model: String,
}

#[derive(Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct WireResponse {
    model: Option<String>,
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[derive(Deserialize)]
struct WireMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl OpenAiCompatibleProvider {
    /// Create a provider with explicit settings
    ///
    /// # Errors
    /// Returns an internal error if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        default_model: impl Into<String>,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            default_model: default_model.into(),
        })
    }

    /// Create a provider from `GRIT_LLM_BASE_URL`, `GRIT_LLM_API_KEY`, and
    /// `GRIT_LLM_MODEL`
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when a required variable is missing.
    pub fn from_env() -> AppResult<Self> {
        let require = |key: &str| {
            env::var(key).map_err(|_| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("missing required environment variable {key}"),
                )
            })
        };
        Self::new(require(BASE_URL_ENV)?, require(API_KEY_ENV)?, require(MODEL_ENV)?)
    }
}

#[async_trait]
impl ChatCompletionProvider for OpenAiCompatibleProvider {
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let wire = WireRequest {
            model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model, messages = request.messages.len(), "sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&wire)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "chat completion failed with status {status}: {body}"
            )));
        }

        let wire: WireResponse = response.json().await?;
        let content = wire
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                AppError::external_service("chat completion response carried no content")
            })?;

        Ok(ChatResponse {
            content,
            model: wire.model.unwrap_or_else(|| model.to_owned()),
            usage: wire.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            cost_usd: None,
        })
    }

    fn name(&self) -> &str {
        "openai-compatible"
    }
}
