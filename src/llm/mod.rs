// ABOUTME: LLM integration for natural-language plan generation
// ABOUTME: Chat message/request types, the provider trait, prompt builders, and the defensive parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! LLM-backed plan generation.
//!
//! The external language model is a single request/response collaborator: the
//! engine sends one system prompt (coaching policy and exercise catalog) and
//! one user prompt (serialized profile, recent activity, adjustment reason),
//! and expects a text blob containing one JSON object in the plan shape.
//! Everything downstream of that blob is handled defensively in [`parser`].

/// HTTP provider for OpenAI-compatible chat completion APIs
pub mod client;
/// Defensive response parsing with repair and fallback
pub mod parser;
/// System and user prompt builders
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

pub use client::OpenAiCompatibleProvider;
pub use parser::parse_plan_response;
pub use prompts::{build_system_prompt, build_user_prompt};

/// Role of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Policy and catalog instructions
    System,
    /// The serialized generation request
    User,
    /// Model output
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: MessageRole,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model override; providers fall back to their configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Completion token cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with default sampling settings
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total billed tokens
    pub total_tokens: u32,
}

/// A chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Model output text
    pub content: String,
    /// Model that produced the response
    pub model: String,
    /// Token usage, when the provider reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// Estimated cost in USD, when computable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
}

/// Chat completion collaborator
///
/// One awaited request/response exchange; callers apply their own timeout and
/// treat timeout as a generation failure rather than retrying.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Execute a single chat completion
    ///
    /// # Errors
    /// Returns an external-service error when the provider cannot be reached
    /// or returns a non-success status.
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
