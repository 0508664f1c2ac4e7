//! Contracts of the remote collaborators the engine is fed by: program
//! execution, AI explanation and the save/share/history store.
//!
//! The engine itself never calls these. [`crate::session::Session`] does, and
//! falls back to the local heuristics whenever a call fails.

#[cfg(feature = "network")]
pub mod http;

#[cfg(feature = "network")]
pub use http::HttpBackend;

use crate::core::constants::fallbacks;
use crate::core::JudgeLanguage;
use crate::error::HintResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRequest {
    pub code: String,
    pub language_id: JudgeLanguage,
    #[serde(default)]
    pub stdin: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunResponse {
    #[serde(default)]
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplainRequest {
    pub code: String,
    /// Display name as shown in the language picker
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplainResponse {
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveRequest {
    pub code: String,
    pub language: String,
    pub title: String,
}

impl SaveRequest {
    /// Build a request, trimming the title and substituting "Untitled" for an empty one.
    pub fn new(code: impl Into<String>, language: impl Into<String>, title: &str) -> Self {
        let title = title.trim();
        Self {
            code: code.into(),
            language: language.into(),
            title: if title.is_empty() {
                fallbacks::UNTITLED.to_string()
            } else {
                title.to_string()
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Only set by the share endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub language: String,
    #[serde(default)]
    pub code: String,
    /// run, debug, optimize or explain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    pub created_at: String,
}

#[async_trait]
pub trait ExecutionService: Send + Sync {
    async fn run(&self, request: RunRequest) -> HintResult<RunResponse>;
}

#[async_trait]
pub trait ExplanationService: Send + Sync {
    async fn explain(&self, request: ExplainRequest) -> HintResult<ExplainResponse>;
}

#[async_trait]
pub trait HistoryService: Send + Sync {
    async fn save(&self, request: SaveRequest) -> HintResult<SaveResponse>;

    /// Save and return a shareable link
    async fn share(&self, request: SaveRequest) -> HintResult<SaveResponse>;

    /// Most recent entries first, at most `limit`
    async fn history(&self, limit: usize) -> HintResult<Vec<HistoryEntry>>;
}
