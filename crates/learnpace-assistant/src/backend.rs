//! The trait implemented by conversational model backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, SafetySetting};
use crate::conversation::Turn;
use crate::error::AssistantError;

/// Trait for hosted chat models.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Send the history plus a new prompt and return the model's reply text.
    async fn send(&self, request: &ChatRequest) -> Result<String, AssistantError>;
}

/// One request to a chat backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Prior turns, oldest first. Does not include `prompt`.
    pub history: Vec<Turn>,
    /// The new user message.
    pub prompt: String,
    pub generation: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}
