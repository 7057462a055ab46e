//! Assistant configuration: model, credential, and generation settings.
//!
//! Note: Custom Debug impl masks the API key to prevent accidental exposure in logs.

use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// Environment variable holding the hosted model's API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

const DEFAULT_MODEL: &str = "gemini-pro";

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

/// A content-safety category and the blocking threshold applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    pub fn new(category: &str, threshold: &str) -> Self {
        Self {
            category: category.to_string(),
            threshold: threshold.to_string(),
        }
    }
}

/// Safety settings for the four harm categories, none of them blocking.
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .into_iter()
    .map(|category| SafetySetting::new(category, "BLOCK_NONE"))
    .collect()
}

/// Everything a backend needs to reach the hosted model.
#[derive(Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub model: String,
    pub api_key: String,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default = "default_safety_settings")]
    pub safety_settings: Vec<SafetySetting>,
}

impl std::fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("model", &self.model)
            .field("api_key", &"***")
            .field("generation", &self.generation)
            .field("safety_settings", &self.safety_settings)
            .finish()
    }
}

impl AssistantConfig {
    /// Config with default model and settings for the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            generation: GenerationConfig::default(),
            safety_settings: default_safety_settings(),
        }
    }

    /// Read the API key from `GOOGLE_API_KEY`.
    pub fn from_env() -> Result<Self, AssistantError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the API key through `lookup`; a missing or blank key is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AssistantError> {
        match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Ok(Self::with_api_key(key)),
            _ => Err(AssistantError::MissingApiKey(API_KEY_ENV)),
        }
    }
}
