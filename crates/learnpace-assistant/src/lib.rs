//! learnpace-assistant — conversational assistant integration seam.
//!
//! The hosted language model lives outside this workspace. This crate owns
//! the conversation history, generation settings, and the fallback replies,
//! and talks to the model through the [`ChatBackend`] trait.

pub mod assistant;
pub mod backend;
pub mod config;
pub mod conversation;
pub mod error;
pub mod mock;

pub use assistant::Assistant;
pub use backend::{ChatBackend, ChatRequest};
pub use config::{AssistantConfig, GenerationConfig, SafetySetting};
pub use conversation::{Conversation, Role, Turn};
pub use error::AssistantError;
