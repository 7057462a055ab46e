//! Conversation driver that sends history to a backend and records replies.

use crate::backend::{ChatBackend, ChatRequest};
use crate::config::AssistantConfig;
use crate::conversation::{Conversation, Turn};
use crate::error::AssistantError;

/// Reply used when the backend answers with no text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I apologize, but I couldn't generate a response. Please try again.";

/// Reply used when the backend call fails.
pub const ERROR_REPLY_FALLBACK: &str = "I encountered an error. Please try again in a moment.";

/// A single-user chat session.
pub struct Assistant<B> {
    backend: B,
    config: AssistantConfig,
    conversation: Conversation,
}

impl<B: ChatBackend> Assistant<B> {
    pub fn new(backend: B, config: AssistantConfig) -> Self {
        Self {
            backend,
            config,
            conversation: Conversation::new(),
        }
    }

    /// Resume a session with existing history.
    pub fn with_conversation(mut self, conversation: Conversation) -> Self {
        self.conversation = conversation;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Send `prompt`, record both turns, and return the reply.
    ///
    /// Backend failures and empty replies become fixed fallback messages, which
    /// are recorded in the history like any other reply. A reply that is only
    /// whitespace counts as empty.
    pub async fn ask(&mut self, prompt: &str) -> String {
        let reply = match self.try_ask(prompt).await {
            Ok(reply) => reply,
            Err(AssistantError::EmptyResponse) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(e) => {
                tracing::error!(backend = self.backend.name(), "generation error: {e}");
                ERROR_REPLY_FALLBACK.to_string()
            }
        };

        self.conversation.push(Turn::user(prompt));
        self.conversation.push(Turn::assistant(reply.clone()));
        reply
    }

    /// Send `prompt` without fallbacks or recording history.
    pub async fn try_ask(&self, prompt: &str) -> Result<String, AssistantError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            history: self.conversation.turns().to_vec(),
            prompt: prompt.to_string(),
            generation: self.config.generation,
            safety_settings: self.config.safety_settings.clone(),
        };

        let reply = self.backend.send(&request).await?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Role;
    use crate::mock::MockBackend;

    fn assistant(backend: MockBackend) -> Assistant<MockBackend> {
        Assistant::new(backend, AssistantConfig::with_api_key("test"))
    }

    #[tokio::test]
    async fn reply_is_trimmed_and_recorded() {
        let mut a = assistant(MockBackend::with_fixed_reply("  Practice daily.\n"));
        let reply = a.ask("How do I improve?").await;
        assert_eq!(reply, "Practice daily.");
        assert_eq!(
            a.conversation().turns(),
            &[Turn::user("How do I improve?"), Turn::assistant("Practice daily.")]
        );
    }

    #[tokio::test]
    async fn history_excludes_current_prompt() {
        let mut a = assistant(MockBackend::with_fixed_reply("ok"));
        a.ask("first").await;
        a.ask("second").await;

        let request = a.backend().last_request().unwrap();
        assert_eq!(request.prompt, "second");
        assert_eq!(request.history.len(), 2);
        assert_eq!(request.history[0].role, Role::User);
        assert_eq!(request.history[1].role, Role::Assistant);
        assert_eq!(request.generation.top_k, 40);
    }

    #[tokio::test]
    async fn empty_reply_uses_apology() {
        let mut a = assistant(MockBackend::with_fixed_reply(""));
        assert_eq!(a.ask("hello").await, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn whitespace_only_reply_counts_as_empty() {
        let mut a = assistant(MockBackend::with_fixed_reply(" \n\t "));
        assert!(matches!(
            a.try_ask("hello").await,
            Err(AssistantError::EmptyResponse)
        ));
        assert_eq!(a.ask("hello").await, EMPTY_REPLY_FALLBACK);
        assert_eq!(a.conversation().turns()[1], Turn::assistant(EMPTY_REPLY_FALLBACK));
    }

    #[tokio::test]
    async fn backend_error_uses_error_fallback() {
        let mut a = assistant(MockBackend::scripted(vec![Err(AssistantError::ModelNotFound(
            "gemini-pro".into(),
        ))]));
        assert_eq!(a.ask("hello").await, ERROR_REPLY_FALLBACK);
        assert_eq!(a.conversation().len(), 2);
    }

    #[tokio::test]
    async fn try_ask_does_not_record() {
        let a = assistant(MockBackend::with_fixed_reply("hi"));
        assert_eq!(a.try_ask("hello").await.unwrap(), "hi");
        assert!(a.conversation().is_empty());
    }

    #[tokio::test]
    async fn resumed_history_is_sent() {
        let history = Conversation::from_transcript("user: earlier\nassistant: reply");
        let mut a = assistant(MockBackend::with_fixed_reply("ok")).with_conversation(history);
        a.ask("now").await;
        assert_eq!(a.backend().last_request().unwrap().history.len(), 2);
        assert_eq!(a.conversation().len(), 4);
    }
}
