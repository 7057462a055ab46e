//! Mock backend for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{ChatBackend, ChatRequest};
use crate::error::AssistantError;

/// A scripted chat backend.
///
/// Returns queued replies in order, then the default reply.
pub struct MockBackend {
    replies: Mutex<VecDeque<Result<String, AssistantError>>>,
    default_reply: String,
    call_count: AtomicU32,
    last_request: Mutex<Option<ChatRequest>>,
}

impl MockBackend {
    /// Create a mock that always returns the same reply.
    pub fn with_fixed_reply(reply: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default_reply: reply.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that plays back `replies` before falling back to an empty reply.
    pub fn scripted(replies: Vec<Result<String, AssistantError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            default_reply: String::new(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of calls made to this backend.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The last request received.
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, request: &ChatRequest) -> Result<String, AssistantError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => Ok(self.default_reply.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssistantConfig;

    fn request(prompt: &str) -> ChatRequest {
        let config = AssistantConfig::with_api_key("test");
        ChatRequest {
            model: config.model,
            history: vec![],
            prompt: prompt.into(),
            generation: config.generation,
            safety_settings: config.safety_settings,
        }
    }

    #[tokio::test]
    async fn fixed_reply() {
        let backend = MockBackend::with_fixed_reply("hello");
        let reply = backend.send(&request("hi")).await.unwrap();
        assert_eq!(reply, "hello");
        assert_eq!(backend.call_count(), 1);
        assert_eq!(backend.last_request().unwrap().prompt, "hi");
    }

    #[tokio::test]
    async fn scripted_replies_play_in_order() {
        let backend = MockBackend::scripted(vec![
            Ok("first".into()),
            Err(AssistantError::Backend("boom".into())),
        ]);
        assert_eq!(backend.send(&request("a")).await.unwrap(), "first");
        assert!(backend.send(&request("b")).await.is_err());
        assert_eq!(backend.send(&request("c")).await.unwrap(), "");
        assert_eq!(backend.call_count(), 3);
    }
}
