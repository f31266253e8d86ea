//! The assistant client boundary.
//!
//! The editor core never talks to a model provider directly; it goes
//! through [`AssistantClient`], which takes the new message plus the
//! current document and transcript, and returns a parsed reply. A real
//! implementation wraps a provider SDK; [`ScriptedAssistant`] feeds
//! canned replies through the same parsing pipeline for tests.

use crate::extract::parse_reply;
use crate::{AssistantError, AssistantReply, ChatTurn};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// One round trip to the assistant.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Send `message` about `document` (open as `file_name`), with the
    /// transcript so far, and get the parsed reply.
    async fn converse(
        &self,
        message: &str,
        document: &Value,
        file_name: &str,
        history: &[ChatTurn],
    ) -> Result<AssistantReply, AssistantError>;
}

/// Test double: replays a fixed sequence of raw reply texts, running
/// each through the real reply parsing.
#[derive(Default)]
pub struct ScriptedAssistant {
    replies: Mutex<Vec<String>>,
}

impl ScriptedAssistant {
    /// Queue up the raw replies, returned in order.
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut replies: Vec<String> = replies.into_iter().map(Into::into).collect();
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
        }
    }
}

#[async_trait]
impl AssistantClient for ScriptedAssistant {
    async fn converse(
        &self,
        _message: &str,
        _document: &Value,
        _file_name: &str,
        _history: &[ChatTurn],
    ) -> Result<AssistantReply, AssistantError> {
        let text = self
            .replies
            .lock()
            .await
            .pop()
            .ok_or_else(|| AssistantError::Provider("script exhausted".to_string()))?;
        Ok(parse_reply(&text))
    }
}
