use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// One message of the chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: String,
    pub message: String,
    pub from_user: bool,
    /// Epoch milliseconds.
    pub timestamp: u64,
}

static TURN_SEQ: AtomicU64 = AtomicU64::new(0);

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl ChatTurn {
    fn new(message: impl Into<String>, from_user: bool) -> Self {
        let timestamp = now_millis();
        let seq = TURN_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("{timestamp}-{seq}"),
            message: message.into(),
            from_user,
            timestamp,
        }
    }

    pub fn user(message: impl Into<String>) -> Self {
        Self::new(message, true)
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self::new(message, false)
    }
}

/// A parsed assistant reply.
///
/// `proposed_document` is present only when the reply carried a JSON
/// payload that parsed; the raw text is always kept for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    /// The full reply text.
    pub reply: String,
    /// A complete replacement document, when the reply proposed one.
    pub proposed_document: Option<Value>,
    /// The `**Explanation:**` section, when present.
    pub explanation: Option<String>,
}

/// Errors surfaced by assistant clients.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The provider call failed (network, auth, quota).
    #[error("assistant request failed: {0}")]
    Provider(String),

    /// The client is not configured (no credentials).
    #[error("assistant is not configured")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        let user = ChatTurn::user("hello");
        let reply = ChatTurn::assistant("hi");
        assert!(user.from_user);
        assert!(!reply.from_user);
        assert_ne!(user.id, reply.id);
    }
}
