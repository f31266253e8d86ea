//! The chat-assistant boundary of the JSON editor.
//!
//! The assistant can read the open document and propose a complete
//! replacement for it; applying a proposal is a whole-document set on
//! the edit session, so the engine's guarantees hold unchanged. This
//! crate owns the contract: transcript types, deterministic prompt
//! assembly, reply parsing, and the [`AssistantClient`] trait.

mod client;
mod extract;
mod prompt;
mod types;

pub use client::{AssistantClient, ScriptedAssistant};
pub use extract::{extract_explanation, extract_proposed_json, parse_reply};
pub use prompt::build_prompt;
pub use types::{AssistantError, AssistantReply, ChatTurn};
