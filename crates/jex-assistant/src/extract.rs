//! Extraction of structured payloads from free-form reply text.
//!
//! Replies are prose that may embed a complete replacement document and
//! an explanation section. Extraction is tolerant: an unusable payload
//! yields `None`, never an error, so the chat keeps working when the
//! model rambles.

use crate::AssistantReply;
use serde_json::Value;

/// Parse a raw reply into its displayable and structured parts.
pub fn parse_reply(text: &str) -> AssistantReply {
    AssistantReply {
        reply: text.to_string(),
        proposed_document: extract_proposed_json(text),
        explanation: extract_explanation(text),
    }
}

/// Pull a proposed document out of the reply, if one is there.
///
/// A ```json code fence wins; failing that, the span from the first `{`
/// to the last `}` is tried. Neither parsing is an error: a reply with
/// no usable JSON simply proposes nothing.
pub fn extract_proposed_json(text: &str) -> Option<Value> {
    let candidate = fenced_json_block(text).or_else(|| brace_span(text))?;
    match serde_json::from_str(candidate.trim()) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "reply contained JSON-looking text that did not parse");
            None
        }
    }
}

fn fenced_json_block(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Pull the `**Explanation:**` section: everything from the marker to
/// the next bold marker or the end of the reply, trimmed.
pub fn extract_explanation(text: &str) -> Option<String> {
    const MARKER: &str = "**Explanation:**";
    let start = text.find(MARKER)? + MARKER.len();
    let rest = &text[start..];
    let body = match rest.find("**") {
        Some(end) => &rest[..end],
        None => rest,
    };
    let body = body.trim();
    (!body.is_empty()).then(|| body.to_string())
}
