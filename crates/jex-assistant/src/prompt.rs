//! Deterministic prompt assembly.
//!
//! The prompt carries everything the model needs in one string: the
//! standing instructions, the open file's name, the current document
//! pretty-printed with 2-space indentation, the transcript so far as
//! `User:`/`Assistant:` lines, and the new user message last. Same
//! inputs, same prompt.

use crate::ChatTurn;
use serde_json::Value;
use std::fmt::Write;

const INSTRUCTIONS: &str = "\
You are a JSON editing assistant. You help the user analyze, understand, \
and modify the JSON document below.

Instructions:
1. Use the conversation history; refer back to earlier messages when relevant.
2. Only include JSON when the user asks for a modification, addition, or \
deletion. For questions and analysis, reply with text only.
3. When you modify the document, reply with the COMPLETE updated document \
wrapped in a ```json code fence, then a line starting with **Explanation:** \
describing what changed.
4. Never reply with a fragment of the document; always the whole document.";

/// Render the full prompt for one exchange.
pub fn build_prompt(
    user_message: &str,
    document: &Value,
    file_name: &str,
    history: &[ChatTurn],
) -> String {
    let pretty = serde_json::to_string_pretty(document)
        .unwrap_or_else(|_| document.to_string());

    let mut prompt = String::new();
    prompt.push_str(INSTRUCTIONS);
    let _ = write!(
        prompt,
        "\n\nCurrent JSON file: {file_name}\nCurrent JSON structure:\n{pretty}\n"
    );

    if !history.is_empty() {
        prompt.push_str("\nPrevious conversation:\n");
        for turn in history {
            let role = if turn.from_user { "User" } else { "Assistant" };
            let _ = writeln!(prompt, "{role}: {}", turn.message);
        }
    }

    let _ = write!(prompt, "\nCurrent user message: {user_message}");
    prompt
}
