//! Minimal message types for LLM prompts.
//!
//! Message roles: System (instructions first in the list), User, Assistant.
//! The classifier and composer prompts in [`prompts`](crate::prompts) build
//! these; `LlmClient::invoke` consumes them.

/// A single message in a prompt.
///
/// Roles: system instructions, user input, assistant reply.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System instructions; placed first in the message list.
    System(String),
    /// User input.
    User(String),
    /// Model reply.
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: constructors produce the matching variant with the given content.
    #[test]
    fn message_constructors_produce_expected_variants() {
        assert!(matches!(Message::system("s"), Message::System(c) if c == "s"));
        assert!(matches!(Message::user("u"), Message::User(c) if c == "u"));
        assert!(matches!(Message::assistant("a"), Message::Assistant(c) if c == "a"));
    }

    /// **Scenario**: each variant survives a serde round trip unchanged.
    #[test]
    fn message_serde_roundtrip_keeps_variant_and_content() {
        for msg in [
            Message::system("instructions"),
            Message::user("question"),
            Message::assistant("reply"),
        ] {
            let json = serde_json::to_string(&msg).expect("serialize");
            let back: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(format!("{:?}", msg), format!("{:?}", back));
        }
    }
}
