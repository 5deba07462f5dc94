//! Mock LLM for tests and offline examples.
//!
//! Four modes: a fixed reply for every call, a scripted sequence (classifier
//! reply first, composer reply second), an echo of the last user message, and
//! unconditional failure. The scripted mode errors once the script runs out
//! so an under-scripted test fails loudly instead of looping.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::llm::LlmClient;
use crate::message::Message;

enum Mode {
    /// Same reply on every call.
    Fixed(String),
    /// Replies played in order; exhausted script returns Err.
    Scripted(Mutex<VecDeque<String>>),
    /// Reply is the content of the last user message.
    Echo,
    /// Every call fails.
    Failing,
}

/// Mock LLM with configurable reply behavior.
///
/// **Interaction**: Implements `LlmClient`; used in place of [`ChatOpenAI`]
/// by router/composer tests and by the offline example.
pub struct MockLlm {
    mode: Mode,
}

impl MockLlm {
    /// Mock that returns the same text on every call.
    pub fn with_reply(text: impl Into<String>) -> Self {
        Self {
            mode: Mode::Fixed(text.into()),
        }
    }

    /// Mock that plays the given replies in order, then errors when exhausted.
    ///
    /// A pipeline run makes at most two calls (classify, compose), so a
    /// two-entry script covers a full question.
    pub fn scripted<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queue = replies.into_iter().map(Into::into).collect();
        Self {
            mode: Mode::Scripted(Mutex::new(queue)),
        }
    }

    /// Mock that echoes the last user message back as the assistant reply.
    ///
    /// Useful for composer tests: the digest lines are in the user message,
    /// so the "phrased" answer provably contains the collected data.
    pub fn echoing() -> Self {
        Self { mode: Mode::Echo }
    }

    /// Mock whose calls always fail.
    pub fn failing() -> Self {
        Self {
            mode: Mode::Failing,
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<String, LlmError> {
        match &self.mode {
            Mode::Fixed(text) => Ok(text.clone()),
            Mode::Scripted(queue) => {
                let mut queue = queue
                    .lock()
                    .map_err(|_| LlmError::CompletionFailed("mock script lock poisoned".to_string()))?;
                queue
                    .pop_front()
                    .ok_or_else(|| LlmError::CompletionFailed("mock script exhausted".to_string()))
            }
            Mode::Echo => {
                let last = messages.iter().rev().find_map(|m| match m {
                    Message::User(s) => Some(s.clone()),
                    _ => None,
                });
                Ok(last.unwrap_or_default())
            }
            Mode::Failing => Err(LlmError::CompletionFailed(
                "mock llm configured to fail".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: with_reply returns the same text for every call.
    #[tokio::test]
    async fn with_reply_repeats_text() {
        let llm = MockLlm::with_reply("always this");
        let messages = [Message::user("anything")];
        for _ in 0..3 {
            let reply = llm.invoke(&messages).await.unwrap();
            assert_eq!(reply, "always this");
        }
    }

    /// **Scenario**: scripted replies come back in order, then the mock errors.
    #[tokio::test]
    async fn scripted_plays_in_order_then_errors() {
        let llm = MockLlm::scripted(["first", "second"]);
        let messages = [Message::user("q")];
        assert_eq!(llm.invoke(&messages).await.unwrap(), "first");
        assert_eq!(llm.invoke(&messages).await.unwrap(), "second");
        let exhausted = llm.invoke(&messages).await;
        assert!(exhausted.is_err(), "exhausted script should return Err");
    }

    /// **Scenario**: echoing returns the content of the last user message.
    #[tokio::test]
    async fn echoing_returns_last_user_message() {
        let llm = MockLlm::echoing();
        let messages = [
            Message::system("instructions"),
            Message::user("older"),
            Message::user("newest"),
        ];
        assert_eq!(llm.invoke(&messages).await.unwrap(), "newest");
    }

    /// **Scenario**: echoing with no user message returns empty text rather than failing.
    #[tokio::test]
    async fn echoing_without_user_message_returns_empty() {
        let llm = MockLlm::echoing();
        let messages = [Message::system("only instructions")];
        assert_eq!(llm.invoke(&messages).await.unwrap(), "");
    }

    /// **Scenario**: failing mock always errors.
    #[tokio::test]
    async fn failing_always_errors() {
        let llm = MockLlm::failing();
        let result = llm.invoke(&[Message::user("q")]).await;
        assert!(result.is_err());
    }
}
