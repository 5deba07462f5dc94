//! LLM client abstraction for classification and answer phrasing.
//!
//! The router and the composer both depend on a callable that turns a list of
//! messages into assistant text; this module defines that trait plus the
//! OpenAI-backed and mock implementations.
//!
//! Replies are treated as untrusted text everywhere: the router post-validates
//! them against the closed step set before anything can be routed, and the
//! composer falls back to a deterministic answer when a reply is unusable.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::message::Message;

/// A chat completion client: messages in, assistant text out.
///
/// **Interaction**: Implemented by [`ChatOpenAI`] and [`MockLlm`]; consumed by
/// the router and the composer through `Arc<dyn LlmClient>`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one completion over the given messages and return the assistant text.
    async fn invoke(&self, messages: &[Message]) -> Result<String, LlmError>;
}
