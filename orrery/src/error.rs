//! Error type for the LLM boundary.
//!
//! Used by `LlmClient::invoke` and its implementations. Fetcher failures have
//! their own type (`SourceError` in [`report`](crate::report)) because they are
//! shown to users; this one never is.

use thiserror::Error;

/// LLM call error.
///
/// Returned by `LlmClient::invoke` when a completion cannot be produced.
/// The router and composer both treat it as "no reply" and fall back, so this
/// error never escapes `Assistant::answer`.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The completion failed with a message (request build, transport, API).
    #[error("completion failed: {0}")]
    CompletionFailed(String),

    /// The API answered without any choices to read.
    #[error("model returned no choices")]
    EmptyResponse,
}
