//! # Orrery
//!
//! A small conversational space assistant in Rust with a **state-in,
//! state-out** pipeline: a question is classified into a plan over a closed
//! set of data sources, each planned fetch step takes the per-question state
//! by value and returns the updated value, and a composer phrases one final
//! answer from whatever was collected.
//!
//! ## Design principles
//!
//! - **Closed routing**: steps are a compile-time enumeration ([`StepId`])
//!   with an explicit terminal; classifier text is validated into it and can
//!   never route anywhere else.
//! - **One fetch idiom**: every external call goes through the same retrying
//!   GET ([`fetch::get_json`]) with a per-attempt timeout, a fixed pause
//!   between attempts, and no retry on malformed bodies.
//! - **All-or-error records**: a source slot holds a fully populated record
//!   or a curated [`SourceError`], never a partial shape.
//! - **An answer, always**: [`Assistant::answer`] is infallible; routing and
//!   fetch failures degrade, and composition falls back to deterministic
//!   text when the model cannot phrase one.
//!
//! ## Main modules
//!
//! - [`assistant`]: [`Assistant`], the pipeline entry point.
//! - [`router`]: [`Router`] and [`Plan`], classification into ordered steps.
//! - [`sources`]: the six fetchers (ISS position, astronauts, Earth weather,
//!   Mars weather, APOD, NEO feed).
//! - [`compose`]: [`Reply`] and [`SourceDigest`], answer and breakdown.
//! - [`llm`]: [`LlmClient`] trait, [`ChatOpenAI`], [`MockLlm`].
//! - [`config`]: [`AssistantConfig`], endpoints, keys, timeout, retry.
//! - [`report`]: record types and [`SourceError`].
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use orrery::{Assistant, AssistantConfig, ChatOpenAI};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let llm = Arc::new(ChatOpenAI::new("gpt-4o-mini"));
//! let assistant = Assistant::new(llm, AssistantConfig::from_env());
//! let reply = assistant.answer("Where is the ISS right now?").await;
//! println!("{}", reply.answer);
//! # }
//! ```

pub mod assistant;
pub mod compose;
pub mod config;
pub mod error;
pub mod fetch;
pub mod llm;
pub mod message;
pub mod prompts;
pub mod report;
pub mod retry;
pub mod router;
pub mod sources;
pub mod state;
pub mod step;

pub use assistant::Assistant;
pub use compose::{Reply, SourceDigest};
pub use config::AssistantConfig;
pub use error::LlmError;
pub use llm::{ChatOpenAI, LlmClient, MockLlm};
pub use message::Message;
pub use report::{
    ApodReport, Astronaut, AstronautReport, EarthWeatherReport, IssReport, MarsWeatherReport,
    NearEarthObject, NeoReport, SourceError, SourceKind, SourceResult,
};
pub use retry::RetryPolicy;
pub use router::{Plan, Router};
pub use state::QueryState;
pub use step::StepId;
