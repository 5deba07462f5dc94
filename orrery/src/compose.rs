//! Final answer composition from the collected records.
//!
//! Composition always yields an answer. Two cases are deterministic and skip
//! the model entirely: no source was consulted (the question routed nowhere)
//! and every consulted source failed. Otherwise the model phrases the digest
//! lines, and if it cannot, a fallback sentence is built from the lines
//! directly so collected data is never discarded.
//!
//! Error records reach this module only as their curated `SourceError` text,
//! so no transport internals can leak into an answer or the breakdown.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm::LlmClient;
use crate::prompts;
use crate::report::{SourceKind, SourceResult};
use crate::state::QueryState;

/// What one consulted source contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDigest {
    pub source: SourceKind,
    /// One line describing what the source returned; for a failed source
    /// this is the curated error text.
    pub summary: String,
    pub ok: bool,
}

/// The assistant's reply: one answer plus the per-source breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub answer: String,
    /// One entry per consulted source, in fixed source order.
    pub consulted: Vec<SourceDigest>,
}

/// Answer when the question routed to no source at all.
const NO_DATA_APOLOGY: &str = "I'm sorry, I don't have a data source that can answer that. \
Try asking about the ISS, who is in space, weather on Earth or Mars, today's astronomy \
picture, or near-Earth asteroids.";

/// Answer when every consulted source failed.
const ALL_FAILED_APOLOGY: &str = "I'm sorry, I couldn't reach the space data sources I \
needed for that question. Please try again in a moment.";

/// Phrases the final answer over the collected state.
pub struct Composer {
    llm: Arc<dyn LlmClient>,
}

impl Composer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Produce the final answer for the collected state. Infallible.
    pub async fn compose(&self, state: &QueryState) -> Reply {
        let consulted = digest(state);
        if consulted.is_empty() {
            debug!("no sources consulted; answering with the capability apology");
            return Reply {
                answer: NO_DATA_APOLOGY.to_string(),
                consulted,
            };
        }
        if consulted.iter().all(|d| !d.ok) {
            debug!("every consulted source failed; answering with the outage apology");
            return Reply {
                answer: ALL_FAILED_APOLOGY.to_string(),
                consulted,
            };
        }

        let lines: Vec<String> = consulted
            .iter()
            .map(|d| format!("{}: {}", d.source, d.summary))
            .collect();
        let answer = match self.llm.invoke(&prompts::compose(&state.question, &lines)).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                debug!("composition reply was empty; using the digest fallback");
                fallback_answer(&consulted)
            }
            Err(e) => {
                debug!(error = %e, "composition call failed; using the digest fallback");
                fallback_answer(&consulted)
            }
        };
        Reply { answer, consulted }
    }
}

/// Collect one digest entry per consulted source, in fixed source order.
pub fn digest(state: &QueryState) -> Vec<SourceDigest> {
    let mut entries = Vec::new();
    push(&mut entries, SourceKind::IssPosition, &state.iss);
    push(&mut entries, SourceKind::Astronauts, &state.astronauts);
    push(&mut entries, SourceKind::EarthWeather, &state.earth_weather);
    push(&mut entries, SourceKind::MarsWeather, &state.mars_weather);
    push(&mut entries, SourceKind::Apod, &state.apod);
    push(&mut entries, SourceKind::NeoFeed, &state.neo);
    entries
}

fn push<T: fmt::Display>(
    entries: &mut Vec<SourceDigest>,
    source: SourceKind,
    slot: &Option<SourceResult<T>>,
) {
    if let Some(result) = slot {
        let (summary, ok) = match result {
            Ok(report) => (report.to_string(), true),
            Err(err) => (err.to_string(), false),
        };
        entries.push(SourceDigest {
            source,
            summary,
            ok,
        });
    }
}

/// Deterministic answer from the digest lines when the model cannot phrase
/// one. Successful lines are joined into one reply; failed sources get a
/// polite mention by name only.
fn fallback_answer(consulted: &[SourceDigest]) -> String {
    let found: Vec<&str> = consulted
        .iter()
        .filter(|d| d.ok)
        .map(|d| d.summary.as_str())
        .collect();
    let missing: Vec<&str> = consulted
        .iter()
        .filter(|d| !d.ok)
        .map(|d| d.source.label())
        .collect();
    let mut answer = format!("Here's what I found: {}", found.join(" "));
    if !missing.is_empty() {
        answer.push_str(&format!(
            " I couldn't get {} data this time.",
            missing.join(" or ")
        ));
    }
    answer
}
