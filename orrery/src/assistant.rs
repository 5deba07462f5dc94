//! The assistant: router, fetch steps and composer on one sequential pipeline.

use std::sync::Arc;

use tracing::{debug, info};

use crate::compose::{Composer, Reply};
use crate::config::AssistantConfig;
use crate::llm::LlmClient;
use crate::router::Router;
use crate::sources::{apod, astronauts, earth_weather, iss, mars_weather, neo};
use crate::state::QueryState;
use crate::step::StepId;

/// A conversational space assistant.
///
/// One call to [`Assistant::answer`] runs the whole pipeline: classify the
/// question into a plan, run the planned fetch steps one at a time, then
/// compose the answer. State lives for exactly one question and is owned by
/// the pipeline loop; steps take it by value and hand back the new value.
///
/// **Interaction**: Holds the LLM behind `Arc<dyn LlmClient>` (shared by
/// router and composer) and one `reqwest::Client` shared by the fetchers.
pub struct Assistant {
    router: Router,
    composer: Composer,
    config: AssistantConfig,
    http: reqwest::Client,
}

impl Assistant {
    /// Build an assistant over the given LLM client and config.
    pub fn new(llm: Arc<dyn LlmClient>, config: AssistantConfig) -> Self {
        Self {
            router: Router::new(llm.clone()),
            composer: Composer::new(llm),
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Answer one question.
    ///
    /// Never fails: fetch problems degrade to error records, routing problems
    /// degrade to an empty plan, and composition has deterministic fallbacks,
    /// so the worst case is an apology.
    pub async fn answer(&self, question: &str) -> Reply {
        info!(question, "answering");
        let plan = self.router.plan(question).await;

        let mut state = QueryState::new(question);
        state.location = plan.location;
        state.weather_at_iss = plan.weather_at_iss;

        let mut queue = plan.steps.into_iter();
        loop {
            let step = queue.next().unwrap_or(StepId::Compose);
            info!(step = step.as_str(), "running step");
            match step {
                StepId::Compose => break,
                fetch_step => state = self.run_fetch(fetch_step, state).await,
            }
        }

        let reply = self.composer.compose(&state).await;
        debug!(answer = %reply.answer, consulted = reply.consulted.len(), "answered");
        reply
    }

    /// Run one fetch step: state in, updated state out.
    async fn run_fetch(&self, step: StepId, state: QueryState) -> QueryState {
        let mut state = state;
        match step {
            StepId::IssPosition => {
                state.iss = Some(iss::fetch(&self.http, &self.config).await);
            }
            StepId::Astronauts => {
                state.astronauts = Some(astronauts::fetch(&self.http, &self.config).await);
            }
            StepId::EarthWeather => {
                let result = match earth_weather::target(&state) {
                    Ok(place) => earth_weather::fetch(&self.http, &self.config, &place).await,
                    Err(err) => Err(err),
                };
                state.earth_weather = Some(result);
            }
            StepId::MarsWeather => {
                state.mars_weather = Some(mars_weather::fetch(&self.http, &self.config).await);
            }
            StepId::Apod => {
                state.apod = Some(apod::fetch(&self.http, &self.config).await);
            }
            StepId::NeoFeed => {
                state.neo = Some(neo::fetch(&self.http, &self.config).await);
            }
            StepId::Compose => {}
        }
        state
    }
}
