//! Question classification and plan building.
//!
//! The router is total over its input: a classification failure, an
//! unparseable reply, unknown labels, an empty valid set all degrade to an
//! empty plan, and the pipeline resolves an empty plan to the terminal
//! compose step. Nothing here returns an error.
//!
//! Classifier replies are untrusted. Labels pass through
//! [`StepId::from_label`] before they can name a step, so routing only ever
//! sees the closed enumeration.

use std::sync::Arc;

use tracing::debug;

use crate::llm::LlmClient;
use crate::message::Message;
use crate::prompts;
use crate::step::StepId;

/// An ordered plan over the fetch steps, plus what classification extracted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plan {
    /// Fetch steps to run, in order. Empty means: nothing to fetch, compose.
    pub steps: Vec<StepId>,
    /// Location for an Earth weather lookup, when the question names one.
    pub location: Option<String>,
    /// Weather was asked for the ISS's position; the weather step reads the
    /// fetched ISS coordinates instead of a location.
    pub weather_at_iss: bool,
}

/// What the classifier replied, before validation against the step set.
struct Classification {
    sources: Vec<String>,
    location: Option<String>,
}

/// Routes a question to an ordered set of fetch steps.
pub struct Router {
    llm: Arc<dyn LlmClient>,
}

impl Router {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Build the plan for one question. Idempotent: same question and same
    /// classifier reply, same plan.
    pub async fn plan(&self, question: &str) -> Plan {
        let mut plan = match self.classify(question).await {
            Some(classification) => validated(classification),
            None => Plan::default(),
        };
        apply_iss_weather_rule(question, &mut plan);
        debug!(
            steps = ?plan.steps,
            location = ?plan.location,
            weather_at_iss = plan.weather_at_iss,
            "plan built"
        );
        plan
    }

    async fn classify(&self, question: &str) -> Option<Classification> {
        let messages: Vec<Message> = prompts::classify(question);
        let reply = match self.llm.invoke(&messages).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!(error = %e, "classification call failed");
                return None;
            }
        };
        let classification = parse_classification(&reply);
        if classification.is_none() {
            debug!(reply = %reply, "classification reply had no usable JSON");
        }
        classification
    }
}

/// Extract the classification payload from a reply that may wrap it in a
/// code fence.
fn parse_classification(reply: &str) -> Option<Classification> {
    let value: serde_json::Value = serde_json::from_str(fenced_json(reply)).ok()?;
    let sources = value
        .get("sources")?
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    let location = value
        .get("location")
        .and_then(|l| l.as_str())
        .map(str::to_string);
    Some(Classification { sources, location })
}

/// Cut the payload out of a ```-fenced block, tolerating a `json` tag.
/// A reply without fences is returned trimmed as-is.
fn fenced_json(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };
    let rest = &trimmed[start + 3..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.find("```") {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}

/// Map classifier labels through the closed step set, dropping unknown
/// labels and duplicates while keeping the reply's order.
fn validated(classification: Classification) -> Plan {
    let mut steps: Vec<StepId> = Vec::new();
    for label in &classification.sources {
        match StepId::from_label(label) {
            Some(step) if !steps.contains(&step) => steps.push(step),
            Some(_) => {}
            None => debug!(label = %label, "discarding unknown source label"),
        }
    }
    let location = classification
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());
    Plan {
        steps,
        location,
        weather_at_iss: false,
    }
}

/// A question asking for weather at the ISS runs the position fetch before
/// the weather fetch, whatever classification said. Matching is
/// case-insensitive on the question text.
fn apply_iss_weather_rule(question: &str, plan: &mut Plan) {
    let q = question.to_lowercase();
    if !(q.contains("weather") && q.contains("iss")) {
        return;
    }
    plan.weather_at_iss = plan.location.is_none();
    plan.steps
        .retain(|s| *s != StepId::IssPosition && *s != StepId::EarthWeather);
    plan.steps.insert(0, StepId::EarthWeather);
    plan.steps.insert(0, StepId::IssPosition);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;

    #[test]
    fn fenced_json_strips_fence_and_tag() {
        assert_eq!(fenced_json("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(fenced_json("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(fenced_json("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(fenced_json("text ```json {\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn parse_classification_reads_sources_and_location() {
        let c = parse_classification(
            "```json\n{\"sources\": [\"earth_weather\"], \"location\": \"Toronto\"}\n```",
        )
        .unwrap();
        assert_eq!(c.sources, vec!["earth_weather"]);
        assert_eq!(c.location.as_deref(), Some("Toronto"));
    }

    #[test]
    fn parse_classification_rejects_prose_and_missing_sources() {
        assert!(parse_classification("no json here").is_none());
        assert!(parse_classification("{\"location\": \"Paris\"}").is_none());
    }

    #[test]
    fn validated_drops_unknown_labels_and_duplicates() {
        let plan = validated(Classification {
            sources: vec![
                "astronauts".to_string(),
                "warp_drive".to_string(),
                "ASTRONAUTS".to_string(),
                "iss_position".to_string(),
            ],
            location: Some("  ".to_string()),
        });
        assert_eq!(plan.steps, vec![StepId::Astronauts, StepId::IssPosition]);
        assert_eq!(plan.location, None);
    }

    #[test]
    fn iss_weather_rule_orders_position_first_regardless_of_casing() {
        for question in [
            "What's the WEATHER at the ISS?",
            "weather at the iss please",
            "Is the Weather nice where the Iss is?",
        ] {
            let mut plan = Plan {
                steps: vec![StepId::EarthWeather],
                location: None,
                weather_at_iss: false,
            };
            apply_iss_weather_rule(question, &mut plan);
            assert_eq!(
                plan.steps,
                vec![StepId::IssPosition, StepId::EarthWeather],
                "question: {}",
                question
            );
            assert!(plan.weather_at_iss, "question: {}", question);
        }
    }

    #[test]
    fn iss_weather_rule_keeps_explicit_location() {
        let mut plan = Plan {
            steps: vec![StepId::EarthWeather, StepId::IssPosition],
            location: Some("Toronto".to_string()),
            weather_at_iss: false,
        };
        apply_iss_weather_rule("weather in Toronto and where is the ISS?", &mut plan);
        assert_eq!(plan.steps, vec![StepId::IssPosition, StepId::EarthWeather]);
        assert!(!plan.weather_at_iss, "explicit location wins");
        assert_eq!(plan.location.as_deref(), Some("Toronto"));
    }

    #[test]
    fn iss_weather_rule_ignores_unrelated_questions() {
        let mut plan = Plan::default();
        apply_iss_weather_rule("Where is the ISS right now?", &mut plan);
        assert!(plan.steps.is_empty());
        assert!(!plan.weather_at_iss);
    }

    /// **Scenario**: a clean classifier reply becomes an ordered, validated plan.
    #[tokio::test]
    async fn plan_follows_classifier_order() {
        let llm = Arc::new(MockLlm::with_reply(
            "```json\n{\"sources\": [\"astronauts\", \"iss_position\"], \"location\": null}\n```",
        ));
        let router = Router::new(llm);
        let plan = router.plan("Who is in space and where is the station?").await;
        assert_eq!(plan.steps, vec![StepId::Astronauts, StepId::IssPosition]);
        assert!(plan.location.is_none());
    }

    /// **Scenario**: an unrecognized category degrades to the empty plan (terminal compose).
    #[tokio::test]
    async fn plan_with_unknown_category_is_empty() {
        let llm = Arc::new(MockLlm::with_reply(
            "```json\n{\"sources\": [\"warp_drive\"], \"location\": null}\n```",
        ));
        let router = Router::new(llm);
        let plan = router.plan("Engage the warp drive").await;
        assert!(plan.steps.is_empty());
    }

    /// **Scenario**: classifier gibberish and classifier failure both degrade to the empty plan.
    #[tokio::test]
    async fn plan_survives_gibberish_and_llm_failure() {
        let router = Router::new(Arc::new(MockLlm::with_reply("certainly! here is...")));
        assert!(router.plan("hello there").await.steps.is_empty());

        let failing = Router::new(Arc::new(MockLlm::failing()));
        assert!(failing.plan("hello there").await.steps.is_empty());
    }

    /// **Scenario**: the ordering rule holds even when classification failed.
    #[tokio::test]
    async fn plan_enforces_iss_before_weather_without_classifier_help() {
        let router = Router::new(Arc::new(MockLlm::failing()));
        let plan = router.plan("What's the weather at the ISS?").await;
        assert_eq!(plan.steps, vec![StepId::IssPosition, StepId::EarthWeather]);
        assert!(plan.weather_at_iss);
    }
}
