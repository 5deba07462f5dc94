//! Prompt builders for classification and answer phrasing.

use crate::message::Message;
use crate::step::StepId;

const CLASSIFY_LABELS: [StepId; 6] = [
    StepId::IssPosition,
    StepId::Astronauts,
    StepId::EarthWeather,
    StepId::MarsWeather,
    StepId::Apod,
    StepId::NeoFeed,
];

/// Messages asking the model to classify a question into source labels.
///
/// The contract is fenced JSON: `{"sources": [...], "location": ...}`.
/// Replies are post-validated by the router; unknown labels go nowhere.
pub fn classify(question: &str) -> Vec<Message> {
    let labels = CLASSIFY_LABELS
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let system = format!(
        "You route questions about space to data sources. Reply with one fenced JSON \
         object of the form {{\"sources\": [...], \"location\": ...}}. \"sources\" lists \
         the sources to consult, in the order they should run, chosen only from: {}. \
         \"location\" is the place name for an Earth weather lookup, or null. \
         Use an empty sources list when no source fits the question.",
        labels
    );
    vec![Message::system(system), Message::user(question)]
}

/// Messages asking the model to phrase one answer from the digest lines.
pub fn compose(question: &str, digest_lines: &[String]) -> Vec<Message> {
    let system = "You are a friendly space assistant. Answer the user's question in a few \
                  sentences using only the data below. Weave multiple findings into one \
                  coherent reply and keep every figure exactly as given. If a source had \
                  no data, say so briefly without technical detail.";
    let mut user = format!("Question: {}\n\nData:\n", question);
    for line in digest_lines {
        user.push_str("- ");
        user.push_str(line);
        user.push('\n');
    }
    vec![Message::system(system), Message::user(user)]
}
