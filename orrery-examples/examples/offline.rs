//! Example: the degradation path, no network or API key required.
//!
//! A scripted model routes the question to the ISS source; that source's URL
//! points at an unroutable address, so every attempt fails and the assistant
//! falls back to its apology instead of raising.
//!
//! Run: `cargo run -p orrery-examples --example offline`

use std::sync::Arc;
use std::time::Duration;

use orrery::{Assistant, AssistantConfig, MockLlm, RetryPolicy};

#[tokio::main]
async fn main() {
    let config = AssistantConfig {
        iss_url: "http://127.0.0.1:9/iss-now.json".to_string(),
        ..AssistantConfig::default()
    }
    .with_retry(RetryPolicy::fixed(2, Duration::from_millis(100)))
    .with_timeout(Duration::from_millis(250));

    let classification = "```json\n{\"sources\": [\"iss_position\"], \"location\": null}\n```";
    let llm = Arc::new(MockLlm::scripted([classification.to_string()]));
    let assistant = Assistant::new(llm, config);

    let question = "Where is the ISS right now?";
    let reply = assistant.answer(question).await;

    println!("Q: {}", question);
    println!("A: {}", reply.answer);
    println!("\nSources consulted:");
    for digest in &reply.consulted {
        let mark = if digest.ok { "ok" } else { "err" };
        println!("  [{}] {}: {}", mark, digest.source, digest.summary);
    }
}
