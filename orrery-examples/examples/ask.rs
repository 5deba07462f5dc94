//! Example: ask the assistant a question against the live data sources.
//!
//! Classification and phrasing go through OpenAI; the data comes from the
//! public ISS, weather and NASA endpoints. Set OPENAI_API_KEY, and optionally
//! WEATHER_API_KEY (weatherapi.com) and NASA_API_KEY (DEMO_KEY otherwise).
//!
//! Run: `cargo run -p orrery-examples --example ask -- "Where is the ISS right now?"`

use std::env;
use std::sync::Arc;

use orrery::{Assistant, AssistantConfig, ChatOpenAI};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let question = env::args()
        .nth(1)
        .unwrap_or_else(|| "Where is the ISS right now?".to_string());
    let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
    println!("Model: {}", model);

    let llm = Arc::new(ChatOpenAI::new(model.as_str()));
    let assistant = Assistant::new(llm, AssistantConfig::from_env());

    let reply = assistant.answer(&question).await;

    println!("\nQ: {}", question);
    println!("A: {}", reply.answer);
    if !reply.consulted.is_empty() {
        println!("\nSources consulted:");
        for digest in &reply.consulted {
            let mark = if digest.ok { "ok" } else { "err" };
            println!("  [{}] {}: {}", mark, digest.source, digest.summary);
        }
    }
}
