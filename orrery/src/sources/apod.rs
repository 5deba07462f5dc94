//! Astronomy Picture of the Day fetcher (NASA APOD).

use serde_json::Value;

use crate::config::AssistantConfig;
use crate::fetch::get_json;
use crate::report::{ApodReport, SourceError, SourceKind, SourceResult};

/// Fetch today's Astronomy Picture of the Day.
pub async fn fetch(
    client: &reqwest::Client,
    config: &AssistantConfig,
) -> SourceResult<ApodReport> {
    let query = [("api_key", config.nasa_api_key.clone())];
    let body = get_json(
        client,
        &config.apod_url,
        &query,
        &config.retry,
        config.timeout,
    )
    .await
    .map_err(|e| SourceError::from_fetch(SourceKind::Apod, e))?;
    report_from_json(&body)
}

/// Shape the APOD body.
///
/// The media URL is the point of the picture of the day; a body without one
/// is malformed. Everything else defaults.
pub(crate) fn report_from_json(body: &Value) -> SourceResult<ApodReport> {
    let Some(url) = body.get("url").and_then(|u| u.as_str()) else {
        return Err(SourceError::malformed(SourceKind::Apod));
    };
    let text = |name: &str, default: &str| -> String {
        body.get(name)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
            .to_string()
    };
    Ok(ApodReport {
        title: text("title", "Unknown"),
        date: text("date", "Unknown"),
        explanation: text("explanation", "No description available."),
        url: url.to_string(),
        media_type: text("media_type", "image"),
    })
}
