//! Near-Earth-object feed fetcher (NASA NeoWs).

use chrono::Utc;
use serde_json::Value;

use crate::config::AssistantConfig;
use crate::fetch::get_json;
use crate::report::{NearEarthObject, NeoReport, SourceError, SourceKind, SourceResult};

/// How many approaches the report keeps, closest first.
const TOP_OBJECTS: usize = 3;

/// Fetch today's feed (UTC date).
pub async fn fetch(
    client: &reqwest::Client,
    config: &AssistantConfig,
) -> SourceResult<NeoReport> {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    fetch_for_date(client, config, &today).await
}

/// Fetch the feed for one day; the feed is queried with start == end.
pub async fn fetch_for_date(
    client: &reqwest::Client,
    config: &AssistantConfig,
    date: &str,
) -> SourceResult<NeoReport> {
    let query = [
        ("start_date", date.to_string()),
        ("end_date", date.to_string()),
        ("api_key", config.nasa_api_key.clone()),
    ];
    let body = get_json(
        client,
        &config.neo_url,
        &query,
        &config.retry,
        config.timeout,
    )
    .await
    .map_err(|e| SourceError::from_fetch(SourceKind::NeoFeed, e))?;
    report_from_json(&body, date)
}

/// Shape the feed body for `date`.
///
/// A body without the `near_earth_objects` map is malformed. A map without
/// an entry for the day is a valid empty feed. Objects are sorted by miss
/// distance with unknown distances last, then cut to the closest three.
pub(crate) fn report_from_json(body: &Value, date: &str) -> SourceResult<NeoReport> {
    let Some(by_date) = body.get("near_earth_objects").and_then(|m| m.as_object()) else {
        return Err(SourceError::malformed(SourceKind::NeoFeed));
    };
    let mut objects: Vec<NearEarthObject> = by_date
        .get(date)
        .and_then(|d| d.as_array())
        .map(|entries| entries.iter().map(object_from_json).collect())
        .unwrap_or_default();
    objects.sort_by(|a, b| {
        let a_km = a.miss_distance_km.unwrap_or(f64::MAX);
        let b_km = b.miss_distance_km.unwrap_or(f64::MAX);
        a_km.total_cmp(&b_km)
    });
    objects.truncate(TOP_OBJECTS);
    Ok(NeoReport {
        date: date.to_string(),
        objects,
    })
}

fn object_from_json(entry: &Value) -> NearEarthObject {
    // The feed serves approach figures as decimal strings.
    let approach_number = |ptr: &str| -> Option<f64> {
        let value = entry.pointer(ptr)?;
        value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
    };
    NearEarthObject {
        name: entry
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or("Unknown")
            .to_string(),
        diameter_m: entry
            .pointer("/estimated_diameter/meters/estimated_diameter_max")
            .and_then(|v| v.as_f64()),
        velocity_kph: approach_number("/close_approach_data/0/relative_velocity/kilometers_per_hour"),
        miss_distance_km: approach_number("/close_approach_data/0/miss_distance/kilometers"),
        hazardous: entry
            .get("is_potentially_hazardous_asteroid")
            .and_then(|h| h.as_bool())
            .unwrap_or(false),
    }
}
