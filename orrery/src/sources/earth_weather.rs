//! Earth weather fetcher (WeatherAPI current conditions).
//!
//! The one fetcher with preconditions: it needs an API key and somewhere to
//! look. Both are checked before any request goes out, so a misconfigured or
//! location-less lookup costs nothing and degrades to an error record
//! immediately.

use serde_json::Value;

use crate::config::AssistantConfig;
use crate::fetch::get_json;
use crate::report::{EarthWeatherReport, SourceError, SourceKind, SourceResult};
use crate::state::QueryState;

/// Resolve where the lookup should point.
///
/// An explicit location from classification wins. Without one, a
/// weather-at-ISS question reads the coordinates already fetched into the
/// state; if those are absent the lookup short-circuits.
pub(crate) fn target(state: &QueryState) -> SourceResult<String> {
    if let Some(location) = &state.location {
        return Ok(location.clone());
    }
    if state.weather_at_iss {
        return match &state.iss {
            Some(Ok(report)) => Ok(format!("{},{}", report.latitude, report.longitude)),
            _ => Err(SourceError::missing_input(
                SourceKind::EarthWeather,
                "the ISS position was unavailable for the weather lookup",
            )),
        };
    }
    Err(SourceError::missing_input(
        SourceKind::EarthWeather,
        "no location was given for the weather lookup",
    ))
}

/// Fetch current conditions for `place` (a name or a `lat,lon` pair).
pub async fn fetch(
    client: &reqwest::Client,
    config: &AssistantConfig,
    place: &str,
) -> SourceResult<EarthWeatherReport> {
    let Some(key) = config.weather_api_key.as_deref() else {
        return Err(SourceError::missing_input(
            SourceKind::EarthWeather,
            "the Earth weather service has no API key configured",
        ));
    };
    let query = [("key", key.to_string()), ("q", place.to_string())];
    let body = get_json(
        client,
        &config.weather_url,
        &query,
        &config.retry,
        config.timeout,
    )
    .await
    .map_err(|e| SourceError::from_fetch(SourceKind::EarthWeather, e))?;
    report_from_json(&body)
}

/// Shape the current-conditions body.
///
/// `temp_c` is the payload; without it the response is malformed. Place
/// name, country and condition text default to "Unknown".
pub(crate) fn report_from_json(body: &Value) -> SourceResult<EarthWeatherReport> {
    let Some(temp_c) = body.pointer("/current/temp_c").and_then(|t| t.as_f64()) else {
        return Err(SourceError::malformed(SourceKind::EarthWeather));
    };
    let text = |ptr: &str| -> String {
        body.pointer(ptr)
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string()
    };
    Ok(EarthWeatherReport {
        location: text("/location/name"),
        country: text("/location/country"),
        temp_c,
        condition: text("/current/condition/text"),
    })
}
