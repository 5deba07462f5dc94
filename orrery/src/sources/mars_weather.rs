//! Mars weather fetcher (NASA InSight feed).

use serde_json::Value;

use crate::config::AssistantConfig;
use crate::fetch::get_json;
use crate::report::{MarsWeatherReport, SourceError, SourceKind, SourceResult};

/// Fetch the newest sol of InSight weather readings.
pub async fn fetch(
    client: &reqwest::Client,
    config: &AssistantConfig,
) -> SourceResult<MarsWeatherReport> {
    let query = [
        ("api_key", config.nasa_api_key.clone()),
        ("feedtype", "json".to_string()),
        ("ver", "1.0".to_string()),
    ];
    let body = get_json(
        client,
        &config.mars_weather_url,
        &query,
        &config.retry,
        config.timeout,
    )
    .await
    .map_err(|e| SourceError::from_fetch(SourceKind::MarsWeather, e))?;
    report_from_json(&body)
}

/// Shape the InSight body around its newest sol.
///
/// `sol_keys` lists available sols oldest-first; the last entry is the
/// newest. An empty list means the feed has nothing current (the lander's
/// mission has ended and the feed goes quiet for stretches). The numeric
/// channels and the UTC bounds come and go, so they shape to `None` rather
/// than failing.
pub(crate) fn report_from_json(body: &Value) -> SourceResult<MarsWeatherReport> {
    let keys = body
        .get("sol_keys")
        .and_then(|k| k.as_array())
        .ok_or_else(|| SourceError::malformed(SourceKind::MarsWeather))?;
    let sol = keys
        .last()
        .and_then(|s| s.as_str())
        .map(str::to_string)
        .ok_or_else(|| SourceError::empty(SourceKind::MarsWeather))?;
    let entry = body
        .get(sol.as_str())
        .ok_or_else(|| SourceError::malformed(SourceKind::MarsWeather))?;

    let number = |ptr: &str| entry.pointer(ptr).and_then(|v| v.as_f64());
    let text = |ptr: &str| {
        entry
            .pointer(ptr)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };
    Ok(MarsWeatherReport {
        season: text("/Season").unwrap_or_else(|| "Unknown".to_string()),
        temperature_c: number("/AT/av"),
        pressure_pa: number("/PRE/av"),
        wind_speed_ms: number("/HWS/av"),
        wind_direction: text("/WD/most_common/compass_point"),
        first_utc: text("/First_UTC"),
        last_utc: text("/Last_UTC"),
        sol,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_newest_sol() {
        let body = json!({
            "sol_keys": ["674", "675"],
            "674": { "Season": "winter", "AT": { "av": -60.0 } },
            "675": {
                "Season": "winter",
                "AT": { "av": -62.3 },
                "PRE": { "av": 750.5 },
                "HWS": { "av": 4.2 },
                "WD": { "most_common": { "compass_point": "WNW" } },
                "First_UTC": "2020-10-19T10:53:22Z",
                "Last_UTC": "2020-10-20T11:32:57Z"
            }
        });
        let report = report_from_json(&body).unwrap();
        assert_eq!(report.sol, "675");
        assert_eq!(report.season, "winter");
        assert_eq!(report.temperature_c, Some(-62.3));
        assert_eq!(report.wind_direction.as_deref(), Some("WNW"));
        assert_eq!(report.first_utc.as_deref(), Some("2020-10-19T10:53:22Z"));
    }

    #[test]
    fn empty_sol_keys_reports_no_current_data() {
        let body = json!({ "sol_keys": [] });
        assert!(matches!(
            report_from_json(&body),
            Err(SourceError::Empty { .. })
        ));
    }

    #[test]
    fn missing_sol_keys_is_malformed() {
        let body = json!({ "validity_checks": {} });
        assert!(matches!(
            report_from_json(&body),
            Err(SourceError::Malformed { .. })
        ));
    }

    #[test]
    fn absent_channels_shape_to_none() {
        let body = json!({
            "sol_keys": ["700"],
            "700": { "Season": "spring" }
        });
        let report = report_from_json(&body).unwrap();
        assert_eq!(report.temperature_c, None);
        assert_eq!(report.pressure_pa, None);
        assert_eq!(report.wind_speed_ms, None);
        assert_eq!(report.wind_direction, None);
    }
}
