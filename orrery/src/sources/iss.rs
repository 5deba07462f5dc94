//! ISS position fetcher (open-notify iss-now).

use serde_json::Value;

use crate::config::AssistantConfig;
use crate::fetch::get_json;
use crate::report::{IssReport, SourceError, SourceKind, SourceResult};

/// Fetch the current ISS ground position.
pub async fn fetch(
    client: &reqwest::Client,
    config: &AssistantConfig,
) -> SourceResult<IssReport> {
    let body = get_json(client, &config.iss_url, &[], &config.retry, config.timeout)
        .await
        .map_err(|e| SourceError::from_fetch(SourceKind::IssPosition, e))?;
    report_from_json(&body)
}

/// Shape the iss-now body into a report.
///
/// Coordinates arrive as decimal-degree strings and are kept verbatim; both
/// must be present and numeric, otherwise the response is malformed.
pub(crate) fn report_from_json(body: &Value) -> SourceResult<IssReport> {
    let position = body.get("iss_position");
    let coordinate = |name: &str| -> Option<String> {
        let value = position?.get(name)?;
        if let Some(s) = value.as_str() {
            s.parse::<f64>().ok()?;
            return Some(s.to_string());
        }
        value.as_f64().map(|n| n.to_string())
    };
    match (coordinate("latitude"), coordinate("longitude")) {
        (Some(latitude), Some(longitude)) => Ok(IssReport {
            latitude,
            longitude,
        }),
        _ => Err(SourceError::malformed(SourceKind::IssPosition)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_coordinates_verbatim() {
        let body = json!({
            "message": "success",
            "iss_position": { "latitude": "10.0", "longitude": "20.0" }
        });
        let report = report_from_json(&body).unwrap();
        assert_eq!(report.latitude, "10.0");
        assert_eq!(report.longitude, "20.0");
    }

    #[test]
    fn accepts_numeric_coordinates() {
        let body = json!({ "iss_position": { "latitude": -51.25, "longitude": 3.5 } });
        let report = report_from_json(&body).unwrap();
        assert_eq!(report.latitude, "-51.25");
        assert_eq!(report.longitude, "3.5");
    }

    #[test]
    fn missing_position_is_malformed() {
        let body = json!({ "message": "success" });
        let err = report_from_json(&body).unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }

    #[test]
    fn non_numeric_coordinate_is_malformed() {
        let body = json!({ "iss_position": { "latitude": "north", "longitude": "20.0" } });
        assert!(report_from_json(&body).is_err());
    }
}
