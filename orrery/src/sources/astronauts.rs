//! Astronaut roster fetcher (open-notify astros).

use serde_json::Value;

use crate::config::AssistantConfig;
use crate::fetch::get_json;
use crate::report::{Astronaut, AstronautReport, SourceError, SourceKind, SourceResult};

/// Fetch the roster of people currently in space.
pub async fn fetch(
    client: &reqwest::Client,
    config: &AssistantConfig,
) -> SourceResult<AstronautReport> {
    let body = get_json(
        client,
        &config.astros_url,
        &[],
        &config.retry,
        config.timeout,
    )
    .await
    .map_err(|e| SourceError::from_fetch(SourceKind::Astronauts, e))?;
    Ok(report_from_json(&body))
}

/// Shape the astros body into a roster.
///
/// A missing `people` list means an empty roster; entries without a name are
/// dropped and a missing craft becomes "Unknown".
pub(crate) fn report_from_json(body: &Value) -> AstronautReport {
    let people = body
        .get("people")
        .and_then(|p| p.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let name = entry.get("name")?.as_str()?.to_string();
                    let craft = entry
                        .get("craft")
                        .and_then(|c| c.as_str())
                        .unwrap_or("Unknown")
                        .to_string();
                    Some(Astronaut { name, craft })
                })
                .collect()
        })
        .unwrap_or_default();
    AstronautReport { people }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_roster_with_crafts() {
        let body = json!({
            "number": 2,
            "people": [
                { "name": "Oleg Kononenko", "craft": "ISS" },
                { "name": "Li Guangsu", "craft": "Tiangong" }
            ]
        });
        let report = report_from_json(&body);
        assert_eq!(report.count(), 2);
        assert_eq!(report.people[0].name, "Oleg Kononenko");
        assert_eq!(report.people[1].craft, "Tiangong");
    }

    #[test]
    fn missing_people_defaults_to_empty_roster() {
        let report = report_from_json(&json!({ "message": "success" }));
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn nameless_entries_are_dropped_and_craft_defaults() {
        let body = json!({
            "people": [
                { "craft": "ISS" },
                { "name": "Tracy Dyson" }
            ]
        });
        let report = report_from_json(&body);
        assert_eq!(report.count(), 1);
        assert_eq!(report.people[0].name, "Tracy Dyson");
        assert_eq!(report.people[0].craft, "Unknown");
    }
}
