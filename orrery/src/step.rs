//! The closed set of pipeline steps.
//!
//! Routing works over this enumeration only. Classifier output that does not
//! map into it is discarded before it can influence anything, and the
//! pipeline resolves an exhausted or empty plan to [`StepId::Compose`], so
//! every run terminates in composition.

use serde::{Deserialize, Serialize};

/// Identifier of one pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepId {
    /// Fetch the current ISS ground position.
    IssPosition,
    /// Fetch the roster of people currently in space.
    Astronauts,
    /// Fetch current weather for an Earth location.
    EarthWeather,
    /// Fetch the latest InSight Mars weather.
    MarsWeather,
    /// Fetch the Astronomy Picture of the Day.
    Apod,
    /// Fetch today's near-Earth-object feed.
    NeoFeed,
    /// Terminal step: phrase the final answer from whatever was collected.
    Compose,
}

impl StepId {
    /// Step name as used in the classification contract and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::IssPosition => "iss_position",
            StepId::Astronauts => "astronauts",
            StepId::EarthWeather => "earth_weather",
            StepId::MarsWeather => "mars_weather",
            StepId::Apod => "apod",
            StepId::NeoFeed => "neo_feed",
            StepId::Compose => "compose",
        }
    }

    /// Parse a classifier label into a fetch step.
    ///
    /// Labels are matched after trimming and lowercasing. `Compose` is never
    /// produced from a label; it is the pipeline's own terminal.
    pub fn from_label(label: &str) -> Option<StepId> {
        match label.trim().to_lowercase().as_str() {
            "iss_position" => Some(StepId::IssPosition),
            "astronauts" => Some(StepId::Astronauts),
            "earth_weather" => Some(StepId::EarthWeather),
            "mars_weather" => Some(StepId::MarsWeather),
            "apod" => Some(StepId::Apod),
            "neo_feed" => Some(StepId::NeoFeed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: every fetch step's name parses back to the same step.
    #[test]
    fn labels_roundtrip_for_fetch_steps() {
        for step in [
            StepId::IssPosition,
            StepId::Astronauts,
            StepId::EarthWeather,
            StepId::MarsWeather,
            StepId::Apod,
            StepId::NeoFeed,
        ] {
            assert_eq!(StepId::from_label(step.as_str()), Some(step));
        }
    }

    /// **Scenario**: labels are accepted case-insensitively and trimmed.
    #[test]
    fn from_label_normalizes_case_and_whitespace() {
        assert_eq!(
            StepId::from_label("  ISS_Position "),
            Some(StepId::IssPosition)
        );
        assert_eq!(StepId::from_label("APOD"), Some(StepId::Apod));
    }

    /// **Scenario**: unknown labels and the terminal name map to nothing.
    #[test]
    fn from_label_rejects_unknown_and_terminal() {
        assert_eq!(StepId::from_label("warp_drive"), None);
        assert_eq!(StepId::from_label(""), None);
        assert_eq!(StepId::from_label("compose"), None);
    }
}
