//! Tool-result records: one fixed-shape type per external data source.
//!
//! A slot in the state holds either a fully populated record or a
//! [`SourceError`]; nothing partially filled reaches composition. Error text
//! is curated here so it is safe to show a user: transport detail stays in
//! the logs (`fetch` warns per attempt), never in these messages.
//!
//! Every record implements `Display`, rendering the one digest line the
//! composer feeds to the model and surfaces in the reply breakdown.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fetch::FetchError;

/// Result of one external-data fetch.
pub type SourceResult<T> = Result<T, SourceError>;

/// The closed set of external data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    IssPosition,
    Astronauts,
    EarthWeather,
    MarsWeather,
    Apod,
    NeoFeed,
}

impl SourceKind {
    /// Human label used in digest lines and failure sentences.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::IssPosition => "ISS position",
            SourceKind::Astronauts => "astronaut roster",
            SourceKind::EarthWeather => "Earth weather",
            SourceKind::MarsWeather => "Mars weather",
            SourceKind::Apod => "astronomy picture of the day",
            SourceKind::NeoFeed => "near-Earth object",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a source produced no record.
///
/// The `Display` text of every variant is user-safe by construction; it names
/// the source and what went wrong, never the transport detail underneath.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SourceError {
    /// The service stayed unreachable through every retry.
    #[error("could not reach the {kind} source after {attempts} attempts")]
    Unreachable { kind: SourceKind, attempts: usize },

    /// The service answered with a shape we do not understand.
    #[error("the {kind} source returned an unexpected response")]
    Malformed { kind: SourceKind },

    /// The service answered but has nothing current to report.
    #[error("the {kind} source has no current data")]
    Empty { kind: SourceKind },

    /// A required input was missing; no request was made.
    #[error("{reason}")]
    MissingInput { kind: SourceKind, reason: String },
}

impl SourceError {
    /// Which source failed.
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceError::Unreachable { kind, .. }
            | SourceError::Malformed { kind }
            | SourceError::Empty { kind }
            | SourceError::MissingInput { kind, .. } => *kind,
        }
    }

    pub(crate) fn from_fetch(kind: SourceKind, err: FetchError) -> Self {
        match err {
            FetchError::Exhausted { attempts, .. } => SourceError::Unreachable { kind, attempts },
            FetchError::Decode(_) => SourceError::Malformed { kind },
        }
    }

    pub(crate) fn malformed(kind: SourceKind) -> Self {
        SourceError::Malformed { kind }
    }

    pub(crate) fn empty(kind: SourceKind) -> Self {
        SourceError::Empty { kind }
    }

    pub(crate) fn missing_input(kind: SourceKind, reason: impl Into<String>) -> Self {
        SourceError::MissingInput {
            kind,
            reason: reason.into(),
        }
    }
}

/// Current ISS ground position.
///
/// Coordinates stay the decimal-degree strings the service serves, so the
/// exact figures survive into the answer text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssReport {
    pub latitude: String,
    pub longitude: String,
}

impl fmt::Display for IssReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The ISS is currently at latitude {}, longitude {}.",
            self.latitude, self.longitude
        )
    }
}

/// One person currently in space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astronaut {
    pub name: String,
    /// Spacecraft or station the person is aboard; "Unknown" when unreported.
    pub craft: String,
}

/// Roster of everyone currently in space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AstronautReport {
    pub people: Vec<Astronaut>,
}

impl AstronautReport {
    pub fn count(&self) -> usize {
        self.people.len()
    }
}

impl fmt::Display for AstronautReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.people.is_empty() {
            return f.write_str("No astronauts are in space right now.");
        }
        let roster = self
            .people
            .iter()
            .map(|p| format!("{} (aboard {})", p.name, p.craft))
            .collect::<Vec<_>>()
            .join(", ");
        if self.people.len() == 1 {
            write!(f, "There is 1 person in space right now: {}.", roster)
        } else {
            write!(
                f,
                "There are {} people in space right now: {}.",
                self.people.len(),
                roster
            )
        }
    }
}

/// Current weather at one Earth location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthWeatherReport {
    /// Resolved place name; "Unknown" when the service omits it.
    pub location: String,
    pub country: String,
    pub temp_c: f64,
    pub condition: String,
}

impl fmt::Display for EarthWeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather in {}, {}: {}°C, {}.",
            self.location, self.country, self.temp_c, self.condition
        )
    }
}

/// Latest available Mars weather from the InSight lander.
///
/// The lander's channels come and go sol to sol, so the numeric readings and
/// UTC bounds are all optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarsWeatherReport {
    /// Sol (Martian day) the readings are for.
    pub sol: String,
    pub season: String,
    pub temperature_c: Option<f64>,
    pub pressure_pa: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    pub wind_direction: Option<String>,
    pub first_utc: Option<String>,
    pub last_utc: Option<String>,
}

impl fmt::Display for MarsWeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let temperature = self
            .temperature_c
            .map(|t| format!("{}°C", t))
            .unwrap_or_else(|| "unknown".to_string());
        let pressure = self
            .pressure_pa
            .map(|p| format!("{} Pa", p))
            .unwrap_or_else(|| "unknown".to_string());
        let wind = match (self.wind_speed_ms, self.wind_direction.as_deref()) {
            (Some(s), Some(d)) => format!("{} m/s from {}", s, d),
            (Some(s), None) => format!("{} m/s", s),
            (None, Some(d)) => format!("from {}", d),
            (None, None) => "unknown".to_string(),
        };
        write!(
            f,
            "Mars weather for sol {} ({}): average temperature {}, pressure {}, wind {}.",
            self.sol, self.season, temperature, pressure, wind
        )
    }
}

/// NASA Astronomy Picture of the Day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApodReport {
    pub title: String,
    pub date: String,
    pub explanation: String,
    /// Media URL; the one field a usable APOD response must carry.
    pub url: String,
    pub media_type: String,
}

impl fmt::Display for ApodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Astronomy Picture of the Day \"{}\" ({}): {} Media: {}",
            self.title, self.date, self.explanation, self.url
        )
    }
}

/// One asteroid approaching Earth today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    pub name: String,
    /// Estimated maximum diameter in meters.
    pub diameter_m: Option<f64>,
    /// Relative velocity in km/h at closest approach.
    pub velocity_kph: Option<f64>,
    /// Miss distance in km at closest approach.
    pub miss_distance_km: Option<f64>,
    pub hazardous: bool,
}

/// Today's closest near-Earth objects, nearest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoReport {
    /// Feed date, `YYYY-MM-DD`.
    pub date: String,
    pub objects: Vec<NearEarthObject>,
}

impl fmt::Display for NeoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.objects.is_empty() {
            return write!(f, "No near-Earth objects approach on {}.", self.date);
        }
        let entries = self
            .objects
            .iter()
            .map(|o| {
                let diameter = o
                    .diameter_m
                    .map(|d| format!("up to {:.0} m wide", d))
                    .unwrap_or_else(|| "size unknown".to_string());
                let speed = o
                    .velocity_kph
                    .map(|v| format!("travelling {:.0} km/h", v))
                    .unwrap_or_else(|| "speed unknown".to_string());
                let distance = o
                    .miss_distance_km
                    .map(|d| format!("missing Earth by {:.0} km", d))
                    .unwrap_or_else(|| "miss distance unknown".to_string());
                let hazard = if o.hazardous {
                    ", potentially hazardous"
                } else {
                    ""
                };
                format!("{} ({}, {}, {}{})", o.name, diameter, speed, distance, hazard)
            })
            .collect::<Vec<_>>()
            .join("; ");
        if self.objects.len() == 1 {
            write!(f, "1 near-Earth object approaches on {}: {}.", self.date, entries)
        } else {
            write!(
                f,
                "{} near-Earth objects approach on {}: {}.",
                self.objects.len(),
                self.date,
                entries
            )
        }
    }
}
