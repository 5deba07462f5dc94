//! Per-question state flowing through the pipeline.

use serde::{Deserialize, Serialize};

use crate::report::{
    ApodReport, AstronautReport, EarthWeatherReport, IssReport, MarsWeatherReport, NeoReport,
    SourceResult,
};

/// State for one question, created fresh per run and dropped after the
/// answer is composed.
///
/// Each fetch step takes the state by value and returns the updated value;
/// nothing is shared between questions or between concurrent runs. A `None`
/// slot means the source was never consulted; a `Some` slot holds either the
/// full record or the error record, never anything in between.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryState {
    /// The user's question, verbatim.
    pub question: String,
    /// Location extracted by classification, when the question names one.
    pub location: Option<String>,
    /// Weather was asked for the ISS's current position; the weather step
    /// reads coordinates from the `iss` slot instead of `location`.
    pub weather_at_iss: bool,
    pub iss: Option<SourceResult<IssReport>>,
    pub astronauts: Option<SourceResult<AstronautReport>>,
    pub earth_weather: Option<SourceResult<EarthWeatherReport>>,
    pub mars_weather: Option<SourceResult<MarsWeatherReport>>,
    pub apod: Option<SourceResult<ApodReport>>,
    pub neo: Option<SourceResult<NeoReport>>,
}

impl QueryState {
    /// Fresh state for one question.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }
}
