//! External data fetchers, one module per source.
//!
//! Every fetcher follows the same contract: one GET through
//! [`fetch::get_json`](crate::fetch::get_json), then a pure shaper mapping
//! the JSON body into the source's record. Absent optional fields become
//! documented defaults; an absent required field makes the whole response
//! count as malformed. A fetcher only ever fails with a
//! [`SourceError`](crate::report::SourceError), so the pipeline can store
//! the outcome and move on.

pub mod apod;
pub mod astronauts;
pub mod earth_weather;
pub mod iss;
pub mod mars_weather;
pub mod neo;
