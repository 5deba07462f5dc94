//! Retrying HTTP GET: the one idiom shared by every external fetcher.
//!
//! Transport failures (connect, DNS, timeout, non-2xx status) are retried
//! with a fixed pause up to the policy's attempt ceiling. A 2xx body that is
//! not valid JSON is not retried: the service answered, it just answered
//! badly, and the caller degrades to its documented defaults or an error
//! record instead.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::retry::RetryPolicy;

/// Failure of one retried GET.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt failed at the transport level.
    #[error("request failed after {attempts} attempts: {last}")]
    Exhausted {
        /// How many tries were made.
        attempts: usize,
        /// Text of the last transport error.
        last: String,
    },

    /// The response body was not valid JSON.
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

/// GET `url` with `query`, returning the parsed JSON body.
///
/// Retries per `policy`, with `timeout` applied to each attempt. A non-2xx
/// status counts as a transport failure and is retried like a connection
/// error. Decode failures return immediately without another attempt.
pub async fn get_json(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
    policy: &RetryPolicy,
    timeout: Duration,
) -> Result<serde_json::Value, FetchError> {
    let attempts = policy.attempts();
    let mut last = String::new();
    for attempt in 1..=attempts {
        let sent = client
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await
            .and_then(|res| res.error_for_status());
        match sent {
            Ok(res) => {
                return res
                    .json::<serde_json::Value>()
                    .await
                    .map_err(|e| FetchError::Decode(e.to_string()));
            }
            Err(e) => {
                warn!(url, attempt, error = %e, "request attempt failed");
                last = e.to_string();
                if attempt < attempts {
                    tokio::time::sleep(policy.delay()).await;
                }
            }
        }
    }
    Err(FetchError::Exhausted { attempts, last })
}
