use crate::error::FetchError;
use crate::indiarace::client::Client;
use crate::model::{RaceType, Venue};
use chrono::NaiveDate;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Marker phrases the site embeds in an otherwise successful page when a
/// venue has no racing on the requested date.
const NO_RACES_MARKERS: [&str; 2] = ["No races found for this date", "No races scheduled"];

/// Bounded exponential backoff for fetch attempts. No jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first try included.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles for each attempt after.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay slept after failed attempt `attempt` (zero-based):
    /// `base_delay * 2^attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// A fetch that completed: either a page body worth parsing, or the site's
/// explicit statement that the venue has no races that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Body(String),
    NoRaces,
}

/// Retry wrapper over the [`Client`]. An `Err` here means every allowed
/// attempt failed; how that is accounted for is the caller's business.
pub struct Fetcher {
    client: Client,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Fetches one (venue, date, race type) page, retrying transient
    /// failures with exponential backoff.
    ///
    /// A body carrying a no-races marker is a valid empty result, not a
    /// failure, and is never retried.
    pub async fn fetch_race_day(
        &self,
        venue: Venue,
        date: NaiveDate,
        race_type: RaceType,
    ) -> Result<FetchOutcome, FetchError> {
        let mut last_err = None;
        for attempt in 0..self.policy.max_attempts {
            match self.client.get_race_page(venue, date, race_type).await {
                Ok(body) => {
                    if NO_RACES_MARKERS.iter().any(|marker| body.contains(marker)) {
                        return Ok(FetchOutcome::NoRaces);
                    }
                    return Ok(FetchOutcome::Body(body));
                }
                Err(err) => {
                    warn!(
                        "Attempt {} failed for {} on {}: {}",
                        attempt + 1,
                        venue,
                        date,
                        err
                    );
                    last_err = Some(err);
                    if attempt + 1 < self.policy.max_attempts {
                        sleep(self.policy.backoff(attempt)).await;
                    }
                }
            }
        }
        Err(FetchError::retries_exhausted(
            self.policy.max_attempts,
            last_err,
        ))
    }
}
