use crate::config::IndiaraceConfig;
use crate::error::FetchError;
use crate::model::{RaceType, Venue};
use chrono::NaiveDate;
use reqwest::Client as HttpClient;

/// Path of the race-day endpoint, relative to the site base.
const RACING_CENTER_PATH: &str = "/Home/racingCenterEvent";

/// Thin HTTP wrapper around the race-day endpoint. One request per call, no
/// retries; retry behavior lives in the fetcher.
pub struct Client {
    http_client: HttpClient,
    config: IndiaraceConfig,
}

impl Client {
    pub fn new(config: IndiaraceConfig) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Fetches the page for one venue, date and race type.
    pub async fn get_race_page(
        &self,
        venue: Venue,
        date: NaiveDate,
        race_type: RaceType,
    ) -> Result<String, FetchError> {
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            RACING_CENTER_PATH
        );
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("venueId", venue.id().to_string()),
                ("event_date", date.format("%Y-%m-%d").to_string()),
                ("race_type", race_type.token().to_string()),
            ])
            .header("user-agent", &self.config.user_agent)
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.text().await?;
            Ok(body)
        } else {
            Err(FetchError::status(response.status()))
        }
    }
}
