//! The month-long scraping loop.
//!
//! Walks every calendar day of the target month and every venue within the
//! day, strictly in sequence, and folds whatever each venue returned into
//! one report. Individual venue-day failures are counted, never fatal; the
//! only input that aborts a run is a month that does not exist.

use crate::error::{Error, Result};
use crate::indiarace::extractor;
use crate::indiarace::fetcher::{FetchOutcome, Fetcher};
use crate::model::{
    month_key, DayAggregate, MonthlyReport, RaceType, ScrapeTotals, Venue, VenueDayResult,
};
use chrono::{Datelike, NaiveDate};
use reqwest::Url;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Every day of the given month, in order. The only validation the scrape
/// needs: a (year, month) pair that yields no first day is rejected here,
/// before any request goes out.
pub(crate) fn month_days(year: i32, month: u32) -> Result<Vec<NaiveDate>> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidMonth { year, month })?;

    let mut days = Vec::with_capacity(31);
    let mut day = first;
    while day.month() == month {
        days.push(day);
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(days)
}

/// Drives one month of scraping through a [`Fetcher`].
pub struct MonthlyScraper {
    fetcher: Fetcher,
    /// Origin that relative profile links resolve against.
    base: Url,
    /// Pause after every venue-day attempt, success or not.
    rate_limit: Duration,
}

impl MonthlyScraper {
    pub fn new(fetcher: Fetcher, base: Url, rate_limit: Duration) -> Self {
        Self {
            fetcher,
            base,
            rate_limit,
        }
    }

    /// Scrapes every venue for every day of the month.
    ///
    /// `venues` and `race_types` default to all venues and the race card
    /// when not given. The caller owns `totals`; the counters accumulate
    /// across calls, and the report snapshots them as of the end of this
    /// month.
    pub async fn scrape_month(
        &self,
        year: i32,
        month: u32,
        venues: Option<&[Venue]>,
        race_types: Option<&[RaceType]>,
        totals: &mut ScrapeTotals,
    ) -> Result<MonthlyReport> {
        let days = month_days(year, month)?;
        let venues: Vec<Venue> = venues.unwrap_or(&Venue::ALL).to_vec();
        let race_types: Vec<RaceType> = race_types.unwrap_or(&RaceType::DEFAULT).to_vec();

        let month_name = days[0].format("%B %Y").to_string();
        info!(
            "Scraping {} across {} venues, {} days",
            month_name,
            venues.len(),
            days.len()
        );

        let mut data = Vec::with_capacity(days.len());
        for day in days {
            let mut aggregate = DayAggregate {
                date: day.format("%Y-%m-%d").to_string(),
                weekday: day.format("%A").to_string(),
                venues: Vec::new(),
            };
            info!("Scraping {} ({})", aggregate.date, aggregate.weekday);

            for &venue in &venues {
                if let Some(result) = self.scrape_venue_day(venue, day, &race_types, totals).await
                {
                    totals.record_day(&result);
                    aggregate.venues.push(result);
                }
                sleep(self.rate_limit).await;
            }

            data.push(aggregate);
        }

        Ok(MonthlyReport {
            month: month_key(year, month),
            month_name,
            total_days: data.len() as u32,
            venues_scraped: venues.iter().map(|venue| venue.name().to_string()).collect(),
            race_types: race_types
                .iter()
                .map(|race_type| race_type.token().to_string())
                .collect(),
            total_races: totals.races,
            total_horses: totals.horses,
            failed_requests: totals.failed_requests,
            data,
        })
    }

    /// One venue on one day: tries the requested race types in order and
    /// keeps the first one that yields data. An explicit no-races answer
    /// settles the day for this venue, so remaining types are not tried. A
    /// fetch whose retries are exhausted is counted and the next type still
    /// gets its chance.
    async fn scrape_venue_day(
        &self,
        venue: Venue,
        day: NaiveDate,
        race_types: &[RaceType],
        totals: &mut ScrapeTotals,
    ) -> Option<VenueDayResult> {
        for &race_type in race_types {
            match self.fetcher.fetch_race_day(venue, day, race_type).await {
                Ok(FetchOutcome::Body(html)) => {
                    match extractor::parse_race_day(&html, venue, day, &self.base) {
                        Some(result) => {
                            info!("{} on {}: found {} races", venue, day, result.race_count);
                            return Some(result);
                        }
                        None => {
                            debug!(
                                "{} on {} ({}): page had no race sections",
                                venue, day, race_type
                            );
                        }
                    }
                }
                Ok(FetchOutcome::NoRaces) => {
                    debug!("{} on {}: no races scheduled", venue, day);
                    return None;
                }
                Err(err) => {
                    totals.record_failed_request();
                    warn!("{} on {} ({}): {}", venue, day, race_type, err);
                }
            }
        }
        None
    }
}
