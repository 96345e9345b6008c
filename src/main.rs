//! Monthly race-data scraper for indiarace.com
//!
//! This application walks every day of a target month across the configured
//! race venues, pulls the racing-center page for each venue and day, and
//! extracts structured race and runner data from the markup.
//!
//! # Behavior
//!
//! - One strictly sequential pass over the month, venue by venue
//! - Transient fetch failures are retried with exponential backoff
//! - Exhausted fetches are counted, never fatal; only an impossible
//!   target month aborts the run
//! - The finished month is written out as JSON, CSV and a text summary

mod config;
mod error;
mod export;
mod indiarace;
mod model;
mod monthly;
mod store;

#[cfg(test)]
mod test_utils;

use crate::indiarace::{Client, Fetcher, RetryPolicy};
use crate::model::{MonthlyReport, ScrapeTotals};
use crate::monthly::MonthlyScraper;
use std::path::Path;

/// Application entry point.
///
/// Loads configuration from the environment, scrapes the target month and
/// saves the artifacts to the output directory.
#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let site_config = config::load_indiarace_config().expect("Failed to load IndiaraceConfig");
    let scraper_config = config::load_scraper_config().expect("Failed to load ScraperConfig");
    let job_config = config::load_job_config().expect("Failed to load JobConfig");

    let base = site_config.base().expect("Invalid INDIARACE_BASE_URL");
    let client = Client::new(site_config).expect("Failed to build HTTP client");
    let fetcher = Fetcher::new(
        client,
        RetryPolicy {
            max_attempts: scraper_config.max_attempts,
            base_delay: scraper_config.backoff_base(),
        },
    );
    let scraper = MonthlyScraper::new(fetcher, base, scraper_config.rate_limit());

    let (year, month) = job_config.target_month();
    tracing::info!("Scraping indiarace.com for {}-{:02}", year, month);

    let mut totals = ScrapeTotals::default();
    let report = match scraper
        .scrape_month(year, month, None, None, &mut totals)
        .await
    {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Scrape aborted: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = export::save_monthly_report(&report, Path::new(&job_config.output_dir)) {
        tracing::error!("Failed to save month artifacts: {}", e);
    }

    log_final_stats(&report);
}

/// Logs the closing summary for a finished month.
fn log_final_stats(report: &MonthlyReport) {
    let attempted = u64::from(report.total_days) * report.venues_scraped.len() as u64;
    tracing::info!("Finished scraping {}", report.month_name);
    tracing::info!(
        "{} races and {} horses across {} days, {} failed requests ({:.1}% of venue-days succeeded)",
        report.total_races,
        report.total_horses,
        report.total_days,
        report.failed_requests,
        success_rate(attempted, report.failed_requests),
    );
}

/// Share of venue-day fetches that did not exhaust their retries, as a
/// percentage. Zero attempts count as zero percent.
fn success_rate(attempted: u64, failed: u64) -> f64 {
    if attempted == 0 {
        return 0.0;
    }
    attempted.saturating_sub(failed) as f64 / attempted as f64 * 100.0
}
