//! Read-side access to persisted monthly artifacts, for consumers that
//! render calendars or look up individual races, plus the cache-or-scrape
//! entry point that ties the store to the scraper.

use crate::error::{Result, StoreError};
use crate::export;
use crate::model::{MonthlyReport, RaceRecord, ScrapeTotals};
use crate::monthly::MonthlyScraper;
use chrono::NaiveDate;
use serde_derive::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Per-day race totals for calendar rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub races: usize,
    pub has_data: bool,
}

/// A month with a persisted complete-JSON artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableMonth {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
}

/// Loads a month's report from its complete-JSON artifact. A missing file
/// is not an error; a file that exists but does not decode is.
pub fn load_month(
    data_dir: &Path,
    year: i32,
    month: u32,
) -> Result<Option<MonthlyReport>, StoreError> {
    let path = export::complete_json_path(data_dir, year, month);
    if !path.exists() {
        return Ok(None);
    }
    let report = read_report(&path)?;
    Ok(Some(report))
}

/// Returns the cached month if one is persisted, otherwise scrapes it and
/// persists the result. A failed save is logged and the freshly scraped
/// report is still returned.
pub async fn load_or_scrape(
    scraper: &MonthlyScraper,
    data_dir: &Path,
    year: i32,
    month: u32,
    totals: &mut ScrapeTotals,
) -> Result<MonthlyReport> {
    if let Some(report) = load_month(data_dir, year, month)? {
        info!("Using cached data for {}-{:02}", year, month);
        return Ok(report);
    }

    info!("No cached data for {}-{:02}, scraping", year, month);
    let report = scraper.scrape_month(year, month, None, None, totals).await?;
    if let Err(err) = export::save_monthly_report(&report, data_dir) {
        error!("Failed to persist {}-{:02}: {}", year, month, err);
    }
    Ok(report)
}

/// Race totals for every day of a report, in day order.
pub fn calendar_counts(report: &MonthlyReport) -> Vec<CalendarDay> {
    report
        .data
        .iter()
        .map(|day| {
            let races = day.race_total();
            CalendarDay {
                date: day.date.clone(),
                races,
                has_data: races > 0,
            }
        })
        .collect()
}

/// Looks up one race by venue-day date and the race number printed on the
/// card. The pair is not globally unique across venues; the first match in
/// scrape order wins.
pub fn find_race(
    data_dir: &Path,
    date: &str,
    race_number: &str,
) -> Result<Option<RaceRecord>, StoreError> {
    for path in complete_json_files(data_dir)? {
        let report = read_report(&path)?;
        for day in &report.data {
            for venue_day in &day.venues {
                if venue_day.date != date {
                    continue;
                }
                for race in &venue_day.races {
                    if race.race_number == race_number {
                        return Ok(Some(race.clone()));
                    }
                }
            }
        }
    }
    Ok(None)
}

/// Every month with a persisted artifact, newest first.
pub fn available_months(data_dir: &Path) -> Result<Vec<AvailableMonth>, StoreError> {
    let mut months = Vec::new();
    for path in complete_json_files(data_dir)? {
        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let (year, month) = match export::parse_complete_json_name(name) {
            Some(parsed) => parsed,
            None => continue,
        };
        // A filename naming an impossible month is junk, not data.
        let first = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first) => first,
            None => continue,
        };
        months.push(AvailableMonth {
            year,
            month,
            month_name: first.format("%B %Y").to_string(),
        });
    }
    months.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
    Ok(months)
}

fn read_report(path: &Path) -> Result<MonthlyReport, StoreError> {
    let raw = fs::read_to_string(path).map_err(|err| StoreError::read(path, err))?;
    serde_json::from_str(&raw).map_err(|err| StoreError::decode(path, err))
}

fn complete_json_files(data_dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let mut files = Vec::new();
    if !data_dir.exists() {
        return Ok(files);
    }
    let entries = fs::read_dir(data_dir).map_err(|err| StoreError::read(data_dir, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| StoreError::read(data_dir, err))?;
        let path = entry.path();
        let is_artifact = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(export::parse_complete_json_name)
            .is_some();
        if is_artifact {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
