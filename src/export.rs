//! Writes the four monthly artifacts: the complete JSON report, the
//! flattened race list, the per-horse CSV and the text summary.
//!
//! Artifact writes are independent: one failing does not stop the others,
//! and the caller gets a single error naming everything that failed. Only a
//! missing output directory that cannot be created aborts the export.

use crate::error::{ExportError, Result};
use crate::model::{month_key, HorseEntry, MonthlyReport, RaceRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Filename prefix shared by every artifact.
const FILE_PREFIX: &str = "indiarace";

const COMPLETE_SUFFIX: &str = "_complete.json";

/// Fixed CSV layout, one row per (race, horse) pair. Consumers rely on the
/// column order.
const CSV_HEADER: [&str; 29] = [
    "Date",
    "Weekday",
    "Venue",
    "Race Number",
    "Title",
    "Class",
    "Distance",
    "Time",
    "Horse Number",
    "Draw",
    "Horse Name",
    "Ex-Name",
    "Pedigree",
    "Last 5 Runs",
    "Description",
    "Owner",
    "Trainer",
    "Jockey",
    "Weight",
    "AL",
    "SH",
    "EQ",
    "Rating",
    "Penalty",
    "Prize Winner",
    "Prize Second",
    "Prize Third",
    "Prize Fourth",
    "Prize Total",
];

fn artifact_path(output_dir: &Path, month: &str, suffix: &str) -> PathBuf {
    output_dir.join(format!("{}_{}{}", FILE_PREFIX, month, suffix))
}

/// Path of the complete-JSON artifact for a month.
pub fn complete_json_path(output_dir: &Path, year: i32, month: u32) -> PathBuf {
    artifact_path(output_dir, &month_key(year, month), COMPLETE_SUFFIX)
}

/// Recovers (year, month) from a complete-JSON artifact filename.
pub fn parse_complete_json_name(name: &str) -> Option<(i32, u32)> {
    let key = name
        .strip_prefix(FILE_PREFIX)?
        .strip_prefix('_')?
        .strip_suffix(COMPLETE_SUFFIX)?;
    let (year, month) = key.split_once('-')?;
    Some((year.parse().ok()?, month.parse().ok()?))
}

/// Writes all four artifacts for the report, attempting every one even when
/// an earlier write fails.
pub fn save_monthly_report(report: &MonthlyReport, output_dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(output_dir).map_err(|err| ExportError::create_dir(output_dir, err))?;

    let writes: [(&'static str, Result<PathBuf, ExportError>); 4] = [
        ("complete", write_complete_json(report, output_dir)),
        ("races", write_races_json(report, output_dir)),
        ("csv", write_csv(report, output_dir)),
        ("summary", write_summary(report, output_dir)),
    ];

    let mut failures = Vec::new();
    for (artifact, result) in writes {
        match result {
            Ok(path) => info!("Saved {} data to {}", artifact, path.display()),
            Err(err) => {
                error!("Failed to save {} data: {}", artifact, err);
                failures.push(artifact);
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ExportError::partial(&failures, 4))
    }
}

/// The full nested report, pretty-printed.
pub fn write_complete_json(
    report: &MonthlyReport,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = artifact_path(output_dir, &report.month, COMPLETE_SUFFIX);
    let json = serde_json::to_string_pretty(report)
        .map_err(|err| ExportError::artifact("complete JSON", &path, err))?;
    fs::write(&path, json).map_err(|err| ExportError::artifact("complete JSON", &path, err))?;
    Ok(path)
}

/// Every race as a flat list, day and venue nesting stripped.
pub fn write_races_json(report: &MonthlyReport, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = artifact_path(output_dir, &report.month, "_races.json");
    let races: Vec<&RaceRecord> = report.all_races().collect();
    let json = serde_json::to_string_pretty(&races)
        .map_err(|err| ExportError::artifact("races JSON", &path, err))?;
    fs::write(&path, json).map_err(|err| ExportError::artifact("races JSON", &path, err))?;
    Ok(path)
}

/// One CSV row per horse, races without horses contributing nothing.
pub fn write_csv(report: &MonthlyReport, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = artifact_path(output_dir, &report.month, ".csv");
    let mut writer =
        csv::Writer::from_path(&path).map_err(|err| ExportError::artifact("CSV", &path, err))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|err| ExportError::artifact("CSV", &path, err))?;
    for race in report.all_races() {
        for horse in &race.horses {
            writer
                .write_record(csv_row(race, horse))
                .map_err(|err| ExportError::artifact("CSV", &path, err))?;
        }
    }
    writer
        .flush()
        .map_err(|err| ExportError::artifact("CSV", &path, err))?;
    Ok(path)
}

fn csv_row(race: &RaceRecord, horse: &HorseEntry) -> Vec<String> {
    let opt = |value: &Option<String>| value.clone().unwrap_or_default();
    let (winner, second, third, fourth, total) = match &race.prizes {
        Some(prizes) => (
            prizes.winner.clone(),
            prizes.second.clone(),
            prizes.third.clone(),
            prizes.fourth.clone(),
            prizes.total.clone(),
        ),
        None => Default::default(),
    };

    vec![
        race.date.clone(),
        // The weekday column carries the date string; the layout is fixed.
        race.date.clone(),
        race.venue.clone(),
        race.race_number.clone(),
        race.title.clone(),
        race.race_class.clone(),
        race.distance.clone(),
        race.time.clone(),
        horse.number.clone(),
        opt(&horse.draw),
        horse.name.clone(),
        opt(&horse.ex_name),
        horse.pedigree.clone(),
        opt(&horse.last_five_runs),
        horse.description.clone(),
        horse.owner.clone(),
        horse.trainer.clone(),
        horse.jockey.clone(),
        horse.weight.clone(),
        horse.equipment.al.clone(),
        horse.equipment.sh.clone(),
        horse.equipment.eq.clone(),
        horse.rating.clone(),
        opt(&horse.penalty),
        winner,
        second,
        third,
        fourth,
        total,
    ]
}

/// Human-readable totals plus a per-day race count breakdown.
pub fn write_summary(report: &MonthlyReport, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = artifact_path(output_dir, &report.month, "_summary.txt");

    let mut out = String::new();
    out.push_str("INDIARACE MONTHLY SCRAPING SUMMARY\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");
    out.push_str(&format!("Month: {}\n", report.month_name));
    out.push_str(&format!("Total Days: {}\n", report.total_days));
    out.push_str(&format!(
        "Venues Scraped: {}\n",
        report.venues_scraped.join(", ")
    ));
    out.push_str(&format!("Race Types: {}\n", report.race_types.join(", ")));
    out.push_str(&format!("Total Races Found: {}\n", report.total_races));
    out.push_str(&format!("Total Horses Found: {}\n", report.total_horses));
    out.push_str(&format!("Failed Requests: {}\n\n", report.failed_requests));
    out.push_str("DAILY BREAKDOWN:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');
    for day in &report.data {
        out.push_str(&format!(
            "{} ({}): {} races\n",
            day.date,
            day.weekday,
            day.race_total()
        ));
    }

    fs::write(&path, out).map_err(|err| ExportError::artifact("summary", &path, err))?;
    Ok(path)
}
