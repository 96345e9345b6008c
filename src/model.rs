//! Domain model for indiarace race data.
//!
//! The structs mirror the shape of the persisted JSON artifacts: a
//! [`MonthlyReport`] holds one [`DayAggregate`] per calendar day, each day
//! holds the venues that actually raced, and each venue-day holds its races
//! with their runners. Optional fields are `Option` so absent data
//! serializes as an omitted key where the artifact format requires it.

use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of racing venues served by indiarace.com.
///
/// The ids are the site's own `venueId` query values. Reference data, not
/// extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Mumbai,
    Kolkata,
    Bangalore,
    Hyderabad,
    Pune,
    Mysore,
    Delhi,
    Ooty,
    Chennai,
}

impl Venue {
    /// Every venue in ascending id order; the default scraping set.
    pub const ALL: [Venue; 9] = [
        Venue::Mumbai,
        Venue::Kolkata,
        Venue::Bangalore,
        Venue::Hyderabad,
        Venue::Pune,
        Venue::Mysore,
        Venue::Delhi,
        Venue::Ooty,
        Venue::Chennai,
    ];

    pub fn id(self) -> u32 {
        match self {
            Venue::Mumbai => 1,
            Venue::Kolkata => 2,
            Venue::Bangalore => 3,
            Venue::Hyderabad => 4,
            Venue::Pune => 5,
            Venue::Mysore => 6,
            Venue::Delhi => 7,
            Venue::Ooty => 8,
            Venue::Chennai => 9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Venue::Mumbai => "Mumbai",
            Venue::Kolkata => "Kolkata",
            Venue::Bangalore => "Bangalore",
            Venue::Hyderabad => "Hyderabad",
            Venue::Pune => "Pune",
            Venue::Mysore => "Mysore",
            Venue::Delhi => "Delhi",
            Venue::Ooty => "Ooty",
            Venue::Chennai => "Chennai",
        }
    }

    pub fn from_id(id: u32) -> Option<Venue> {
        Venue::ALL.into_iter().find(|venue| venue.id() == id)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which view of a day's racing to request from the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceType {
    Racecard,
    Results,
}

impl RaceType {
    /// The race types tried when the caller does not pick any.
    pub const DEFAULT: [RaceType; 1] = [RaceType::Racecard];

    /// The site's `race_type` query value.
    pub fn token(self) -> &'static str {
        match self {
            RaceType::Racecard => "RACECARD",
            RaceType::Results => "RESULTS",
        }
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Canonical `YYYY-MM` key used in report fields and artifact filenames.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}

/// Prize-money breakdown for one race, amounts kept as printed (comma
/// grouping included). All-or-nothing: a race either has the full breakdown
/// or no prize object at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeMoney {
    pub winner: String,
    pub second: String,
    pub third: String,
    pub fourth: String,
    pub total: String,
}

/// Track record annotation shown under a race heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub date: String,
    pub details: String,
}

/// Gear codes printed for a runner: blinkers, shoe type, other equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub al: String,
    pub sh: String,
    pub eq: String,
}

/// One runner on a race card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorseEntry {
    pub number: String,
    pub draw: Option<String>,
    /// Silk image source as found in the markup, not resolved.
    pub silk: Option<String>,
    pub name: String,
    /// Absolute profile URL for the horse.
    pub link: Option<String>,
    pub ex_name: Option<String>,
    pub pedigree: String,
    #[serde(rename = "last_5_runs")]
    pub last_five_runs: Option<String>,
    pub description: String,
    pub owner: String,
    pub trainer: String,
    pub trainer_link: Option<String>,
    pub jockey: String,
    pub jockey_link: Option<String>,
    pub weight: String,
    pub equipment: Equipment,
    pub rating: String,
    /// Only present when the rating cell carried a superscript penalty.
    pub penalty: Option<String>,
}

/// One race on a venue's card for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceRecord {
    pub race_number: String,
    pub title: String,
    #[serde(rename = "class")]
    pub race_class: String,
    pub distance: String,
    pub time: String,
    pub venue: String,
    pub venue_id: u32,
    /// Venue-day date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prizes: Option<PrizeMoney>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub record: Option<TrackRecord>,
    pub horses: Vec<HorseEntry>,
}

/// Everything one venue ran on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDayResult {
    pub venue: String,
    pub venue_id: u32,
    pub date: String,
    pub races: Vec<RaceRecord>,
    pub race_count: usize,
}

/// One calendar day of the month, with the venues that returned data.
/// Days without racing anywhere still get an aggregate with no venues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAggregate {
    pub date: String,
    pub weekday: String,
    pub venues: Vec<VenueDayResult>,
}

impl DayAggregate {
    /// Total races across every venue on this day.
    pub fn race_total(&self) -> usize {
        self.venues.iter().map(|venue| venue.race_count).sum()
    }
}

/// The complete output of a monthly scrape, as persisted to the
/// `*_complete.json` artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// `YYYY-MM`.
    pub month: String,
    /// Human-readable, e.g. "February 2024".
    pub month_name: String,
    pub total_days: u32,
    pub venues_scraped: Vec<String>,
    pub race_types: Vec<String>,
    pub total_races: u64,
    pub total_horses: u64,
    pub failed_requests: u64,
    pub data: Vec<DayAggregate>,
}

impl MonthlyReport {
    /// Every race across all days and venues, in scrape order.
    pub fn all_races(&self) -> impl Iterator<Item = &RaceRecord> {
        self.data
            .iter()
            .flat_map(|day| day.venues.iter())
            .flat_map(|venue| venue.races.iter())
    }
}

/// Running counters for a scraping session.
///
/// The caller owns the accumulator and threads it through `scrape_month`:
/// reusing one across calls keeps session-lifetime totals, passing a fresh
/// one gives per-month totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeTotals {
    pub races: u64,
    pub horses: u64,
    pub failed_requests: u64,
}

impl ScrapeTotals {
    /// Folds one venue-day result into the counters.
    pub fn record_day(&mut self, day: &VenueDayResult) {
        self.races += day.races.len() as u64;
        self.horses += day
            .races
            .iter()
            .map(|race| race.horses.len() as u64)
            .sum::<u64>();
    }

    /// Counts one venue-day request whose every retry failed.
    pub fn record_failed_request(&mut self) {
        self.failed_requests += 1;
    }
}
