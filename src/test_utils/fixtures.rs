//! Model constructors with realistic values for tests.

use crate::model::{
    month_key, DayAggregate, Equipment, HorseEntry, MonthlyReport, PrizeMoney, RaceRecord,
    TrackRecord, Venue, VenueDayResult,
};
use chrono::NaiveDate;

/// A fully populated runner.
pub fn horse(number: &str) -> HorseEntry {
    HorseEntry {
        number: number.to_string(),
        draw: Some("3".to_string()),
        silk: Some(format!("/images/silks/{}.png", number)),
        name: format!("RUNNER {}", number),
        link: Some(format!("https://www.indiarace.com/horse/{}", number)),
        ex_name: None,
        pedigree: "Bay gelding by Sire out of Dam".to_string(),
        last_five_runs: Some("1-2-3".to_string()),
        description: "Consistent sort".to_string(),
        owner: "Mr Test Owner".to_string(),
        trainer: "A Trainer".to_string(),
        trainer_link: Some("https://www.indiarace.com/trainer/45".to_string()),
        jockey: "B Jockey".to_string(),
        jockey_link: Some("https://www.indiarace.com/jockey/89".to_string()),
        weight: "56.5".to_string(),
        equipment: Equipment {
            al: "--".to_string(),
            sh: "S".to_string(),
            eq: "B".to_string(),
        },
        rating: "62".to_string(),
        penalty: None,
    }
}

/// The standard five-place prize breakdown.
pub fn prize_money() -> PrizeMoney {
    PrizeMoney {
        winner: "10,00,000".to_string(),
        second: "3,00,000".to_string(),
        third: "1,50,000".to_string(),
        fourth: "75,000".to_string(),
        total: "15,25,000".to_string(),
    }
}

/// A race without prizes or record, carrying `horse_count` runners.
pub fn race(venue: Venue, date: &str, number: &str, horse_count: usize) -> RaceRecord {
    RaceRecord {
        race_number: number.to_string(),
        title: format!("THE TEST PLATE {}", number),
        race_class: "Class IV".to_string(),
        distance: "1200M".to_string(),
        time: "14:30".to_string(),
        venue: venue.name().to_string(),
        venue_id: venue.id(),
        date: date.to_string(),
        prizes: None,
        record: None,
        horses: (1..=horse_count).map(|i| horse(&i.to_string())).collect(),
    }
}

/// A venue-day with `races` races numbered from 1, each carrying
/// `horses_per_race` runners.
pub fn venue_day(
    venue: Venue,
    date: &str,
    races: usize,
    horses_per_race: usize,
) -> VenueDayResult {
    let races: Vec<RaceRecord> = (1..=races)
        .map(|number| race(venue, date, &number.to_string(), horses_per_race))
        .collect();
    let race_count = races.len();
    VenueDayResult {
        venue: venue.name().to_string(),
        venue_id: venue.id(),
        date: date.to_string(),
        races,
        race_count,
    }
}

/// A small but complete report for the given month: day one has a Bangalore
/// card of two races (the first with prizes and a track record, three
/// runners between them), day two has no racing.
pub fn monthly_report(year: i32, month: u32) -> MonthlyReport {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let second = first.succ_opt().unwrap();
    let first_str = first.format("%Y-%m-%d").to_string();

    let mut featured = race(Venue::Bangalore, &first_str, "1", 2);
    featured.prizes = Some(prize_money());
    featured.record = Some(TrackRecord {
        date: "12-03-2023".to_string(),
        details: "1:09.65".to_string(),
    });
    let supporting = race(Venue::Bangalore, &first_str, "2", 1);

    let racing_day = VenueDayResult {
        venue: Venue::Bangalore.name().to_string(),
        venue_id: Venue::Bangalore.id(),
        date: first_str.clone(),
        races: vec![featured, supporting],
        race_count: 2,
    };

    MonthlyReport {
        month: month_key(year, month),
        month_name: first.format("%B %Y").to_string(),
        total_days: 2,
        venues_scraped: vec![Venue::Bangalore.name().to_string()],
        race_types: vec!["RACECARD".to_string()],
        total_races: 2,
        total_horses: 3,
        failed_requests: 0,
        data: vec![
            DayAggregate {
                date: first_str,
                weekday: first.format("%A").to_string(),
                venues: vec![racing_day],
            },
            DayAggregate {
                date: second.format("%Y-%m-%d").to_string(),
                weekday: second.format("%A").to_string(),
                venues: Vec::new(),
            },
        ],
    }
}
