//! Pattern extraction for page fragments that pack several values into one
//! text blob. Each function matches one fixed pattern and returns a
//! structured result, or nothing when the pattern misses; there are no
//! partial fills.

use crate::model::{PrizeMoney, TrackRecord};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Five comma-grouped amounts: winner, second, third, fourth, total.
    static ref PRIZE_PATTERN: Regex = Regex::new(
        r"Winner:₹\.([\d,]+)\s+Second:₹\.([\d,]+)\s+Third:₹\.([\d,]+)\s+Fourth:₹\.([\d,]+)\s+Total:₹\.([\d,]+)"
    )
    .expect("Failed to compile PRIZE_PATTERN regex");

    /// Date then detail text. The first group is greedy, so the split lands
    /// on the last space of the annotation.
    static ref RECORD_PATTERN: Regex =
        Regex::new(r"Record Time : (.+) (.+)").expect("Failed to compile RECORD_PATTERN regex");

    /// Superscript penalty wrapped around the plain rating digits.
    static ref RATING_PATTERN: Regex = Regex::new(r"<sup><small>(\d+)</small></sup>(\d+)")
        .expect("Failed to compile RATING_PATTERN regex");
}

/// A rating cell that carried a superscript penalty annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingPenalty {
    pub rating: String,
    pub penalty: String,
}

/// Parses a prize line into its five amounts, kept as printed.
pub fn parse_prize_money(text: &str) -> Option<PrizeMoney> {
    let caps = PRIZE_PATTERN.captures(text)?;
    Some(PrizeMoney {
        winner: caps[1].to_string(),
        second: caps[2].to_string(),
        third: caps[3].to_string(),
        fourth: caps[4].to_string(),
        total: caps[5].to_string(),
    })
}

/// Parses a track-record annotation into date and detail.
pub fn parse_track_record(text: &str) -> Option<TrackRecord> {
    let caps = RECORD_PATTERN.captures(text)?;
    Some(TrackRecord {
        date: caps[1].to_string(),
        details: caps[2].to_string(),
    })
}

/// Splits a rating cell's markup into rating and penalty. The penalty sits
/// in the superscript, the rating follows it in the plain text.
pub fn split_rating_cell(cell_html: &str) -> Option<RatingPenalty> {
    let caps = RATING_PATTERN.captures(cell_html)?;
    Some(RatingPenalty {
        rating: caps[2].to_string(),
        penalty: caps[1].to_string(),
    })
}
