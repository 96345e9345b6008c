//! Markup extraction for race-day pages.
//!
//! Everything here is pure: the only inputs are the page markup and the
//! venue/date the caller requested, the only output is the structured
//! venue-day result. Malformed fragments degrade in place, placeholder
//! values fill header gaps, under-sized runner rows are skipped, and no
//! input markup ever makes these functions fail.

use crate::indiarace::patterns::{parse_prize_money, parse_track_record, split_rating_cell};
use crate::model::{Equipment, HorseEntry, RaceRecord, Venue, VenueDayResult};
use chrono::NaiveDate;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

/// Placeholder for header and name fields the page did not provide.
const UNKNOWN: &str = "Unknown";

/// Parses one race-day page into a venue-day result.
///
/// Returns `None` when the page contains no race sections at all. A page
/// whose sections are all malformed still yields a result, with an empty
/// race list.
pub fn parse_race_day(
    html: &str,
    venue: Venue,
    date: NaiveDate,
    base: &Url,
) -> Option<VenueDayResult> {
    let document = Html::parse_document(html);
    let sections = race_sections(&document);
    if sections.is_empty() {
        return None;
    }

    let date_str = date.format("%Y-%m-%d").to_string();
    let races: Vec<RaceRecord> = sections
        .into_iter()
        .filter_map(|section| parse_race_section(section, venue, &date_str, base))
        .collect();

    let race_count = races.len();
    Some(VenueDayResult {
        venue: venue.name().to_string(),
        venue_id: venue.id(),
        date: date_str,
        races,
        race_count,
    })
}

/// Race sections are divs whose id is `race-` followed by digits. The
/// prefix selector over-matches ids like `race-extra`, so the suffix is
/// checked explicitly.
fn race_sections(document: &Html) -> Vec<ElementRef<'_>> {
    let selector = match css_selector(r#"div[id^="race-"]"#) {
        Some(selector) => selector,
        None => return Vec::new(),
    };
    document
        .select(&selector)
        .filter(|element| {
            element
                .value()
                .attr("id")
                .and_then(|id| id.strip_prefix("race-"))
                .is_some_and(|suffix| {
                    !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
                })
        })
        .collect()
}

/// One section div into one race. A section without its heading block is
/// malformed and skipped; everything inside the heading degrades to
/// placeholders instead.
fn parse_race_section(
    section: ElementRef<'_>,
    venue: Venue,
    date: &str,
    base: &Url,
) -> Option<RaceRecord> {
    let header = select_first(section, "div.heading_div")?;

    let race_number = text_or_unknown(header, "div.side_num h1");
    let title = text_or_unknown(header, "div.center_heading h2");
    let race_class = text_or_unknown(header, "div.center_heading h3");

    let timing = select_all_text(header, "div.archive_time h4");
    let distance = timing
        .first()
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string());
    let time = timing
        .get(1)
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string());

    let prizes = select_text(section, "div.winner_amount p.winner_content")
        .and_then(|text| parse_prize_money(&text));
    let record =
        select_text(section, "div.record_time").and_then(|text| parse_track_record(&text));

    Some(RaceRecord {
        race_number,
        title,
        race_class,
        distance,
        time,
        venue: venue.name().to_string(),
        venue_id: venue.id(),
        date: date.to_string(),
        prizes,
        record,
        horses: parse_horse_table(section, base),
    })
}

fn parse_horse_table(section: ElementRef<'_>, base: &Url) -> Vec<HorseEntry> {
    let table = match select_first(section, "table.race_card_tab") {
        Some(table) => table,
        None => return Vec::new(),
    };
    select_all(table, "tbody tr")
        .into_iter()
        .filter_map(|row| parse_horse_row(row, base))
        .collect()
}

/// One `<tr>` into one runner. Rows with fewer than twelve cells are
/// malformed and skipped; the rest of the table still parses.
fn parse_horse_row(row: ElementRef<'_>, base: &Url) -> Option<HorseEntry> {
    let cells = select_all(row, "td");
    if cells.len() < 12 {
        return None;
    }

    let number = direct_text(cells[0]).unwrap_or_else(|| UNKNOWN.to_string());
    let draw = select_text(cells[0], "span");

    // Silk images stay as found in the markup; only profile links resolve.
    let silk = select_first(cells[1], "div.card_tb_image img")
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);

    let name_link = select_first(cells[2], "h5 a");
    let name = name_link
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let link = name_link
        .and_then(|a| a.value().attr("href"))
        .map(|href| resolve_link(base, href));
    let ex_name = select_text(cells[2], r#"span[style="color:red;font-size:11px;"]"#);
    let pedigree = text_or_unknown(cells[2], "h6.margin_remove");
    let last_five_runs = select_text(cells[2], "span.last-five-runs-lable");

    let trainer_link_el = select_first(cells[5], "a");
    let trainer = trainer_link_el
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let trainer_link = trainer_link_el
        .and_then(|a| a.value().attr("href"))
        .map(|href| resolve_link(base, href));

    let jockey_link_el = select_first(cells[6], "a");
    let jockey = jockey_link_el
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let jockey_link = jockey_link_el
        .and_then(|a| a.value().attr("href"))
        .map(|href| resolve_link(base, href));

    let (rating, penalty) = match split_rating_cell(&cells[11].inner_html()) {
        Some(split) => (split.rating, Some(split.penalty)),
        None => (element_text(cells[11]), None),
    };

    Some(HorseEntry {
        number,
        draw,
        silk,
        name,
        link,
        ex_name,
        pedigree,
        last_five_runs,
        description: element_text(cells[3]),
        owner: element_text(cells[4]),
        trainer,
        trainer_link,
        jockey,
        jockey_link,
        weight: element_text(cells[7]),
        equipment: Equipment {
            al: element_text(cells[8]),
            sh: element_text(cells[9]),
            eq: element_text(cells[10]),
        },
        rating,
        penalty,
    })
}

/// Resolves a possibly-relative href against the site base. A href the URL
/// parser rejects outright is kept as found.
fn resolve_link(base: &Url, href: &str) -> String {
    match base.join(href) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

fn css_selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn select_first<'a>(root: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = css_selector(css)?;
    root.select(&selector).next()
}

fn select_all<'a>(root: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match css_selector(css) {
        Some(selector) => root.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// All descendant text, whitespace-trimmed at the ends.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn select_text(root: ElementRef<'_>, css: &str) -> Option<String> {
    select_first(root, css).map(element_text)
}

fn select_all_text(root: ElementRef<'_>, css: &str) -> Vec<String> {
    select_all(root, css).into_iter().map(element_text).collect()
}

fn text_or_unknown(root: ElementRef<'_>, css: &str) -> String {
    select_text(root, css).unwrap_or_else(|| UNKNOWN.to_string())
}

/// First non-empty direct text node, for cells that lay the value out as
/// bare text before nested markup (the number cell).
fn direct_text(cell: ElementRef<'_>) -> Option<String> {
    cell.children()
        .filter_map(|node| node.value().as_text().map(|text| text.trim().to_string()))
        .find(|text| !text.is_empty())
}
