// src/specs/ohsaa.rs
//! Static OHSAA schedule page: one `div.event-item` per game, date shown as
//! "Fri 4/11" with no year.

use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::core::html::{blocks_with_class, text_of_class};
use crate::core::net;
use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticScheduleEvent {
    pub title: String,
    pub participants: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
}

/// Parse "Fri 4/11" in `year`. The weekday word is required but not checked
/// against the date.
pub fn parse_event_date(text: &str, year: i32) -> Option<NaiveDate> {
    let mut parts = text.split_whitespace();
    let weekday = parts.next()?;
    let md = parts.next()?;
    if parts.next().is_some() || weekday.len() < 3 || !weekday.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let (m, d) = md.split_once('/')?;
    NaiveDate::from_ymd_opt(year, m.parse().ok()?, d.parse().ok()?)
}

/// Events dated `target`. Blocks with an unparseable date, or missing any
/// other field, are skipped.
pub fn parse_doc(doc: &str, target: NaiveDate) -> Vec<StaticScheduleEvent> {
    let mut out = Vec::new();
    for (i, block) in blocks_with_class(doc, "div", "event-item").into_iter().enumerate() {
        let Some(date_text) = text_of_class(block, "span", "event-date") else {
            debug!("OHSAA block {i}: no date");
            continue;
        };
        let Some(date) = parse_event_date(&date_text, target.year()) else {
            debug!("OHSAA block {i}: unparseable date {date_text:?}");
            continue;
        };
        if date != target {
            continue;
        }

        let fields = (
            text_of_class(block, "span", "link-highlight"),
            text_of_class(block, "span", "event-participants"),
            text_of_class(block, "span", "event-time"),
            text_of_class(block, "span", "event-location-text"),
        );
        match fields {
            (Some(title), Some(participants), Some(time), Some(location)) => {
                out.push(StaticScheduleEvent { title, participants, date, time, location });
            }
            _ => debug!("OHSAA block {i}: incomplete event on {date}"),
        }
    }
    out
}

pub fn fetch(client: &Client, url: &str, target: NaiveDate) -> Result<Vec<StaticScheduleEvent>, ScrapeError> {
    let doc = net::http_get(client, url)?;
    Ok(parse_doc(&doc, target))
}

/// Soft-failing wrapper: fetch errors are logged and read as no events.
pub fn events_on(client: &Client, url: &str, target: NaiveDate) -> Vec<StaticScheduleEvent> {
    fetch(client, url, target).unwrap_or_else(|e| {
        warn!("Error scraping OHSAA schedules from {url}: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const DOC: &str = r#"
        <div class="event-item">
          <span class="event-date">Fri 4/11</span>
          <span class="link-highlight">Baseball</span>
          <span class="event-participants">Aurora vs Kent Roosevelt</span>
          <span class="event-time">5:00 PM</span>
          <span class="event-location-text">Aurora HS</span>
        </div>
        <div class="event-item">
          <span class="event-date">Sat 4/12</span>
          <span class="link-highlight">Softball</span>
          <span class="event-participants">Aurora vs Hudson</span>
          <span class="event-time">11:00 AM</span>
          <span class="event-location-text">Hudson HS</span>
        </div>
        <div class="event-item">
          <span class="event-date">TBD</span>
        </div>
        <div class="event-item">
          <span class="event-date">Fri 4/11</span>
          <span class="link-highlight">Track</span>
        </div>
    "#;

    #[test]
    fn date_pattern() {
        assert_eq!(parse_event_date("Fri 4/11", 2025), Some(ymd(2025, 4, 11)));
        // weekday is not cross-checked
        assert_eq!(parse_event_date("Mon 4/11", 2025), Some(ymd(2025, 4, 11)));
        assert_eq!(parse_event_date("Thu 02/29", 2024), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_event_date("Thu 2/29", 2025), None);
        assert_eq!(parse_event_date("4/11", 2025), None);
        assert_eq!(parse_event_date("Fri 4-11", 2025), None);
    }

    #[test]
    fn keeps_only_target_date_and_complete_blocks() {
        let events = parse_doc(DOC, ymd(2025, 4, 11));
        assert_eq!(events, vec![StaticScheduleEvent {
            title: s!("Baseball"),
            participants: s!("Aurora vs Kent Roosevelt"),
            date: ymd(2025, 4, 11),
            time: s!("5:00 PM"),
            location: s!("Aurora HS"),
        }]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(parse_doc(DOC, ymd(2025, 12, 25)).is_empty());
    }
}
