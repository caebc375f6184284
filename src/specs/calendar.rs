// src/specs/calendar.rs
//! District "view all events" calendar (static HTML).
//!
//! The month grid is `fsCalendarEventGrid`; each day holding events is a
//! `fsCalendarDaybox fsStateHasEvents` box whose `fsCalendarDate` child
//! carries `data-year`, `data-month` (0-based) and `data-day`. Titles, start
//! times and locations are separate lists inside the box and are paired up
//! positionally, trimmed to the shortest list.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::align::trim_to_shortest;
use crate::core::html::{attr, first_with_class, open_tag, texts_of_class, blocks_with_class};
use crate::core::net;
use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: String,
    pub time: String,
    pub location: String,
}

/// `YYYY-MM-DD` as typed at the prompt.
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Every event on the page, in document order.
pub fn parse_doc(doc: &str) -> Vec<CalendarEvent> {
    let Some(grid) = first_with_class(doc, "div", "fsCalendarEventGrid fsStyleAutoclear") else {
        debug!("Calendar: event grid not found");
        return Vec::new();
    };

    let mut out = Vec::new();
    for day in blocks_with_class(grid, "div", "fsCalendarDaybox fsStateHasEvents") {
        let Some(date) = day_date(day) else {
            debug!("Calendar: day box without a usable date");
            continue;
        };

        let mut titles = texts_of_class(day, "a", "fsCalendarEventTitle fsCalendarEventLink");
        let mut times = texts_of_class(day, "time", "fsStartTime");
        let mut locations = texts_of_class(day, "div", "fsLocation");
        trim_to_shortest(&mut [&mut titles, &mut times, &mut locations]);

        for ((title, time), location) in titles.into_iter().zip(times).zip(locations) {
            out.push(CalendarEvent { date, title, time, location });
        }
    }
    out
}

fn day_date(day: &str) -> Option<NaiveDate> {
    let tag = open_tag(first_with_class(day, "div", "fsCalendarDate")?);
    let year: i32 = attr(tag, "data-year")?.trim().parse().ok()?;
    let month0: u32 = attr(tag, "data-month")?.trim().parse().ok()?;
    let day: u32 = attr(tag, "data-day")?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
}

pub fn fetch(client: &Client, url: &str) -> Result<Vec<CalendarEvent>, ScrapeError> {
    let doc = net::http_get(client, url)?;
    Ok(parse_doc(&doc))
}

/// Events on one date. A failed fetch is logged and reads as "no events".
pub fn events_on(client: &Client, url: &str, date: NaiveDate) -> Vec<CalendarEvent> {
    match fetch(client, url) {
        Ok(all) => all.into_iter().filter(|e| e.date == date).collect(),
        Err(e) => {
            warn!("Calendar fetch failed for {url}: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"
        <div class="fsCalendarEventGrid fsStyleAutoclear">
          <div class="fsCalendarDaybox fsStateHasEvents">
            <div class="fsCalendarDate" data-year="2024" data-month="3" data-day="11"><span>11</span></div>
            <div class="fsCalendarInfo">
              <a class="fsCalendarEventTitle fsCalendarEventLink" href="#">Board of Education Meeting</a>
              <div class="fsTimeRange"><time class="fsStartTime" datetime="2024-04-11T19:00">7:00 PM</time></div>
              <div class="fsLocation">Administration Building</div>
            </div>
            <div class="fsCalendarInfo">
              <a class="fsCalendarEventTitle fsCalendarEventLink" href="#">Spring Concert</a>
              <div class="fsTimeRange"><time class="fsStartTime">6:30 PM</time></div>
            </div>
          </div>
          <div class="fsCalendarDaybox fsStateHasEvents">
            <div class="fsCalendarDate" data-year="2024" data-month="3" data-day="12"></div>
            <a class="fsCalendarEventTitle fsCalendarEventLink">Prom</a>
            <time class="fsStartTime">8:00 PM</time>
            <div class="fsLocation">Aurora HS</div>
          </div>
          <div class="fsCalendarDaybox">
            <div class="fsCalendarDate" data-year="2024" data-month="3" data-day="13"></div>
          </div>
        </div>
    "##;

    #[test]
    fn parses_days_and_pairs_fields() {
        let events = parse_doc(DOC);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], CalendarEvent {
            date: NaiveDate::from_ymd_opt(2024, 4, 11).unwrap(),
            title: s!("Board of Education Meeting"),
            time: s!("7:00 PM"),
            location: s!("Administration Building"),
        });
        assert_eq!(events[1].title, "Prom");
        assert_eq!(events[1].date, NaiveDate::from_ymd_opt(2024, 4, 12).unwrap());
    }

    #[test]
    fn missing_grid_is_empty() {
        assert!(parse_doc("<html><body>No events</body></html>").is_empty());
    }

    #[test]
    fn zero_based_month_is_shifted() {
        let doc = r#"<div class="fsCalendarEventGrid fsStyleAutoclear"><div class="fsCalendarDaybox fsStateHasEvents"><div class="fsCalendarDate" data-year="2025" data-month="0" data-day="31"></div><a class="fsCalendarEventTitle fsCalendarEventLink">X</a><time class="fsStartTime">All Day</time><div class="fsLocation">Y</div></div></div>"#;
        let events = parse_doc(doc);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn ymd_prompt_parsing() {
        assert_eq!(parse_ymd(" 2024-04-11 "), NaiveDate::from_ymd_opt(2024, 4, 11));
        assert_eq!(parse_ymd("4/11"), None);
        assert_eq!(parse_ymd("2024-02-30"), None);
    }
}
