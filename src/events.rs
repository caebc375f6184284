// src/events.rs
//! Uniform athletics record table.

use crate::extract::Field;

pub const HEADERS: [&str; 5] = ["Teams", "Date", "Time", "Location", "Sport"];

/// One athletics event, all fields as displayed on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventRecord {
    pub teams: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub sport: String,
}

impl EventRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Teams => &self.teams,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Location => &self.location,
            Field::Sport => &self.sport,
        }
    }

    /// Row in `HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        Field::ALL.iter().map(|f| s!(self.get(*f))).collect()
    }

    /// Inverse of `to_row`; short rows are rejected.
    pub fn from_row(row: &[String]) -> Option<Self> {
        match row {
            [teams, date, time, location, sport, ..] => Some(Self {
                teams: teams.clone(),
                date: date.clone(),
                time: time.clone(),
                location: location.clone(),
                sport: sport.clone(),
            }),
            _ => None,
        }
    }
}

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

pub fn to_rows(records: &[EventRecord]) -> Vec<Vec<String>> {
    records.iter().map(EventRecord::to_row).collect()
}

/// Rows back into records, dropping a leading header row if present.
pub fn from_rows(rows: &[Vec<String>]) -> Vec<EventRecord> {
    let body = match rows.first() {
        Some(first) if first.first().is_some_and(|c| c.eq_ignore_ascii_case(HEADERS[0])) => &rows[1..],
        _ => rows,
    };
    body.iter().filter_map(|r| EventRecord::from_row(r)).collect()
}

/// Left-aligned, padded console table (no index column).
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = padded_line(headers.iter().copied(), &widths);
    for row in rows {
        out.push_str(&padded_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn padded_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(c, w)| format!("{c:<w$}", w = *w))
        .collect();
    join!(line.join("  ").trim_end(), "\n")
}

pub fn render_records(records: &[EventRecord]) -> String {
    render_table(&HEADERS, &to_rows(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(teams: &str, date: &str) -> EventRecord {
        EventRecord {
            teams: s!(teams),
            date: s!(date),
            time: s!("7:00 PM"),
            location: s!("Aurora HS"),
            sport: s!("Football"),
        }
    }

    #[test]
    fn row_roundtrip_and_header_skip() {
        let records = vec![rec("A vs B", "Fri 4/11")];
        let mut rows = vec![headers()];
        rows.extend(to_rows(&records));
        assert_eq!(from_rows(&rows), records);
        assert_eq!(from_rows(&rows[1..]), records);
    }

    #[test]
    fn short_rows_are_dropped() {
        let rows = vec![vec![s!("only"), s!("two")]];
        assert!(from_rows(&rows).is_empty());
    }

    #[test]
    fn table_pads_columns() {
        let out = render_table(&["A", "Bee"], &[vec![s!("long cell"), s!("x")]]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("{:<9}  Bee", "A"));
        assert_eq!(lines[1], "long cell  x");
    }
}
