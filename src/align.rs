// src/align.rs
//! Record Aligner and the two row filters.
//!
//! Alignment is positional: the record count is the length of the shortest
//! field sequence and anything past it is dropped from every sequence. Gaps
//! are never padded and records are never re-matched across blocks.

use tracing::info;

use crate::events::EventRecord;
use crate::extract::{Field, FieldSequence};

/// Truncate every sequence to the shortest one's length.
pub fn trim_to_shortest<T>(seqs: &mut [&mut Vec<T>]) -> usize {
    let n = seqs.iter().map(|s| s.len()).min().unwrap_or(0);
    for s in seqs.iter_mut() {
        s.truncate(n);
    }
    n
}

/// Zip the five sequences into complete records, in input order.
pub fn align(fields: FieldSequence) -> Vec<EventRecord> {
    let FieldSequence { mut teams, mut dates, mut times, mut locations, mut sports } = fields;
    let before = [teams.len(), dates.len(), times.len(), locations.len(), sports.len()];

    let n = trim_to_shortest(&mut [&mut teams, &mut dates, &mut times, &mut locations, &mut sports]);
    if before.iter().any(|&len| len != n) {
        let dropped: Vec<String> = Field::ALL
            .iter()
            .zip(before)
            .filter(|(_, len)| *len > n)
            .map(|(f, len)| format!("{}: {}", f.name(), len - n))
            .collect();
        info!("Aligned {n} records; dropped trailing values ({})", dropped.join(", "));
    }

    teams
        .into_iter()
        .zip(dates)
        .zip(times)
        .zip(locations)
        .zip(sports)
        .map(|((((teams, date), time), location), sport)| EventRecord { teams, date, time, location, sport })
        .collect()
}

/// Keep records whose teams mention `org`, ignoring case.
pub fn filter_organization(records: Vec<EventRecord>, org: &str) -> Vec<EventRecord> {
    let needle = org.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.teams.to_lowercase().contains(&needle))
        .collect()
}

/// Records whose date text contains `query` as a plain substring, so "4/1"
/// also matches "4/11". The query is only trimmed.
pub fn filter_by_date<'a>(records: &'a [EventRecord], query: &str) -> Vec<&'a EventRecord> {
    let query = query.trim();
    records.iter().filter(|r| r.date.contains(query)).collect()
}
