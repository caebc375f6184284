// src/runner.rs
//! One entry point per command. Frontends build the options and call these;
//! nothing here knows about argument parsing.

use std::error::Error;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::chat::{Chat, LiveCalendar, Schedule, write_general_events};
use crate::config::AppOptions;
use crate::core::net;
use crate::events::EventRecord;
use crate::file::{read_events_csv, write_events_csv};
use crate::knowledge::{KnowledgeEngine, Reply};
use crate::progress::Progress;
use crate::specs;

/// Where the chat gets its athletics table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleSource {
    Live,
    Csv(PathBuf),
    Disabled,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub records: usize,
    pub file_written: PathBuf,
}

/// Resolve the athletics table for a chat. Failures become `Unavailable`
/// carrying the reason.
pub fn load_schedule(
    opts: &AppOptions,
    source: &ScheduleSource,
    progress: Option<&mut dyn Progress>,
) -> Schedule {
    match source {
        ScheduleSource::Disabled => Schedule::Unavailable(s!("scraping disabled")),
        ScheduleSource::Csv(path) => match read_events_csv(path) {
            Ok(records) => {
                info!("Loaded {} events from {}", records.len(), path.display());
                Schedule::Loaded(records)
            }
            Err(e) => {
                warn!("Could not read schedule {}: {e}", path.display());
                Schedule::Unavailable(format!("could not read {}: {e}", path.display()))
            }
        },
        ScheduleSource::Live => match specs::athletics::fetch(&opts.scrape, progress) {
            Ok(records) => Schedule::Loaded(records),
            Err(e) => {
                warn!("Athletics scrape failed: {e}");
                Schedule::Unavailable(e.to_string())
            }
        },
    }
}

/// Run the conversation until an exit word or end of input.
pub fn run_chat<R: BufRead, W: Write>(
    opts: &AppOptions,
    source: &ScheduleSource,
    input: R,
    mut out: W,
    progress: Option<&mut dyn Progress>,
) -> Result<(), Box<dyn Error>> {
    let schedule = load_schedule(opts, source, progress);
    if let Schedule::Unavailable(why) = &schedule {
        if *source != ScheduleSource::Disabled {
            writeln!(out, "Note: athletics schedule unavailable: {why}")?;
        }
    }

    let client = net::client(opts.scrape.http_timeout())?;
    let calendar = LiveCalendar::new(client, opts.scrape.calendar_url.clone());
    let engine = KnowledgeEngine::open(&opts.knowledge);

    let mut chat = Chat::new(input, out, engine, Box::new(calendar), schedule);
    chat.run()?;
    Ok(())
}

/// Scrape the athletics page and export it. `out` overrides the configured path.
pub fn run_scrape(
    opts: &AppOptions,
    out: Option<&Path>,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let records = specs::athletics::fetch(&opts.scrape, progress)?;
    let path = out.map(Path::to_path_buf).unwrap_or_else(|| opts.export.path.clone());
    export(&records, &path)?;
    Ok(RunSummary { records: records.len(), file_written: path })
}

pub fn export(records: &[EventRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    write_events_csv(path, records)?;
    info!("Wrote {} events to {}", records.len(), path.display());
    Ok(())
}

pub fn run_events<W: Write>(opts: &AppOptions, date: NaiveDate, out: &mut W) -> Result<(), Box<dyn Error>> {
    let client = net::client(opts.scrape.http_timeout())?;
    let events = specs::calendar::events_on(&client, &opts.scrape.calendar_url, date);
    write_general_events(out, &events)?;
    Ok(())
}

pub fn run_ohsaa<W: Write>(
    opts: &AppOptions,
    date: NaiveDate,
    url: Option<&str>,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let client = net::client(opts.scrape.http_timeout())?;
    let url = url.unwrap_or(opts.scrape.ohsaa_url.as_str());
    let events = specs::ohsaa::events_on(&client, url, date);
    if events.is_empty() {
        writeln!(out, "No events found for {date}.")?;
    }
    for e in &events {
        writeln!(out, "Event: {}", e.title)?;
        writeln!(out, "Participants: {}", e.participants)?;
        writeln!(out, "Date: {}", e.date)?;
        writeln!(out, "Time: {}", e.time)?;
        writeln!(out, "Location: {}", e.location)?;
        writeln!(out)?;
    }
    Ok(())
}

/// One-shot lookup; never teaches. Returns whether an answer was found.
pub fn run_ask<W: Write>(opts: &AppOptions, question: &str, out: &mut W) -> Result<bool, Box<dyn Error>> {
    let engine = KnowledgeEngine::open(&opts.knowledge);
    match engine.ask(question) {
        Reply::Answer { answer, .. } => {
            writeln!(out, "{answer}")?;
            Ok(true)
        }
        Reply::Unknown => {
            writeln!(out, "I don't know the answer to that yet.")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KnowledgeOptions;
    use crate::knowledge::store::save;
    use crate::knowledge::{KnowledgeBase, QaEntry};

    fn opts_with_kb(dir: &Path) -> AppOptions {
        let path = dir.join("kb.json");
        let mut kb = KnowledgeBase::default();
        kb.push(QaEntry::new("What time does school start?", "7:45 AM"));
        save(&path, &kb).unwrap();
        AppOptions {
            knowledge: KnowledgeOptions { path, ..Default::default() },
            ..Default::default()
        }
    }

    #[test]
    fn ask_prints_answer_or_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let opts = opts_with_kb(dir.path());

        let mut out = Vec::new();
        assert!(run_ask(&opts, "what time does school start", &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "7:45 AM\n");

        let mut out = Vec::new();
        assert!(!run_ask(&opts, "who won the 1987 homecoming game", &mut out).unwrap());
    }

    #[test]
    fn schedule_from_csv_and_missing_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        let rec = EventRecord {
            teams: s!("Aurora vs Kent"),
            date: s!("Fri 4/11"),
            time: s!("5:00 PM"),
            location: s!("Aurora HS"),
            sport: s!("Baseball"),
        };
        export(&[rec.clone()], &path).unwrap();

        let opts = AppOptions::default();
        let got = load_schedule(&opts, &ScheduleSource::Csv(path), None);
        assert_eq!(got, Schedule::Loaded(vec![rec]));

        let missing = load_schedule(&opts, &ScheduleSource::Csv(dir.path().join("nope.csv")), None);
        assert!(matches!(missing, Schedule::Unavailable(_)));

        let off = load_schedule(&opts, &ScheduleSource::Disabled, None);
        assert!(matches!(off, Schedule::Unavailable(_)));
    }
}
