// src/chat.rs
//! Conversational front end: numbered menu, date prompts, and the Q&A loop.
//!
//! Exit words (`quit`, `exit`, `bye`) end the session from any prompt, and
//! so does end of input. `back` leaves the Q&A loop; `skip` declines to teach.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use reqwest::blocking::Client;

use crate::align::filter_by_date;
use crate::config::consts::{BACK_WORD, EXIT_WORDS};
use crate::core::sanitize::fold;
use crate::events::{EventRecord, render_records};
use crate::knowledge::{KnowledgeEngine, Reply, TeachOutcome};
use crate::specs::calendar::{self, CalendarEvent, parse_ymd};

/// Source of general (non-athletics) events for one date.
pub trait GeneralEvents {
    fn events_on(&mut self, date: NaiveDate) -> Vec<CalendarEvent>;
}

/// District calendar fetched live on each query.
pub struct LiveCalendar {
    client: Client,
    url: String,
}

impl LiveCalendar {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

impl GeneralEvents for LiveCalendar {
    fn events_on(&mut self, date: NaiveDate) -> Vec<CalendarEvent> {
        calendar::events_on(&self.client, &self.url, date)
    }
}

/// Athletics table for menu option 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Schedule {
    Loaded(Vec<EventRecord>),
    /// Why there is no table (scrape failed, or skipped).
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn is_exit(input: &str) -> bool {
    EXIT_WORDS.contains(&fold(input).as_str())
}

/// One "Title/Time/Location" stanza per event.
pub fn write_general_events<W: Write>(out: &mut W, events: &[CalendarEvent]) -> io::Result<()> {
    if events.is_empty() {
        writeln!(out, "No events found for the given date.")?;
    }
    for e in events {
        writeln!(out, "Title: {}", e.title)?;
        writeln!(out, "Time: {}", e.time)?;
        writeln!(out, "Location: {}", e.location)?;
        writeln!(out)?;
    }
    Ok(())
}

pub struct Chat<R, W> {
    input: R,
    out: W,
    engine: KnowledgeEngine,
    calendar: Box<dyn GeneralEvents>,
    schedule: Schedule,
}

impl<R: BufRead, W: Write> Chat<R, W> {
    pub fn new(
        input: R,
        out: W,
        engine: KnowledgeEngine,
        calendar: Box<dyn GeneralEvents>,
        schedule: Schedule,
    ) -> Self {
        Self { input, out, engine, calendar, schedule }
    }

    pub fn into_parts(self) -> (W, KnowledgeEngine) {
        (self.out, self.engine)
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.menu()?;
        loop {
            let Some(choice) = self.prompt("You: ")? else { break };
            if is_exit(&choice) {
                break;
            }
            let flow = match choice.trim() {
                "1" => self.general_events()?,
                "2" => self.athletics()?,
                "3" => self.questions()?,
                _ => {
                    writeln!(self.out, "Bot: Invalid option. Please enter a number between 1 and 3.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.out, "Bot: Goodbye!")?;
        self.out.flush()
    }

    fn menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "Hi! This is the Greenmen chatbot! Enter 1-3 for the options:")?;
        writeln!(self.out, "1. General Events")?;
        writeln!(self.out, "2. Athletics Schedule")?;
        writeln!(self.out, "3. Other")?;
        writeln!(self.out, "Type 'quit', 'exit', or 'bye' to end the chat.")
    }

    /// Print `label`, read one line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = s!();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt, mapping end of input and exit words to `Err(Flow::Exit)`.
    fn ask_line(&mut self, label: &str) -> io::Result<Result<String, Flow>> {
        match self.prompt(label)? {
            Some(line) if !is_exit(&line) => Ok(Ok(line)),
            _ => Ok(Err(Flow::Exit)),
        }
    }

    fn general_events(&mut self) -> io::Result<Flow> {
        let line = match self.ask_line("Enter the date (YYYY-MM-DD): ")? {
            Ok(l) => l,
            Err(flow) => return Ok(flow),
        };
        let Some(date) = parse_ymd(&line) else {
            writeln!(self.out, "Bot: {:?} is not a date in YYYY-MM-DD form.", line.trim())?;
            return Ok(Flow::Continue);
        };

        let events = self.calendar.events_on(date);
        write_general_events(&mut self.out, &events)?;
        Ok(Flow::Continue)
    }

    fn athletics(&mut self) -> io::Result<Flow> {
        if let Schedule::Unavailable(why) = &self.schedule {
            writeln!(self.out, "Bot: The athletics schedule is unavailable ({why}).")?;
            return Ok(Flow::Continue);
        }
        let line = match self.ask_line("Enter a date (e.g., 4/11): ")? {
            Ok(l) => l,
            Err(flow) => return Ok(flow),
        };
        let query = line.trim();
        if query.is_empty() {
            writeln!(self.out, "Bot: Please enter a date such as 4/11.")?;
            return Ok(Flow::Continue);
        }

        let Schedule::Loaded(records) = &self.schedule else { return Ok(Flow::Continue) };
        let hits: Vec<EventRecord> = filter_by_date(records, query).into_iter().cloned().collect();
        if hits.is_empty() {
            writeln!(self.out, "No events found for the date: {query}")?;
        } else {
            write!(self.out, "{}", render_records(&hits))?;
        }
        Ok(Flow::Continue)
    }

    fn questions(&mut self) -> io::Result<Flow> {
        loop {
            let label = "Please enter your question (or type 'back' to return to the main menu): ";
            let question = match self.ask_line(label)? {
                Ok(q) => q,
                Err(flow) => return Ok(flow),
            };
            if fold(&question) == BACK_WORD {
                return Ok(Flow::Continue);
            }
            if question.trim().is_empty() {
                continue;
            }

            match self.engine.ask(&question) {
                Reply::Answer { answer, .. } => writeln!(self.out, "Bot: {answer}")?,
                Reply::Unknown => {
                    writeln!(self.out, "Bot: I don't know the answer, can you teach me please?")?;
                    let answer = match self.ask_line("Type the answer or \"skip\" to skip: ")? {
                        Ok(a) => a,
                        Err(flow) => return Ok(flow),
                    };
                    match self.engine.teach(&question, &answer) {
                        TeachOutcome::Learned => writeln!(self.out, "Bot: Thank you! I learned a new response!")?,
                        TeachOutcome::Skipped => {}
                        TeachOutcome::LearnedUnsaved(e) => writeln!(
                            self.out,
                            "Bot: I'll remember that for now, but saving it failed: {e}"
                        )?,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_words_any_case_and_padding() {
        for w in ["quit", "EXIT", " Bye \r"] {
            assert!(is_exit(w), "{w:?}");
        }
        assert!(!is_exit("back"));
        assert!(!is_exit("quitting"));
    }
}
