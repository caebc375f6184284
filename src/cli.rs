// src/cli.rs
//! Argument model and dispatch for the `greenmen_bot` binary.

use std::error::Error;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use crate::config::{AppOptions, loader};
use crate::progress::{Progress, StderrProgress};
use crate::runner::{self, ScheduleSource};
use crate::specs::calendar::parse_ymd;

#[derive(Debug, Parser)]
#[command(
    name = "greenmen_bot",
    about = "Aurora City Schools events, athletics schedule and Q&A chatbot",
    version
)]
pub struct Cli {
    /// Increase stderr verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML config file (default: ./greenmen.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// WebDriver endpoint, e.g. http://localhost:9515
    #[arg(long, global = true)]
    pub webdriver: Option<String>,

    /// Show the browser window while scraping
    #[arg(long, global = true)]
    pub headed: bool,

    /// Knowledge base JSON file
    #[arg(long, global = true)]
    pub knowledge: Option<PathBuf>,

    /// Minimum similarity (0..1) for a question match
    #[arg(long, global = true, value_parser = parse_cutoff)]
    pub cutoff: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu (the default)
    Chat {
        /// Use a previously exported schedule instead of scraping
        #[arg(long, conflicts_with = "no_scrape")]
        schedule_csv: Option<PathBuf>,
        /// Start without an athletics schedule
        #[arg(long)]
        no_scrape: bool,
    },
    /// Scrape the athletics schedule and export it as CSV
    Scrape {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print district events on a date
    Events {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Print OHSAA schedule events on a date
    Ohsaa {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        #[arg(long)]
        url: Option<String>,
    },
    /// Look up one question without teaching
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_ymd(s).ok_or_else(|| format!("expected YYYY-MM-DD, got {s:?}"))
}

fn parse_cutoff(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
        _ => Err(format!("expected a number from 0 to 1, got {s:?}")),
    }
}

impl Cli {
    /// Config file values with command-line overrides applied.
    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = loader::load(self.config.as_deref())?;
        if let Some(url) = &self.webdriver {
            opts.scrape.webdriver_url = url.clone();
        }
        if self.headed {
            opts.scrape.headless = false;
        }
        if let Some(path) = &self.knowledge {
            opts.knowledge.path = path.clone();
        }
        if let Some(cutoff) = self.cutoff {
            opts.knowledge.cutoff = cutoff;
        }
        Ok(opts)
    }
}

fn report(e: Box<dyn Error>) -> color_eyre::eyre::Report {
    eyre!("{e}")
}

pub fn run(cli: Cli) -> Result<()> {
    let opts = cli.options()?;
    let mut progress = StderrProgress::default();
    let command = cli.command.unwrap_or(Command::Chat { schedule_csv: None, no_scrape: false });

    match command {
        Command::Chat { schedule_csv, no_scrape } => {
            let source = match (schedule_csv, no_scrape) {
                (_, true) => ScheduleSource::Disabled,
                (Some(path), false) => ScheduleSource::Csv(path),
                (None, false) => ScheduleSource::Live,
            };
            runner::run_chat(&opts, &source, io::stdin().lock(), io::stdout(), Some(&mut progress))
                .map_err(report)?;
        }
        Command::Scrape { out } => {
            let summary = runner::run_scrape(&opts, out.as_deref(), Some(&mut progress)).map_err(report)?;
            progress.log(&format!(
                "Saved {} events to {}",
                summary.records,
                summary.file_written.display()
            ));
        }
        Command::Events { date } => runner::run_events(&opts, date, &mut io::stdout()).map_err(report)?,
        Command::Ohsaa { date, url } => {
            runner::run_ohsaa(&opts, date, url.as_deref(), &mut io::stdout()).map_err(report)?
        }
        Command::Ask { question } => {
            runner::run_ask(&opts, &question.join(" "), &mut io::stdout()).map_err(report)?;
        }
    }
    Ok(())
}
