// src/browser/convergence.rs
//! Scroll an infinite-scroll page until its height stops changing.

use std::thread;
use std::time::Duration;

use tracing::debug;

use super::page::Page;
use crate::config::ScrapeOptions;
use crate::error::ScrapeError;
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Convergence {
    pub poll_interval: Duration,
    /// Consecutive unchanged reads needed (at least 1).
    pub stable_rounds: usize,
    /// Scroll budget; exceeding it is a `LoadTimeout`.
    pub max_rounds: usize,
}

impl Convergence {
    pub fn from_options(opts: &ScrapeOptions) -> Self {
        Self {
            poll_interval: opts.poll_interval(),
            stable_rounds: opts.stable_rounds,
            max_rounds: opts.max_scroll_rounds,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub scrolls: usize,
    pub final_height: u64,
}

/// Read height, then repeatedly scroll → sleep → re-read until the height has
/// stayed the same for `stable_rounds` reads in a row.
pub fn wait_for_full_load<P: Page>(
    page: &mut P,
    cfg: &Convergence,
    progress: &mut dyn Progress,
) -> Result<LoadReport, ScrapeError> {
    let needed = cfg.stable_rounds.max(1);
    let mut last = page.content_height()?;
    let mut unchanged = 0usize;
    let mut scrolls = 0usize;

    while unchanged < needed {
        if scrolls >= cfg.max_rounds {
            return Err(ScrapeError::LoadTimeout { rounds: scrolls, last_height: last });
        }
        page.scroll_to_bottom()?;
        scrolls += 1;
        thread::sleep(cfg.poll_interval);

        let height = page.content_height()?;
        debug!("Scroll round {scrolls}: height {last} -> {height}");
        progress.log(&format!("Loading… page height {height}"));

        if height == last {
            unchanged += 1;
        } else {
            unchanged = 0;
            last = height;
        }
    }

    Ok(LoadReport { scrolls, final_height: last })
}
