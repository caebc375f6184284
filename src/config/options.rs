// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub knowledge: KnowledgeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub athletics_url: String,
    pub calendar_url: String,
    pub ohsaa_url: String,
    /// chromedriver (or any W3C WebDriver) endpoint
    pub webdriver_url: String,
    pub headless: bool,
    pub poll_interval_ms: u64,
    /// Upper bound on scroll rounds before giving up on a growing page
    pub max_scroll_rounds: usize,
    /// Consecutive unchanged height reads required to call the page loaded
    pub stable_rounds: usize,
    pub block_wait_ms: u64,
    /// Keep only athletics rows whose teams mention this (case-insensitive)
    pub organization: String,
    pub http_timeout_secs: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            athletics_url: s!(ATHLETICS_URL),
            calendar_url: s!(CALENDAR_URL),
            ohsaa_url: s!(OHSAA_URL),
            webdriver_url: s!(WEBDRIVER_URL),
            headless: true,
            poll_interval_ms: POLL_INTERVAL_MS,
            max_scroll_rounds: MAX_SCROLL_ROUNDS,
            stable_rounds: STABLE_ROUNDS,
            block_wait_ms: BLOCK_WAIT_MS,
            organization: s!(ORGANIZATION),
            http_timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl ScrapeOptions {
    pub fn poll_interval(&self) -> Duration { Duration::from_millis(self.poll_interval_ms) }
    pub fn block_wait(&self) -> Duration { Duration::from_millis(self.block_wait_ms) }
    pub fn http_timeout(&self) -> Duration { Duration::from_secs(self.http_timeout_secs) }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct KnowledgeOptions {
    pub path: PathBuf,
    /// Minimum similarity ratio in [0, 1]
    pub cutoff: f64,
    pub case_sensitive: bool,
}

impl Default for KnowledgeOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(KNOWLEDGE_FILE),
            cutoff: MATCH_CUTOFF,
            case_sensitive: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_EXPORT_FILE) }
    }
}
