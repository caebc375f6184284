// src/error.rs
//! Error taxonomy shared by the scraping pipelines and the knowledge engine.

use std::path::PathBuf;

/// Failures on the page-fetch / page-driving side.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// Plain HTTP fetch failed (static pages or the WebDriver endpoint).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The WebDriver endpoint answered with a protocol error.
    #[error("WebDriver {context} failed: {message}")]
    Driver { context: String, message: String },

    /// Page height kept growing past the scroll bound.
    #[error("page still growing after {rounds} scroll rounds (last height {last_height})")]
    LoadTimeout { rounds: usize, last_height: u64 },

    /// No event blocks located after the page settled.
    #[error("no content located for {locator}")]
    NoContent { locator: String },
}

impl ScrapeError {
    pub fn driver(context: impl Into<String>, message: impl Into<String>) -> Self {
        ScrapeError::Driver { context: context.into(), message: message.into() }
    }
}

/// Knowledge-base persistence failures. Reading never yields one of these
/// (it falls back to an empty base); writing hands them to the caller.
#[derive(thiserror::Error, Debug)]
pub enum KnowledgeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Config file failures.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_names_the_locator() {
        let err = ScrapeError::NoContent { locator: s!("xpath //div") };
        assert_eq!(err.to_string(), "no content located for xpath //div");
    }

    #[test]
    fn load_timeout_reports_rounds_and_height() {
        let err = ScrapeError::LoadTimeout { rounds: 3, last_height: 900 };
        assert_eq!(err.to_string(), "page still growing after 3 scroll rounds (last height 900)");
    }

    #[test]
    fn driver_helper_builds_variant() {
        let err = ScrapeError::driver("find elements", "stale element");
        assert!(matches!(err, ScrapeError::Driver { .. }));
        assert_eq!(err.to_string(), "WebDriver find elements failed: stale element");
    }

    #[test]
    fn knowledge_json_from_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: KnowledgeError = bad.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
