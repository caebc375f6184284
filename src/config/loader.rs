// src/config/loader.rs
//! Optional TOML config. Every table and key may be omitted.
//!
//! ```toml
//! [scrape]
//! webdriver_url = "http://localhost:4444"
//! poll_interval_ms = 1500
//!
//! [knowledge]
//! cutoff = 0.6
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use super::consts::CONFIG_FILE;
use super::options::AppOptions;
use crate::error::ConfigError;

/// Load options from `explicit` if given (must exist), else from
/// `greenmen.toml` in the working directory if present, else defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppOptions, ConfigError> {
    match explicit {
        Some(path) => load_file(path),
        None => {
            let path = Path::new(CONFIG_FILE);
            if path.exists() {
                load_file(path)
            } else {
                debug!("No {CONFIG_FILE}; using defaults");
                Ok(AppOptions::default())
            }
        }
    }
}

pub fn load_file(path: &Path) -> Result<AppOptions, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse(&text).map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })
}

pub fn parse(text: &str) -> Result<AppOptions, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{MATCH_CUTOFF, ORGANIZATION};

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(parse("").unwrap(), AppOptions::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let opts = parse(
            r#"
            [scrape]
            poll_interval_ms = 500
            max_scroll_rounds = 5

            [knowledge]
            case_sensitive = true
            "#,
        )
        .unwrap();
        assert_eq!(opts.scrape.poll_interval_ms, 500);
        assert_eq!(opts.scrape.max_scroll_rounds, 5);
        assert_eq!(opts.scrape.organization, ORGANIZATION);
        assert!(opts.knowledge.case_sensitive);
        assert_eq!(opts.knowledge.cutoff, MATCH_CUTOFF);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(parse("[knowledge]\ncutoff = \"high\"").is_err());
    }

    #[test]
    fn nan_cutoff_does_not_reach_the_matcher() {
        use crate::knowledge::{CaseMode, Matcher};

        let opts = parse("[knowledge]\ncutoff = nan").unwrap();
        assert!(opts.knowledge.cutoff.is_nan());
        let m = Matcher::new(opts.knowledge.cutoff, CaseMode::Insensitive);
        assert_eq!(m.cutoff(), MATCH_CUTOFF);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
