// src/log.rs
//! Logging setup. Everything goes to `.store/debug.log` with an uptime stamp;
//! stderr gets a filtered copy depending on `-v`. Stdout is left to the chat.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime, prelude::*};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn stderr_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call once per process; a second
/// call is ignored.
pub fn init(verbosity: u8) {
    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(stderr_level(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_filter);

    let file_layer = open_log_file().map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_timer(Uptime::default())
            .with_filter(EnvFilter::new("greenmen_bot=debug"))
    });

    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn open_log_file() -> Option<fs::File> {
    let dir = Path::new(STORE_DIR);
    if !dir.exists() && fs::create_dir_all(dir).is_err() {
        return None;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(stderr_level(0), "warn");
        assert_eq!(stderr_level(1), "info");
        assert_eq!(stderr_level(2), "debug");
        assert_eq!(stderr_level(9), "trace");
    }
}
