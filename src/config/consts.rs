// src/config/consts.rs

// Sources
pub const ATHLETICS_URL: &str =
    "https://go.dragonflyathletics.com/sites/OHSAA/7VPXNG/about?mode=This%20Season";
pub const CALENDAR_URL: &str = "https://www.aurora-schools.org/view-all-events";
pub const OHSAA_URL: &str = "https://www.ohsaa.org/school-resources/schedules";
pub const WEBDRIVER_URL: &str = "http://localhost:9515";
pub const USER_AGENT: &str = concat!("greenmen_bot/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Dynamic page loading
pub const POLL_INTERVAL_MS: u64 = 2_000;
pub const MAX_SCROLL_ROUNDS: usize = 60;
pub const STABLE_ROUNDS: usize = 1;
pub const BLOCK_WAIT_MS: u64 = 10_000;
pub const ELEMENT_POLL_MS: u64 = 250;

// Athletics filter
pub const ORGANIZATION: &str = "Aurora City Schools";

// Knowledge base
pub const KNOWLEDGE_FILE: &str = "General_Information.json";
pub const MATCH_CUTOFF: f64 = 0.7;

// Export
pub const DEFAULT_EXPORT_FILE: &str = "aurora_city_schools_events.csv";

// Local files
pub const CONFIG_FILE: &str = "greenmen.toml";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Conversation sentinels (trimmed, case-insensitive)
pub const EXIT_WORDS: [&str; 3] = ["quit", "exit", "bye"];
pub const BACK_WORD: &str = "back";
pub const SKIP_WORD: &str = "skip";
