// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("fbref_scrape/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_STATS_SUBDIR: &str = "stats";
pub const DEFAULT_SHOTS_SUBDIR: &str = "shots";
pub const DEFAULT_STATS_FILE: &str = "player_stats";
pub const DEFAULT_SHOTS_FILE: &str = "shots";
pub const OUT_DIR_ENV: &str = "FBREF_SCRAPE_OUT_DIR";

// Pitch (metres) used for shot coordinates
pub const PITCH_LENGTH: f64 = 105.0;
pub const PITCH_WIDTH: f64 = 68.0;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
