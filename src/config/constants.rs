use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const API_KEY_ENV: &str = "API_KEY";
pub const MODEL_ENV: &str = "ERRLYZER_MODEL";
pub const PORT_ENV: &str = "ERRLYZER_PORT";
pub const RESPONSE_FORMAT_ENV: &str = "ERRLYZER_RESPONSE_FORMAT";

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Longest prefix of a malformed model reply carried into the fallback
/// payload's root cause.
pub const MAX_FALLBACK_EXCERPT_CHARS: usize = 500;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
