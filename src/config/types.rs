// Configuration type definitions

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/geocode";
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_MIN_CHARS: usize = 2;
pub const DEFAULT_BLUR_GRACE_MS: u64 = 150;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 10;

/// Suggestion lookup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// URL of the geocoding endpoint, queried as `?q=<text>&count=<n>`
    pub endpoint: String,
    pub count: usize,
    pub debounce_ms: u64,
    pub min_chars: usize,
    pub blur_grace_ms: u64,
    /// Transport timeout; 0 leaves it to the HTTP client
    pub timeout_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            count: DEFAULT_SUGGESTION_COUNT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_chars: DEFAULT_MIN_CHARS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Search history configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            enabled: true,
            max_entries: DEFAULT_MAX_HISTORY_ENTRIES,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}
