//! Viewer configuration.
//!
//! Read from the environment (and a `.env` file when present):
//!
//! | Variable                 | Default           |
//! |--------------------------|-------------------|
//! | `VOCAB_DATASET_PATH`     | `flashcards.json` |
//! | `VOCAB_LOCALES_PATH`     | unset             |
//! | `VOCAB_DEFAULT_LOCALE`   | `en`              |
//! | `VOCAB_DAILY_COUNT`      | `10`              |
//! | `VOCAB_SUGGESTION_LIMIT` | `8`               |

use std::env;
use std::path::PathBuf;
use vocab_core::{DEFAULT_DAILY_COUNT, DEFAULT_SUGGESTION_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset_path: PathBuf,
    /// Translation table; without one every label uses its fallback.
    pub locales_path: Option<PathBuf>,
    pub default_locale: String,
    pub daily_count: usize,
    pub suggestion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("flashcards.json"),
            locales_path: None,
            default_locale: "en".to_string(),
            daily_count: DEFAULT_DAILY_COUNT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable numbers keep their defaults.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let dataset_path = get("VOCAB_DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);

        let locales_path = get("VOCAB_LOCALES_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let default_locale = get("VOCAB_DEFAULT_LOCALE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.default_locale);

        let daily_count = get("VOCAB_DAILY_COUNT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.daily_count);

        let suggestion_limit = get("VOCAB_SUGGESTION_LIMIT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.suggestion_limit);

        Self {
            dataset_path,
            locales_path,
            default_locale,
            daily_count,
            suggestion_limit,
        }
    }
}
