//! Runtime configuration.
//!
//! Everything is read from environment variables. The runner loads
//! `.env.local` / `.env` first, so local overrides live there.
//!
//! | variable                   | default      | meaning                                  |
//! |----------------------------|--------------|------------------------------------------|
//! | `SCENERY_DB`               | `scenery.db` | SQLite file holding scenes and flags     |
//! | `SCENERY_DATA_ROOT`        | `data`       | directory backing the `data` file source |
//! | `SCENERY_FILE_SOURCE`      | `data`       | source name passed to directory listing  |
//! | `SCENERY_REDRAW_DELAY_MS`  | `60`         | delay of the follow-up redraw (0-5000)   |

use std::path::PathBuf;
use std::time::Duration;

/// Default delay before the follow-up redraw after a remote update.
pub const DEFAULT_REDRAW_DELAY_MS: u64 = 60;

/// Upper bound accepted for `SCENERY_REDRAW_DELAY_MS`.
pub const MAX_REDRAW_DELAY_MS: u64 = 5_000;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneryConfig {
    pub db_path: String,
    pub data_root: PathBuf,
    pub file_source: String,
    pub redraw_delay: Duration,
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            db_path: "scenery.db".to_string(),
            data_root: PathBuf::from("data"),
            file_source: "data".to_string(),
            redraw_delay: Duration::from_millis(DEFAULT_REDRAW_DELAY_MS),
        }
    }
}

impl SceneryConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing values keep their defaults; malformed values are logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(db_path) = non_empty("SCENERY_DB") {
            config.db_path = db_path;
        }
        if let Some(root) = non_empty("SCENERY_DATA_ROOT") {
            config.data_root = PathBuf::from(root);
        }
        if let Some(source) = non_empty("SCENERY_FILE_SOURCE") {
            config.file_source = source;
        }

        if let Some(val) = non_empty("SCENERY_REDRAW_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) if ms <= MAX_REDRAW_DELAY_MS => {
                    config.redraw_delay = Duration::from_millis(ms);
                    tracing::info!(ms, "Applied SCENERY_REDRAW_DELAY_MS environment variable");
                }
                Ok(ms) => {
                    tracing::warn!(
                        ms,
                        "SCENERY_REDRAW_DELAY_MS out of range [0, {}], ignoring",
                        MAX_REDRAW_DELAY_MS
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        val = %val,
                        "SCENERY_REDRAW_DELAY_MS is not a valid u64, ignoring"
                    );
                }
            }
        }

        config
    }
}
