use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

use crate::Error;
use crate::Result;

/// Configuration for watcher feeds created by [`crate::WatchNotifier`]
///
/// # Configuration Example
///
/// ```toml
/// [watch]
/// watcher_buffer_size = 64
/// log_filtered_events = false
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WatchConfig {
    /// Capacity of each watcher's feed channel
    ///
    /// When a feed is full the notifier drops the event for that watcher
    /// instead of blocking the producer. `0` makes feeds unbounded.
    ///
    /// **Default**: 64
    #[serde(default = "default_watcher_buffer_size")]
    pub watcher_buffer_size: usize,

    /// Report events discarded by a watcher's destination filter via `tracing`
    ///
    /// **Default**: false (filtered events are discarded silently)
    #[serde(default = "default_log_filtered_events")]
    pub log_filtered_events: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            watcher_buffer_size: default_watcher_buffer_size(),
            log_filtered_events: default_log_filtered_events(),
        }
    }
}

impl WatchConfig {
    /// Validates watch configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.watcher_buffer_size == 0 {
            warn!("watch.watcher_buffer_size is 0: watcher feeds are unbounded and slow consumers may grow memory without limit");
        }

        if self.watcher_buffer_size > 100_000 {
            return Err(Error::Config(ConfigError::Message(format!(
                "watch.watcher_buffer_size ({}) must not exceed 100000",
                self.watcher_buffer_size
            ))));
        }

        if self.watcher_buffer_size > 10_000 {
            warn!(
                "watch.watcher_buffer_size ({}) is very large. Each watcher may hold that many pending events",
                self.watcher_buffer_size
            );
        }

        Ok(())
    }
}

const fn default_watcher_buffer_size() -> usize {
    64
}

const fn default_log_filtered_events() -> bool {
    false
}
