//! Route Watch Error Hierarchy
//!
//! Watch failures are deliberately few: a watcher is either stopped or its
//! producer went away. Filtered events are never surfaced as errors.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `next` was called on (or while) a stopped watcher. Terminal.
    #[error("watcher stopped")]
    WatcherStopped,

    /// Every producer handle of the feed channel was dropped while the
    /// watcher was still active.
    #[error("watcher feed closed by producer")]
    FeedClosed,

    /// Configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wire value that does not map onto an event kind
    #[error("invalid event kind: {0}")]
    InvalidEventKind(i32),
}

impl Error {
    /// Both stop and producer close end the watch for good.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Error::WatcherStopped | Error::FeedClosed)
    }
}
