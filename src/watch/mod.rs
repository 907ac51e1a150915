//! Routing table watchers
//!
//! A [`Watcher`] turns a raw feed of routing table [`crate::Event`]s into a
//! filtered, blocking stream for one consumer. The [`WatchNotifier`] is the
//! producer side: it hands out watchers and fans table mutations out to them.
//!
//! # Lifecycle
//!
//! ```text
//! Active --stop()--> Stopped
//! ```
//!
//! Stopping is one-way and idempotent. A stopped watcher answers every
//! `next()` with `Error::WatcherStopped` without blocking.

mod notifier;
mod options;
mod sink;
mod watcher;

pub use notifier::*;
pub use options::*;
pub use sink::*;
pub use watcher::*;
