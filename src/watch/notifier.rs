//! Producer side of the watch layer.
//!
//! The routing table owns one [`WatchNotifier`]. Every consumer asking for a
//! watch gets its own feed channel; each table mutation is fanned out to all
//! registered feeds.
//!
//! ```text
//! table mutation -> notify() -> try_send(per-watcher feed) -> Watcher::next()
//! ```
//!
//! Delivery is best effort: a full feed drops the event for that watcher
//! rather than blocking the table.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crossbeam_channel::bounded;
use crossbeam_channel::unbounded;
use crossbeam_channel::Receiver;
use crossbeam_channel::Sender;
use crossbeam_channel::TryRecvError;
use crossbeam_channel::TrySendError;
use dashmap::DashMap;
use tracing::trace;
use tracing::warn;

use super::DiagnosticSink;
use super::NoopSink;
use super::TracingSink;
use super::WatchOption;
use super::WatchOptions;
use super::Watcher;
use crate::Event;
use crate::EventKind;
use crate::Route;
use crate::WatchConfig;

/// Producer handles kept for one registered watcher
struct WatcherEntry<R> {
    feed: Sender<Event<R>>,
    done: Receiver<()>,
}

impl<R> WatcherEntry<R> {
    fn is_stopped(&self) -> bool {
        matches!(self.done.try_recv(), Err(TryRecvError::Disconnected))
    }
}

/// Creates watchers and fans routing table events out to them
pub struct WatchNotifier<R = Route> {
    /// Registered watchers keyed by id
    watchers: DashMap<u64, WatcherEntry<R>>,

    /// Next watcher ID (monotonically increasing)
    next_id: AtomicU64,

    config: WatchConfig,
}

impl<R> std::fmt::Debug for WatchNotifier<R> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("WatchNotifier")
            .field("watchers", &self.watchers.len())
            .field("next_id", &self.next_id)
            .field("config", &self.config)
            .finish()
    }
}

impl<R> WatchNotifier<R> {
    pub fn new(config: WatchConfig) -> Self {
        Self {
            watchers: DashMap::new(),
            next_id: AtomicU64::new(1),
            config,
        }
    }

    /// Register a new watcher configured by `options`
    ///
    /// The diagnostic sink follows `WatchConfig::log_filtered_events`.
    pub fn watch<I>(
        &self,
        options: I,
    ) -> Watcher<R>
    where
        I: IntoIterator<Item = WatchOption>,
    {
        let sink: Arc<dyn DiagnosticSink> = if self.config.log_filtered_events {
            Arc::new(TracingSink)
        } else {
            Arc::new(NoopSink)
        };
        self.watch_with_sink(options, sink)
    }

    /// Register a new watcher reporting filtered events to `sink`
    pub fn watch_with_sink<I>(
        &self,
        options: I,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Watcher<R>
    where
        I: IntoIterator<Item = WatchOption>,
    {
        let opts = WatchOptions::from_options(options);
        let (feed_tx, feed_rx) = match self.config.watcher_buffer_size {
            0 => unbounded(),
            size => bounded(size),
        };

        let watcher = Watcher::with_sink(opts, feed_rx, sink);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.watchers.insert(
            id,
            WatcherEntry {
                feed: feed_tx,
                done: watcher.done().clone(),
            },
        );

        trace!(
            watcher_id = id,
            destination = %watcher.options().destination,
            buffer_size = self.config.watcher_buffer_size,
            "Watcher registered"
        );

        watcher
    }

    /// Number of registered watchers, stopped ones included until pruned
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Drop the registrations of stopped watchers
    pub fn prune(&self) {
        self.watchers.retain(|id, entry| {
            let stopped = entry.is_stopped();
            if stopped {
                trace!(watcher_id = *id, "Watcher pruned");
            }
            !stopped
        });
    }

    /// Release every feed; active watchers then observe `Error::FeedClosed`
    pub fn close(&self) {
        self.watchers.clear();
    }
}

impl<R: Clone> WatchNotifier<R> {
    /// Stamp and publish a routing table mutation
    pub fn notify(
        &self,
        kind: EventKind,
        route: R,
    ) -> usize {
        self.notify_event(Event::now(kind, route))
    }

    /// Publish `event` to every live watcher without blocking
    ///
    /// Returns the number of feeds that accepted the event. Stopped or
    /// abandoned watchers are unregistered on the way.
    pub fn notify_event(
        &self,
        event: Event<R>,
    ) -> usize {
        let mut delivered = 0;
        let mut stale = Vec::new();

        for entry in self.watchers.iter() {
            if entry.is_stopped() {
                stale.push(*entry.key());
                continue;
            }

            match entry.feed.try_send(event.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(
                        watcher_id = *entry.key(),
                        kind = %event.kind(),
                        "Watcher feed full, event dropped"
                    );
                }
                Err(TrySendError::Disconnected(_)) => stale.push(*entry.key()),
            }
        }

        for id in stale {
            self.watchers.remove(&id);
            trace!(watcher_id = id, "Watcher unregistered");
        }

        trace!(
            kind = %event.kind(),
            delivered = delivered,
            "Event dispatched"
        );

        delivered
    }
}
