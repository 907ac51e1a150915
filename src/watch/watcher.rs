use std::fmt;
use std::sync::Arc;

use crossbeam_channel::bounded;
use crossbeam_channel::Receiver;
use crossbeam_channel::Sender;
use crossbeam_channel::TryRecvError;
use parking_lot::Mutex;
use tracing::debug;

use super::DiagnosticSink;
use super::NoopSink;
use super::WatchOptions;
use crate::utils::table::render_table;
use crate::Error;
use crate::Event;
use crate::Result;
use crate::Routable;
use crate::Route;

/// Shared state behind every clone of a [`Watcher`]
struct WatcherInner<R> {
    opts: WatchOptions,

    /// Raw events written by the producer; the watcher only reads
    feed: Receiver<Event<R>>,

    /// Dropping the sender is the stop signal: every current and future
    /// receive on `done_rx` fails once it is gone. `None` once stopped.
    done_tx: Mutex<Option<Sender<()>>>,
    done_rx: Receiver<()>,

    sink: Arc<dyn DiagnosticSink>,
}

impl<R> WatcherInner<R> {
    fn is_stopped(&self) -> bool {
        matches!(self.done_rx.try_recv(), Err(TryRecvError::Disconnected))
    }
}

/// Delivers routing table events matching its destination filter
///
/// `Active → Stopped` is one-way. Clones share the same feed and stop signal.
///
/// # Example
///
/// ```ignore
/// let (tx, rx) = crossbeam_channel::unbounded();
/// let watcher = Watcher::new(WatchOptions::from_options([watch_destination("svc-a")]), rx);
///
/// tx.send(Event::now(EventKind::Insert, Route::new("svc-a"))).unwrap();
/// let event = watcher.next()?;
///
/// watcher.stop();
/// assert!(matches!(watcher.next(), Err(Error::WatcherStopped)));
/// ```
pub struct Watcher<R = Route> {
    inner: Arc<WatcherInner<R>>,
}

impl<R> Clone for Watcher<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> Watcher<R> {
    /// Create a watcher reading from `feed`, discarding filtered events silently
    pub fn new(
        opts: WatchOptions,
        feed: Receiver<Event<R>>,
    ) -> Self {
        Self::with_sink(opts, feed, Arc::new(NoopSink))
    }

    /// Create a watcher that reports filtered events to `sink`
    pub fn with_sink(
        opts: WatchOptions,
        feed: Receiver<Event<R>>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let (done_tx, done_rx) = bounded(0);

        Self {
            inner: Arc::new(WatcherInner {
                opts,
                feed,
                done_tx: Mutex::new(Some(done_tx)),
                done_rx,
                sink,
            }),
        }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.inner.opts
    }

    /// Raw, unfiltered feed channel
    ///
    /// Always the same channel. Not affected by [`Watcher::stop`]: consumers
    /// reading it directly must watch [`Watcher::done`] to notice the stop.
    pub fn chan(&self) -> &Receiver<Event<R>> {
        &self.inner.feed
    }

    /// Stop signal: never yields a value, disconnects once stopped
    pub fn done(&self) -> &Receiver<()> {
        &self.inner.done_rx
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.is_stopped()
    }

    /// Stop the watcher. Calling it again, from any thread, is a no-op.
    pub fn stop(&self) {
        // Take under the lock so exactly one caller fires the signal.
        let done_tx = self.inner.done_tx.lock().take();
        if let Some(done_tx) = done_tx {
            drop(done_tx);
            debug!(
                destination = %self.inner.opts.destination,
                "Watcher stopped"
            );
        }
    }
}

impl<R: Routable> Watcher<R> {
    /// Block until the next event matching the destination filter arrives
    ///
    /// # Errors
    /// - [`Error::WatcherStopped`] once [`Watcher::stop`] has been called,
    ///   including while this call is blocked.
    /// - [`Error::FeedClosed`] when every producer sender has been dropped.
    ///
    /// Non-matching events are consumed, reported to the diagnostic sink and
    /// never returned.
    pub fn next(&self) -> Result<Event<R>> {
        let inner = &self.inner;

        loop {
            if inner.is_stopped() {
                return Err(Error::WatcherStopped);
            }

            crossbeam_channel::select! {
                recv(inner.feed) -> msg => match msg {
                    Ok(event) => {
                        if inner.opts.matches(event.destination()) {
                            return Ok(event);
                        }
                        inner
                            .sink
                            .event_filtered(&inner.opts.destination, event.destination(), event.kind());
                    }
                    Err(_) => {
                        if inner.is_stopped() {
                            return Err(Error::WatcherStopped);
                        }
                        return Err(Error::FeedClosed);
                    }
                },
                recv(inner.done_rx) -> _ => {
                    return Err(Error::WatcherStopped);
                }
            }
        }
    }
}

impl<R> fmt::Debug for Watcher<R> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Watcher")
            .field("opts", &self.inner.opts)
            .field("stopped", &self.inner.is_stopped())
            .finish_non_exhaustive()
    }
}

/// Debug dump of the watcher filter
impl<R> fmt::Display for Watcher<R> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let table = render_table(&["Destination"], vec![vec![self.inner.opts.destination.as_str()]]);
        f.write_str(&table)
    }
}
