#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::EventKind;

/// Receives notice of every event a watcher's filter discards
///
/// Injected at watcher construction. Implementations must be cheap: they run
/// on the consumer thread inside `Watcher::next`.
#[cfg_attr(test, automock)]
pub trait DiagnosticSink: Send + Sync {
    fn event_filtered(
        &self,
        watched: &str,
        destination: &str,
        kind: EventKind,
    );
}

/// Discards every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn event_filtered(
        &self,
        _watched: &str,
        _destination: &str,
        _kind: EventKind,
    ) {
    }
}

/// Reports filtered events as `tracing` debug records
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn event_filtered(
        &self,
        watched: &str,
        destination: &str,
        kind: EventKind,
    ) {
        debug!(
            watched = watched,
            destination = destination,
            kind = %kind,
            "Event filtered out by watcher destination"
        );
    }
}
