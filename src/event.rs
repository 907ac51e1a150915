//! Routing table events delivered to watchers.

use std::fmt;
use std::time::SystemTime;

use crate::Error;
use crate::Routable;
use crate::Route;

/// Nature of a routing table mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A new route has been inserted
    Insert,
    /// An existing route has been deleted
    Delete,
    /// An existing route has been updated
    Update,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Insert => "INSERT",
            EventKind::Delete => "DELETE",
            EventKind::Update => "UPDATE",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for EventKind {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventKind::Insert),
            1 => Ok(EventKind::Delete),
            2 => Ok(EventKind::Update),
            other => Err(Error::InvalidEventKind(other)),
        }
    }
}

impl From<EventKind> for i32 {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Insert => 0,
            EventKind::Delete => 1,
            EventKind::Update => 2,
        }
    }
}

/// One observed routing table change
///
/// Built once by the producer at the moment of mutation and never modified.
#[derive(Debug, Clone)]
pub struct Event<R = Route> {
    kind: EventKind,
    timestamp: SystemTime,
    route: R,
}

impl<R> Event<R> {
    pub fn new(
        kind: EventKind,
        timestamp: SystemTime,
        route: R,
    ) -> Self {
        Self {
            kind,
            timestamp,
            route,
        }
    }

    /// Stamp the event with the current wall clock time
    pub fn now(
        kind: EventKind,
        route: R,
    ) -> Self {
        Self::new(kind, SystemTime::now(), route)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    pub fn route(&self) -> &R {
        &self.route
    }

    pub fn into_route(self) -> R {
        self.route
    }
}

impl<R: Routable> Event<R> {
    pub fn destination(&self) -> &str {
        self.route.destination()
    }
}

impl<R: fmt::Display> fmt::Display for Event<R> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[EVENT] {}:\nRoute:\n{}", self.kind, self.route)
    }
}
