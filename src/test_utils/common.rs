use crossbeam_channel::unbounded;
use crossbeam_channel::Sender;

use crate::watch_destination;
use crate::Event;
use crate::EventKind;
use crate::Route;
use crate::WatchOptions;
use crate::Watcher;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    env_logger::init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
    println!("setup logger for unit test.");
}

pub fn route_event(
    kind: EventKind,
    destination: &str,
) -> Event {
    Event::now(kind, Route::new(destination))
}

/// Watcher fed by an unbounded channel the test controls
pub fn watcher_with_feed(destination: &str) -> (Sender<Event>, Watcher) {
    let (tx, rx) = unbounded();
    let opts = WatchOptions::from_options([watch_destination(destination)]);
    (tx, Watcher::new(opts, rx))
}
