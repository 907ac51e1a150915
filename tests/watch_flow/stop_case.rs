//! Consumers stopping while the table keeps publishing.

use std::thread;
use std::time::Duration;

use crossbeam_channel::unbounded;
use route_watch::watch_destination;
use route_watch::Error;
use route_watch::EventKind;
use route_watch::Route;
use route_watch::WatchConfig;
use route_watch::WatchNotifier;

use crate::enable_logger;

#[test]
fn test_stop_releases_blocked_consumer_and_unregisters_it() {
    enable_logger();
    let notifier: WatchNotifier = WatchNotifier::new(WatchConfig::default());
    let watcher = notifier.watch([watch_destination("svc-a")]);
    let (result_tx, result_rx) = unbounded();

    let consumer = watcher.clone();
    let handle = thread::spawn(move || {
        result_tx.send(consumer.next()).unwrap();
    });

    notifier.notify(EventKind::Insert, Route::new("svc-b"));
    assert!(result_rx.recv_timeout(Duration::from_millis(50)).is_err());

    let stoppers: Vec<_> = (0..4)
        .map(|_| {
            let watcher = watcher.clone();
            thread::spawn(move || watcher.stop())
        })
        .collect();
    for stopper in stoppers {
        stopper.join().unwrap();
    }

    let result = result_rx.recv_timeout(Duration::from_secs(1)).expect("consumer unblocked");
    assert!(matches!(result, Err(Error::WatcherStopped)));
    handle.join().unwrap();

    assert_eq!(notifier.notify(EventKind::Update, Route::new("svc-a")), 0);
    assert_eq!(notifier.watcher_count(), 0);
    assert!(matches!(watcher.next(), Err(Error::WatcherStopped)));
}

#[test]
fn test_raw_channel_consumer_observes_done_signal() {
    let notifier: WatchNotifier = WatchNotifier::new(WatchConfig::default());
    let watcher = notifier.watch([watch_destination("*")]);

    notifier.notify(EventKind::Insert, Route::new("svc-a"));
    notifier.notify(EventKind::Insert, Route::new("svc-b"));

    let consumer = watcher.clone();
    let handle = thread::spawn(move || {
        let mut received = 0;
        loop {
            crossbeam_channel::select! {
                recv(consumer.chan()) -> msg => match msg {
                    Ok(_) => received += 1,
                    Err(_) => return received,
                },
                recv(consumer.done()) -> _ => return received,
            }
        }
    });

    thread::sleep(Duration::from_millis(50));
    watcher.stop();

    assert_eq!(handle.join().unwrap(), 2);
}
