//! A routing table publishes mutations while several consumers watch
//! different destinations from their own threads.

use std::thread;

use route_watch::watch_destination;
use route_watch::Error;
use route_watch::EventKind;
use route_watch::Route;
use route_watch::RouteWatchConfig;
use route_watch::WatchNotifier;

use crate::enable_logger;

fn collect_until_closed(watcher: route_watch::Watcher) -> Vec<(EventKind, String)> {
    let mut seen = Vec::new();
    loop {
        match watcher.next() {
            Ok(event) => seen.push((event.kind(), event.destination().to_string())),
            Err(Error::FeedClosed) => return seen,
            Err(e) => panic!("unexpected watch error: {:?}", e),
        }
    }
}

#[test]
fn test_each_consumer_sees_its_destination_in_order() {
    enable_logger();
    let config = RouteWatchConfig::default().validate().expect("default config is valid");
    let notifier: WatchNotifier = WatchNotifier::new(config.watch);

    let svc_a = notifier.watch([watch_destination("svc-a")]);
    let svc_b = notifier.watch([watch_destination("svc-b")]);
    let all = notifier.watch([watch_destination("*")]);

    let consumers = vec![
        thread::spawn(move || collect_until_closed(svc_a)),
        thread::spawn(move || collect_until_closed(svc_b)),
        thread::spawn(move || collect_until_closed(all)),
    ];

    let mutations = [
        (EventKind::Insert, "svc-b"),
        (EventKind::Update, "svc-a"),
        (EventKind::Delete, "svc-a"),
        (EventKind::Insert, "svc-c"),
        (EventKind::Update, "svc-b"),
    ];
    for (kind, destination) in mutations {
        notifier.notify(kind, Route::new(destination).with_gateway("10.0.0.1"));
    }
    notifier.close();

    let results: Vec<_> = consumers.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(
        results[0],
        vec![
            (EventKind::Update, "svc-a".to_string()),
            (EventKind::Delete, "svc-a".to_string()),
        ]
    );
    assert_eq!(
        results[1],
        vec![
            (EventKind::Insert, "svc-b".to_string()),
            (EventKind::Update, "svc-b".to_string()),
        ]
    );
    let everything: Vec<_> = mutations.iter().map(|(k, d)| (*k, d.to_string())).collect();
    assert_eq!(results[2], everything);
}
