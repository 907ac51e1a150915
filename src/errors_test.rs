use ::config::ConfigError;

use super::*;

#[test]
fn test_watcher_stopped_message() {
    let err = Error::WatcherStopped;
    assert_eq!(err.to_string(), "watcher stopped");
    assert!(err.is_terminal());
}

#[test]
fn test_feed_closed_message() {
    let err = Error::FeedClosed;
    assert_eq!(err.to_string(), "watcher feed closed by producer");
    assert!(err.is_terminal());
}

#[test]
fn test_config_error_is_transparent() {
    let err: Error = ConfigError::Message("bad buffer".into()).into();
    assert_eq!(err.to_string(), "bad buffer");
    assert!(!err.is_terminal());
}

#[test]
fn test_invalid_event_kind_is_not_terminal() {
    assert!(!Error::InvalidEventKind(7).is_terminal());
}
