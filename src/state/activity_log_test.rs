use super::*;

#[test]
fn recent_lists_newest_first() {
    let mut log = ActivityLogState::new(10);
    log.record("Alice", "signed in", 1.0);
    log.record("Alice", "denied /settings", 2.0);
    let actions: Vec<_> = log.recent().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, vec!["denied /settings", "signed in"]);
}

#[test]
fn record_drops_oldest_past_capacity() {
    let mut log = ActivityLogState::new(2);
    log.record("a", "one", 1.0);
    log.record("a", "two", 2.0);
    log.record("a", "three", 3.0);
    assert_eq!(log.len(), 2);
    let actions: Vec<_> = log.recent().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, vec!["three", "two"]);
}

#[test]
fn new_log_is_empty() {
    assert!(ActivityLogState::new(0).is_empty());
}
