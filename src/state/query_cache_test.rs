use serde_json::json;

use super::*;

#[test]
fn fresh_serves_within_window_only() {
    let mut cache = QueryCache::new(1_000.0);
    cache.insert("books:list", json!([1, 2]), 100.0);
    assert_eq!(cache.fresh("books:list", 900.0), Some(&json!([1, 2])));
    assert_eq!(cache.fresh("books:list", 1_100.0), None);
    assert_eq!(cache.len(), 1);
}

#[test]
fn invalidate_removes_by_prefix() {
    let mut cache = QueryCache::default();
    cache.insert("books:list", json!([]), 0.0);
    cache.insert("books:42", json!({}), 0.0);
    cache.insert("members:list", json!([]), 0.0);
    assert_eq!(cache.invalidate("books:"), 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn clear_empties_cache() {
    let mut cache = QueryCache::default();
    cache.insert("a", json!(1), 0.0);
    cache.clear();
    assert!(cache.is_empty());
}
