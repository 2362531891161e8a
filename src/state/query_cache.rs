//! Process-wide query cache shared by screens.
//!
//! DESIGN
//! ======
//! Values are stored as `serde_json::Value` keyed by a query string such as
//! `"books:list"`. An entry older than `stale_after_ms` is still kept but no
//! longer served as fresh, so callers refetch and overwrite it.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;

pub const DEFAULT_STALE_AFTER_MS: f64 = 30_000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CachedQuery {
    pub value: serde_json::Value,
    pub fetched_at_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryCache {
    entries: HashMap<String, CachedQuery>,
    stale_after_ms: f64,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER_MS)
    }
}

impl QueryCache {
    pub fn new(stale_after_ms: f64) -> Self {
        Self { entries: HashMap::new(), stale_after_ms }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// TODO: call these from the books and members screens once they load data.
#[cfg_attr(not(test), allow(dead_code))]
impl QueryCache {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: serde_json::Value, now_ms: f64) {
        self.entries.insert(key.into(), CachedQuery { value, fetched_at_ms: now_ms });
    }

    /// Cached value if it was fetched within the staleness window.
    pub(crate) fn fresh(&self, key: &str, now_ms: f64) -> Option<&serde_json::Value> {
        self.entries
            .get(key)
            .filter(|q| now_ms - q.fetched_at_ms < self.stale_after_ms)
            .map(|q| &q.value)
    }

    /// Drop every entry whose key starts with `prefix`. Returns how many went.
    pub(crate) fn invalidate(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }
}
