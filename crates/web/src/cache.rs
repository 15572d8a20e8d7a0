use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::Value;

pub const ALL_SPORTS: &str = "all_sports";
pub const MEDAL_TALLY: &str = "medal_tally";
pub const MEDAL_WINNERS: &str = "medal_winners";

pub fn sport_key(sport_id: i32) -> String {
    format!("sport_{sport_id}")
}

/// TTL cache for the hot public read endpoints, keyed by query shape.
///
/// The TTL is long because every mutation path calls `invalidate_all`;
/// expiry only covers writes that bypass the API entirely. Invalidation is
/// coarse: write volume is tiny next to read volume.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    pub fn invalidate_all(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_then_get() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.set("k", json!({"answer": 42}));
        assert_eq!(cache.get("k"), Some(json!({"answer": 42})));
    }

    #[test]
    fn test_missing_key() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.set("k", json!(1));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_invalidate_all_clears_everything() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.set("a", json!(1));
        cache.set("b", json!(2));
        cache.invalidate_all();
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }
}
