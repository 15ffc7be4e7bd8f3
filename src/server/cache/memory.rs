use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

struct MemoryEntry {
    body: String,
    expires_at: Instant,
}

/// In-process TTL map
///
/// Expired entries are dropped on every access. When full, the entry closest to expiry is evicted.
pub struct MemoryCache {
    max_entries: usize,
    entries: Mutex<HashMap<String, MemoryEntry>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);

        entries.get(key).map(|entry| entry.body.clone())
    }

    pub async fn insert(&self, key: String, body: String, ttl: Duration) {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);

        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            if let Some(victim) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.expires_at)
                .map(|(key, _)| key.clone())
            {
                entries.remove(&victim);
            }
        }

        entries.insert(
            key,
            MemoryEntry {
                body,
                expires_at: now + ttl,
            },
        );
    }
}
