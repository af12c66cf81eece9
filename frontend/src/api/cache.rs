use chrono::{DateTime, Utc};
use log::debug;
use lru::LruCache;
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::time::Duration;

const DEFAULT_CAPACITY: usize = 100;

/// Cache entry with expiration
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: String,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(data: String, ttl: Duration, now: DateTime<Utc>) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            data,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Response bodies of successful GET requests, keyed by full URL
pub struct RequestCache {
    entries: RefCell<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl std::fmt::Debug for RequestCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestCache")
            .field("ttl", &self.ttl)
            .field("len", &self.entries.borrow().len())
            .finish()
    }
}

impl RequestCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RefCell::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached body if present and still fresh.
    /// Expired entries are dropped on lookup.
    pub fn get(&self, key: &str) -> Option<String> {
        let now = Utc::now();
        let mut entries = self.entries.borrow_mut();
        let lookup = entries
            .get(key)
            .map(|entry| (entry.is_expired_at(now), entry.data.clone()));
        match lookup {
            Some((false, data)) => {
                debug!("Cache hit for key: {}", key);
                Some(data)
            }
            Some((true, _)) => {
                debug!("Cache entry expired for key: {}", key);
                entries.pop(key);
                None
            }
            None => None,
        }
    }

    pub fn set(&self, key: String, value: String) {
        self.set_with_ttl(key, value, self.ttl);
    }

    pub fn set_with_ttl(&self, key: String, value: String, ttl: Duration) {
        let entry = CacheEntry::new(value, ttl, Utc::now());
        self.entries.borrow_mut().put(key, entry);
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().pop(key);
    }

    /// Clears all expired entries
    pub fn cleanup(&self) {
        let now = Utc::now();
        let mut entries = self.entries.borrow_mut();
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in expired {
            entries.pop(&key);
        }
    }

    /// Invalidate cache entries whose key contains `pattern`
    pub fn invalidate_pattern(&self, pattern: &str) {
        let mut entries = self.entries.borrow_mut();
        let matching: Vec<String> = entries
            .iter()
            .filter(|(key, _)| key.contains(pattern))
            .map(|(key, _)| key.clone())
            .collect();
        for key in matching {
            entries.pop(&key);
        }
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let entries = self.entries.borrow();
        let total_entries = entries.len();
        let expired_entries = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .count();

        CacheStats {
            total_entries,
            valid_entries: total_entries - expired_entries,
            expired_entries,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
}
