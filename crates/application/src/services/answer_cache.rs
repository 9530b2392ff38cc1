use crate::ports::Clock;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::net::IpAddr;
use std::sync::Arc;
use stratus_dns_domain::RecordType;

#[derive(Debug, Clone, Copy)]
struct CachedAnswer {
    address: IpAddr,
    expires: DateTime<Utc>,
}

/// Resolved (name, record type) → address cache with a fixed TTL.
///
/// Expired entries are dropped lazily on access; there is no background
/// sweep and no size bound — the key space is bounded by the operator's
/// inventory.
pub struct AnswerCache {
    entries: DashMap<(String, RecordType), CachedAnswer>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl AnswerCache {
    pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Duration::seconds(ttl_secs as i64),
            clock,
        }
    }

    /// Cached address for the pair, or `None` if absent or expired.
    pub fn get(&self, domain: &str, record_type: RecordType) -> Option<IpAddr> {
        let key = (domain.to_string(), record_type);
        let now = self.clock.now();

        match self.entries.get(&key) {
            None => return None,
            Some(entry) if now < entry.expires => return Some(entry.address),
            Some(_) => {}
        }

        // Guard from the lookup above is dropped here; evict outside of it.
        self.entries.remove_if(&key, |_, entry| now >= entry.expires);
        None
    }

    pub fn insert(&self, domain: &str, record_type: RecordType, address: IpAddr) {
        let expires = self.clock.now() + self.ttl;
        self.entries
            .insert((domain.to_string(), record_type), CachedAnswer { address, expires });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
