use chrono::{Duration, Utc};
use std::net::IpAddr;
use std::sync::Arc;
use stratus_dns_application::services::AnswerCache;
use stratus_dns_domain::RecordType;

mod helpers;
use helpers::FakeClock;

fn addr(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_miss_on_empty_cache() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let cache = AnswerCache::new(86_400, clock);

    assert_eq!(cache.get("web1.example.internal", RecordType::A), None);
}

#[tokio::test]
async fn test_hit_within_ttl() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let cache = AnswerCache::new(86_400, clock.clone());

    cache.insert("web1.example.internal", RecordType::A, addr("203.0.113.5"));
    clock.advance(Duration::hours(23));

    assert_eq!(
        cache.get("web1.example.internal", RecordType::A),
        Some(addr("203.0.113.5"))
    );
}

#[tokio::test]
async fn test_expired_entry_is_lazily_evicted() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let cache = AnswerCache::new(86_400, clock.clone());

    cache.insert("web1.example.internal", RecordType::A, addr("203.0.113.5"));
    clock.advance(Duration::hours(25));

    assert_eq!(cache.get("web1.example.internal", RecordType::A), None);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_record_types_are_cached_independently() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let cache = AnswerCache::new(86_400, clock);

    cache.insert("web1.example.internal", RecordType::A, addr("203.0.113.5"));
    cache.insert("web1.example.internal", RecordType::AAAA, addr("2001:db8::5"));

    assert_eq!(
        cache.get("web1.example.internal", RecordType::A),
        Some(addr("203.0.113.5"))
    );
    assert_eq!(
        cache.get("web1.example.internal", RecordType::AAAA),
        Some(addr("2001:db8::5"))
    );
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn test_reinsert_overwrites_previous_answer() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let cache = AnswerCache::new(86_400, clock);

    cache.insert("web1.example.internal", RecordType::A, addr("203.0.113.5"));
    cache.insert("web1.example.internal", RecordType::A, addr("203.0.113.9"));

    assert_eq!(
        cache.get("web1.example.internal", RecordType::A),
        Some(addr("203.0.113.9"))
    );
    assert_eq!(cache.len(), 1);
}
