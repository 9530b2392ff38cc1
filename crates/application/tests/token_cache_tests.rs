use chrono::{Duration, Utc};
use std::sync::Arc;
use stratus_dns_application::services::TokenCache;
use stratus_dns_domain::ResolutionError;

mod helpers;
use helpers::{FakeClock, MockIdentityClient};

#[tokio::test]
async fn test_valid_token_is_reused_across_calls() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let identity = Arc::new(MockIdentityClient::new(clock.clone()));
    let cache = TokenCache::new(identity.clone(), clock.clone());

    let first = cache.get().await.unwrap();
    let second = cache.get().await.unwrap();

    assert_eq!(first.token, second.token);
    assert_eq!(identity.call_count(), 1);
}

#[tokio::test]
async fn test_expired_token_triggers_refresh() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let identity =
        Arc::new(MockIdentityClient::new(clock.clone()).with_token_lifetime(Duration::hours(1)));
    let cache = TokenCache::new(identity.clone(), clock.clone());

    let first = cache.get().await.unwrap();
    clock.advance(Duration::hours(2));
    let second = cache.get().await.unwrap();

    assert_ne!(first.token, second.token);
    assert_eq!(identity.call_count(), 2);
}

#[tokio::test]
async fn test_concurrent_refreshes_are_coalesced() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let identity = Arc::new(MockIdentityClient::new(clock.clone()).with_delay_ms(50));
    let cache = Arc::new(TokenCache::new(identity.clone(), clock.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move { cache.get().await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // All eight callers raced on an empty slot; only one authentication
    // request may go out.
    assert_eq!(identity.call_count(), 1);
}

#[tokio::test]
async fn test_failed_refresh_leaves_slot_usable() {
    let clock = Arc::new(FakeClock::new(Utc::now()));
    let identity = Arc::new(MockIdentityClient::new(clock.clone()));
    let cache = TokenCache::new(identity.clone(), clock.clone());

    identity.set_should_fail(true).await;
    let failed = cache.get().await;
    assert!(matches!(failed, Err(ResolutionError::AuthFailed(_))));

    identity.set_should_fail(false).await;
    let token = cache.get().await.unwrap();
    assert!(!token.token.is_empty());
    assert_eq!(identity.call_count(), 2);
}
