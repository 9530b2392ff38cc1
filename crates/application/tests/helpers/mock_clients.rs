#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use stratus_dns_application::ports::{Clock, ComputeClient, IdentityClient};
use stratus_dns_domain::{
    ResolutionError, ServerAddress, ServerRecord, ServiceCatalog, Token,
};
use tokio::sync::RwLock as AsyncRwLock;

/// Manually advanced clock.
pub struct FakeClock {
    now: RwLock<DateTime<Utc>>,
}

impl FakeClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.write().unwrap() += by;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

pub struct MockIdentityClient {
    token_lifetime: Duration,
    clock: Arc<FakeClock>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<AsyncRwLock<bool>>,
    /// Artificial latency, used to force overlap in coalescing tests.
    delay_ms: u64,
}

impl MockIdentityClient {
    pub fn new(clock: Arc<FakeClock>) -> Self {
        Self {
            token_lifetime: Duration::hours(1),
            clock,
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AsyncRwLock::new(false)),
            delay_ms: 0,
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl IdentityClient for MockIdentityClient {
    async fn authenticate(&self) -> Result<Token, ResolutionError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }
        if *self.should_fail.read().await {
            return Err(ResolutionError::AuthFailed("HTTP 401".to_string()));
        }
        Ok(Token::new(
            format!("token-{}", self.call_count()),
            self.clock.now() + self.token_lifetime,
            ServiceCatalog::default(),
        ))
    }
}

pub struct MockComputeClient {
    servers: Arc<AsyncRwLock<Vec<ServerRecord>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<AsyncRwLock<bool>>,
}

impl MockComputeClient {
    pub fn new() -> Self {
        Self {
            servers: Arc::new(AsyncRwLock::new(vec![])),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AsyncRwLock::new(false)),
        }
    }

    pub async fn with_servers(servers: Vec<ServerRecord>) -> Self {
        let client = Self::new();
        *client.servers.write().await = servers;
        client
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl ComputeClient for MockComputeClient {
    async fn list_servers(&self, _token: &Token) -> Result<Vec<ServerRecord>, ResolutionError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(ResolutionError::Transport("connection refused".to_string()));
        }
        Ok(self.servers.read().await.clone())
    }
}

/// Build a server record the way the compute API would return it.
pub fn make_server(name: &str, networks: Vec<(&str, Vec<(&str, u8)>)>) -> ServerRecord {
    let mut addresses = HashMap::new();
    for (network, addrs) in networks {
        addresses.insert(
            network.to_string(),
            addrs
                .into_iter()
                .map(|(addr, version)| ServerAddress {
                    addr: addr.to_string(),
                    version,
                })
                .collect(),
        );
    }
    ServerRecord {
        name: name.to_string(),
        addresses,
    }
}
