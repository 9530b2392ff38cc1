use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// One region-specific API endpoint from the provider's service catalog.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub region: String,
    pub public_url: String,
}

/// Service catalog returned alongside an identity token: service name →
/// region endpoints.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    services: HashMap<String, Vec<Endpoint>>,
}

impl ServiceCatalog {
    pub fn new(services: HashMap<String, Vec<Endpoint>>) -> Self {
        Self { services }
    }

    /// First endpoint of `service` registered for `region`.
    pub fn endpoint_for(&self, service: &str, region: &str) -> Option<&str> {
        self.services
            .get(service)?
            .iter()
            .find(|e| e.region == region)
            .map(|e| e.public_url.as_str())
    }
}

/// An identity token. Replaced wholesale on refresh, never mutated.
#[derive(Debug, Clone)]
pub struct Token {
    pub token: String,
    pub expires: DateTime<Utc>,
    pub catalog: ServiceCatalog,
}

impl Token {
    pub fn new(token: String, expires: DateTime<Utc>, catalog: ServiceCatalog) -> Self {
        Self {
            token,
            expires,
            catalog,
        }
    }

    /// A token is usable strictly before its expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires
    }
}
