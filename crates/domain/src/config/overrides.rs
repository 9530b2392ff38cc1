use serde::{Deserialize, Serialize};

/// Which queries are answered from inventory, and how.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OverrideConfig {
    /// Domain suffixes answered dynamically. Exact suffix match, as
    /// configured (no wildcard expansion).
    #[serde(default)]
    pub domains: Vec<String>,

    /// Network labels considered when picking an address, in priority order.
    #[serde(default)]
    pub networks: Vec<String>,

    /// How long a resolved address is served from cache.
    #[serde(default = "default_answer_ttl_secs")]
    pub answer_ttl_secs: u64,

    /// TTL stamped on answer records sent to clients.
    #[serde(default = "default_record_ttl_secs")]
    pub record_ttl_secs: u32,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            domains: vec![],
            networks: vec![],
            answer_ttl_secs: default_answer_ttl_secs(),
            record_ttl_secs: default_record_ttl_secs(),
        }
    }
}

fn default_answer_ttl_secs() -> u64 {
    86_400
}

fn default_record_ttl_secs() -> u32 {
    60
}
