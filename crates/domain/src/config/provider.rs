use serde::{Deserialize, Serialize};

/// Cloud provider account and endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_identity_url")]
    pub identity_url: String,

    /// Service catalog entry holding the servers-listing endpoints.
    #[serde(default = "default_compute_service")]
    pub compute_service: String,

    /// Upper bound on each provider HTTP call.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            api_key: String::new(),
            region: default_region(),
            identity_url: default_identity_url(),
            compute_service: default_compute_service(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

fn default_region() -> String {
    "IAD".to_string()
}

fn default_identity_url() -> String {
    "https://identity.api.rackspacecloud.com/v2.0".to_string()
}

fn default_compute_service() -> String {
    "cloudServersOpenStack".to_string()
}

fn default_http_timeout_secs() -> u64 {
    10
}
