use serde::{Deserialize, Serialize};

/// Fallback resolver for everything the override path does not answer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_server() -> String {
    "1.1.1.1:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}
