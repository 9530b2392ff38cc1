mod compute;
mod identity;

pub use compute::RaxComputeClient;
pub use identity::RaxIdentityClient;

use std::time::Duration;
use stratus_dns_domain::config::ProviderConfig;
use stratus_dns_domain::ResolutionError;

/// Shared HTTP client for both provider endpoints, with the configured
/// request timeout so a hung endpoint cannot stall queries.
pub fn build_http_client(config: &ProviderConfig) -> Result<reqwest::Client, ResolutionError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|e| ResolutionError::Transport(e.to_string()))
}

pub(crate) fn map_request_error(e: reqwest::Error) -> ResolutionError {
    if e.is_timeout() {
        ResolutionError::Timeout
    } else {
        ResolutionError::Transport(e.to_string())
    }
}
