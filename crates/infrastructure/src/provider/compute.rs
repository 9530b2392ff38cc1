use super::map_request_error;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use stratus_dns_application::ports::ComputeClient;
use stratus_dns_domain::config::ProviderConfig;
use stratus_dns_domain::{ResolutionError, ServerRecord, Token};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ServersResponse {
    servers: Vec<ServerRecord>,
}

/// Server-inventory listing against the compute endpoint picked out of the
/// token's service catalog.
pub struct RaxComputeClient {
    http: reqwest::Client,
    region: String,
    service: String,
}

impl RaxComputeClient {
    pub fn new(http: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            region: config.region.clone(),
            service: config.compute_service.clone(),
        }
    }
}

#[async_trait]
impl ComputeClient for RaxComputeClient {
    async fn list_servers(&self, token: &Token) -> Result<Vec<ServerRecord>, ResolutionError> {
        let Some(endpoint) = token.catalog.endpoint_for(&self.service, &self.region) else {
            debug!(
                service = %self.service,
                region = %self.region,
                "No catalog endpoint for region, returning empty inventory"
            );
            return Ok(vec![]);
        };

        let url = format!("{}/servers/detail", endpoint);
        debug!(url = %url, "Listing server inventory");

        let response = self
            .http
            .get(&url)
            .header("X-Auth-Token", &token.token)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ResolutionError::AuthFailed(
                "compute endpoint rejected the token".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(ResolutionError::Transport(format!(
                "compute endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        let text = response.text().await.map_err(map_request_error)?;
        parse_servers(&text)
    }
}

fn parse_servers(body: &str) -> Result<Vec<ServerRecord>, ResolutionError> {
    let response: ServersResponse =
        serde_json::from_str(body).map_err(|e| ResolutionError::Parse(e.to_string()))?;
    Ok(response.servers)
}
