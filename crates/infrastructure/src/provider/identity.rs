use super::map_request_error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use stratus_dns_application::ports::IdentityClient;
use stratus_dns_domain::config::ProviderConfig;
use stratus_dns_domain::{Endpoint, ResolutionError, ServiceCatalog, Token};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct IdentityResponse {
    access: Access,
}

#[derive(Debug, Deserialize)]
struct Access {
    token: TokenBody,

    #[serde(rename = "serviceCatalog", default)]
    service_catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    id: String,
    expires: String,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,

    #[serde(default)]
    endpoints: Vec<CatalogEndpoint>,
}

#[derive(Debug, Deserialize)]
struct CatalogEndpoint {
    #[serde(default)]
    region: String,

    #[serde(rename = "publicURL")]
    public_url: String,
}

/// API-key authentication against a Rackspace-style identity endpoint.
pub struct RaxIdentityClient {
    http: reqwest::Client,
    identity_url: String,
    username: String,
    api_key: String,
}

impl RaxIdentityClient {
    pub fn new(http: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            identity_url: config.identity_url.clone(),
            username: config.username.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityClient for RaxIdentityClient {
    async fn authenticate(&self) -> Result<Token, ResolutionError> {
        let url = format!("{}/tokens", self.identity_url);
        debug!(url = %url, username = %self.username, "Requesting identity token");

        let body = json!({
            "auth": {
                "RAX-KSKEY:apiKeyCredentials": {
                    "username": self.username,
                    "apiKey": self.api_key,
                }
            }
        });

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ResolutionError::AuthFailed(format!(
                "identity endpoint returned HTTP {}",
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(ResolutionError::Transport(format!(
                "identity endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        let text = response.text().await.map_err(map_request_error)?;
        parse_token(&text)
    }
}

/// Parse the identity response body into a [`Token`].
fn parse_token(body: &str) -> Result<Token, ResolutionError> {
    let response: IdentityResponse =
        serde_json::from_str(body).map_err(|e| ResolutionError::Parse(e.to_string()))?;

    let expires: DateTime<Utc> = DateTime::parse_from_rfc3339(&response.access.token.expires)
        .map_err(|e| ResolutionError::Parse(format!("invalid token expiry: {}", e)))?
        .with_timezone(&Utc);

    let mut services: HashMap<String, Vec<Endpoint>> = HashMap::new();
    for entry in response.access.service_catalog {
        let endpoints = entry
            .endpoints
            .into_iter()
            .map(|e| Endpoint {
                region: e.region,
                public_url: e.public_url,
            })
            .collect();
        services.insert(entry.name, endpoints);
    }

    Ok(Token::new(
        response.access.token.id,
        expires,
        ServiceCatalog::new(services),
    ))
}
