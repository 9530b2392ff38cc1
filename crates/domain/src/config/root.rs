use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::overrides::OverrideConfig;
use super::provider::ProviderConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for Stratus DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Cloud provider account and endpoints
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Dynamic override rules (domains, networks, cache TTLs)
    #[serde(default, rename = "override")]
    pub overrides: OverrideConfig,

    /// Fallback resolver
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. stratus-dns.toml in current directory
    /// 3. /etc/stratus-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("stratus-dns.toml").exists() {
            Self::from_file("stratus-dns.toml")?
        } else if std::path::Path::new("/etc/stratus-dns/config.toml").exists() {
            Self::from_file("/etc/stratus-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(username) = overrides.username {
            self.provider.username = username;
        }
        if let Some(api_key) = overrides.api_key {
            self.provider.api_key = api_key;
        }
        if let Some(region) = overrides.region {
            self.provider.region = region;
        }
        if let Some(url) = overrides.identity_url {
            self.provider.identity_url = url;
        }
        if !overrides.domains.is_empty() {
            self.overrides.domains = overrides.domains;
        }
        if !overrides.networks.is_empty() {
            self.overrides.networks = overrides.networks;
        }
        if let Some(server) = overrides.upstream {
            self.upstream.server = server;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.provider.username.is_empty() || self.provider.api_key.is_empty() {
            return Err(ConfigError::Validation(
                "Provider username and API key are required".to_string(),
            ));
        }

        if self.overrides.domains.is_empty() {
            return Err(ConfigError::Validation(
                "No override domains configured".to_string(),
            ));
        }

        if self.overrides.networks.is_empty() {
            return Err(ConfigError::Validation(
                "No networks configured".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub region: Option<String>,
    pub identity_url: Option<String>,
    pub domains: Vec<String>,
    pub networks: Vec<String>,
    pub upstream: Option<String>,
    pub log_level: Option<String>,
}
