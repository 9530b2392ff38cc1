use async_trait::async_trait;
use stratus_dns_domain::{ResolutionError, ServerRecord, Token};

/// Authenticated server-inventory listing.
#[async_trait]
pub trait ComputeClient: Send + Sync {
    /// List the current inventory for the configured region. A region with
    /// no catalog endpoint yields an empty list, not an error.
    async fn list_servers(&self, token: &Token) -> Result<Vec<ServerRecord>, ResolutionError>;
}
