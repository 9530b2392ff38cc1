use async_trait::async_trait;
use stratus_dns_domain::{ResolutionError, Token};

/// Authentication exchange against the provider's identity endpoint.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn authenticate(&self) -> Result<Token, ResolutionError>;
}
