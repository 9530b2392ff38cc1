use crate::ports::{Clock, IdentityClient};
use std::sync::Arc;
use stratus_dns_domain::{ResolutionError, Token};
use tokio::sync::Mutex;
use tracing::debug;

/// Single-slot credential cache.
///
/// Holds at most one identity token for the provider account. The slot lock
/// is held across the authentication call, so queries racing on an expired
/// or absent token queue behind one refresh instead of each hitting the
/// identity endpoint.
pub struct TokenCache {
    identity: Arc<dyn IdentityClient>,
    clock: Arc<dyn Clock>,
    current: Mutex<Option<Token>>,
}

impl TokenCache {
    pub fn new(identity: Arc<dyn IdentityClient>, clock: Arc<dyn Clock>) -> Self {
        Self {
            identity,
            clock,
            current: Mutex::new(None),
        }
    }

    /// Return the cached token while it is valid, refreshing it otherwise.
    /// A failed refresh leaves the slot untouched.
    pub async fn get(&self) -> Result<Token, ResolutionError> {
        let mut slot = self.current.lock().await;

        if let Some(token) = slot.as_ref() {
            if token.is_valid_at(self.clock.now()) {
                return Ok(token.clone());
            }
        }

        debug!("Identity token absent or expired, authenticating");
        let token = self.identity.authenticate().await?;
        *slot = Some(token.clone());
        Ok(token)
    }
}
