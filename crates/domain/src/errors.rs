use thiserror::Error;

/// Failures while resolving a query against the provider.
///
/// None of these mean "name not in inventory" — that is a normal
/// [`ResolveOutcome::NotFound`](crate::ResolveOutcome) and falls through to
/// the upstream resolver.
#[derive(Error, Debug, Clone)]
pub enum ResolutionError {
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Provider transport error: {0}")]
    Transport(String),

    #[error("Provider request timed out")]
    Timeout,

    #[error("Invalid provider response: {0}")]
    Parse(String),
}
