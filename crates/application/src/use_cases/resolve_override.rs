use crate::ports::ComputeClient;
use crate::services::{AddressMatcher, AnswerCache, TokenCache};
use std::sync::Arc;
use stratus_dns_domain::{DnsQuery, ResolutionError, ResolveOutcome};
use tracing::debug;

/// The override pipeline: classify → answer cache → token → inventory →
/// match → cache fill.
///
/// Owns the two caches; the only suspension points are the authentication
/// and inventory-listing calls behind the ports.
pub struct ResolveOverrideUseCase {
    domains: Vec<String>,
    matcher: AddressMatcher,
    tokens: Arc<TokenCache>,
    answers: Arc<AnswerCache>,
    compute: Arc<dyn ComputeClient>,
}

impl ResolveOverrideUseCase {
    pub fn new(
        domains: Vec<String>,
        matcher: AddressMatcher,
        tokens: Arc<TokenCache>,
        answers: Arc<AnswerCache>,
        compute: Arc<dyn ComputeClient>,
    ) -> Self {
        Self {
            domains,
            matcher,
            tokens,
            answers,
            compute,
        }
    }

    /// True iff the query name ends with one of the configured suffixes.
    /// Names are lowercased at the server boundary; suffixes are matched as
    /// configured.
    pub fn should_handle(&self, query: &DnsQuery) -> bool {
        self.matched_suffix(&query.domain).is_some()
    }

    fn matched_suffix(&self, domain: &str) -> Option<&str> {
        self.domains
            .iter()
            .find(|suffix| domain.ends_with(suffix.as_str()))
            .map(String::as_str)
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<ResolveOutcome, ResolutionError> {
        let Some(suffix) = self.matched_suffix(&query.domain) else {
            return Ok(ResolveOutcome::NotHandled);
        };

        if let Some(address) = self.answers.get(&query.domain, query.record_type) {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                %address,
                "Answer cache hit"
            );
            return Ok(ResolveOutcome::Answered {
                address,
                cached: true,
            });
        }

        let token = self.tokens.get().await?;
        let servers = self.compute.list_servers(&token).await?;

        // Inventory may carry either the full queried name or just the host
        // label in front of the matched suffix.
        let host = query
            .domain
            .strip_suffix(suffix)
            .map(|h| h.trim_end_matches('.'))
            .unwrap_or(&query.domain);

        let address = self
            .matcher
            .first_match(&servers, &query.domain, query.record_type)
            .or_else(|| self.matcher.first_match(&servers, host, query.record_type));

        match address {
            Some(address) => {
                self.answers
                    .insert(&query.domain, query.record_type, address);
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    %address,
                    servers = servers.len(),
                    "Resolved from inventory"
                );
                Ok(ResolveOutcome::Answered {
                    address,
                    cached: false,
                })
            }
            None => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    servers = servers.len(),
                    "No eligible inventory address"
                );
                Ok(ResolveOutcome::NotFound)
            }
        }
    }
}
