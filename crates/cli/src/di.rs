use std::sync::Arc;
use stratus_dns_application::ports::SystemClock;
use stratus_dns_application::services::{AddressMatcher, AnswerCache, TokenCache};
use stratus_dns_application::use_cases::ResolveOverrideUseCase;
use stratus_dns_domain::Config;
use stratus_dns_infrastructure::dns::{OverrideRequestHandler, UpstreamForwarder};
use stratus_dns_infrastructure::provider::{build_http_client, RaxComputeClient, RaxIdentityClient};

/// Wire the provider clients, caches and use case into a request handler.
pub fn build_handler(config: &Config) -> anyhow::Result<OverrideRequestHandler> {
    let http = build_http_client(&config.provider)?;
    let clock = Arc::new(SystemClock);

    let identity = Arc::new(RaxIdentityClient::new(http.clone(), &config.provider));
    let compute = Arc::new(RaxComputeClient::new(http, &config.provider));

    let tokens = Arc::new(TokenCache::new(identity, clock.clone()));
    let answers = Arc::new(AnswerCache::new(config.overrides.answer_ttl_secs, clock));
    let matcher = AddressMatcher::new(config.overrides.networks.clone());

    let use_case = Arc::new(ResolveOverrideUseCase::new(
        config.overrides.domains.clone(),
        matcher,
        tokens,
        answers,
        compute,
    ));

    let forwarder = Arc::new(UpstreamForwarder::new(
        &config.upstream.server,
        config.upstream.query_timeout_ms,
    )?);

    Ok(OverrideRequestHandler::new(
        use_case,
        forwarder,
        config.overrides.record_ttl_secs,
    ))
}
