use super::forwarder::UpstreamForwarder;
use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;
use stratus_dns_application::use_cases::ResolveOverrideUseCase;
use stratus_dns_domain::{DnsQuery, ResolveOutcome};
use tracing::{debug, error};

/// hickory-server entry point: runs the override pipeline and falls back to
/// the upstream forwarder for everything it does not answer.
///
/// NotHandled and NotFound both go upstream; hard resolution failures answer
/// SERVFAIL instead of silently diverging to the public fallback.
#[derive(Clone)]
pub struct OverrideRequestHandler {
    use_case: Arc<ResolveOverrideUseCase>,
    forwarder: Arc<UpstreamForwarder>,
    record_ttl: u32,
}

impl OverrideRequestHandler {
    pub fn new(
        use_case: Arc<ResolveOverrideUseCase>,
        forwarder: Arc<UpstreamForwarder>,
        record_ttl: u32,
    ) -> Self {
        Self {
            use_case,
            forwarder,
            record_ttl,
        }
    }

    /// Single normalization point for query names: lowercase, no trailing
    /// dot. Everything downstream keys on this form.
    fn normalize_domain(domain: &str) -> String {
        domain.trim_end_matches('.').to_ascii_lowercase()
    }

    async fn send_answer<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: &mut R,
        domain: &str,
        address: IpAddr,
    ) -> ResponseInfo {
        let rdata = match address {
            IpAddr::V4(ipv4) => RData::A(hickory_proto::rr::rdata::A(ipv4)),
            IpAddr::V6(ipv6) => RData::AAAA(hickory_proto::rr::rdata::AAAA(ipv6)),
        };
        let name = Name::from_str(domain).unwrap_or_else(|_| Name::root());
        let answers = [Record::from_rdata(name, self.record_ttl, rdata)];

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_recursion_available(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }

    async fn forward_upstream<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: &mut R,
        domain: &str,
        record_type: HickoryRecordType,
    ) -> ResponseInfo {
        let upstream = match self.forwarder.forward(domain, record_type).await {
            Ok(message) => message,
            Err(e) => {
                error!(domain = %domain, error = %e, "Upstream forwarding failed");
                return send_error_response(request, response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        debug!(
            domain = %domain,
            answers = upstream.answers().len(),
            code = ?upstream.response_code(),
            "Forwarded to upstream"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_response_code(upstream.response_code());
        header.set_recursion_available(true);
        let response = builder.build(
            header,
            upstream.answers().iter(),
            upstream.name_servers().iter(),
            &[],
            &[],
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send forwarded response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for OverrideRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let domain = Self::normalize_domain(&query.name().to_utf8());
        let hickory_type = query.query_type();

        debug!(
            domain = %domain,
            record_type = ?hickory_type,
            client = %request.src().ip(),
            "DNS query received"
        );

        // Non-address record types skip the override pipeline entirely.
        let outcome = match RecordTypeMapper::from_hickory(hickory_type) {
            Some(record_type) => {
                let dns_query = DnsQuery::new(domain.clone(), record_type);
                match self.use_case.execute(&dns_query).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!(domain = %domain, error = %e, "Override resolution failed");
                        return send_error_response(
                            request,
                            &mut response_handle,
                            ResponseCode::ServFail,
                        )
                        .await;
                    }
                }
            }
            None => ResolveOutcome::NotHandled,
        };

        match outcome {
            ResolveOutcome::Answered { address, cached } => {
                debug!(domain = %domain, %address, cached, "Answering from inventory");
                self.send_answer(request, &mut response_handle, &domain, address)
                    .await
            }
            ResolveOutcome::NotHandled | ResolveOutcome::NotFound => {
                self.forward_upstream(request, &mut response_handle, &domain, hickory_type)
                    .await
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
