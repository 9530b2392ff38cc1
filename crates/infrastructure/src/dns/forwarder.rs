use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use stratus_dns_domain::ResolutionError;
use tokio::net::UdpSocket;

/// Fallback forwarder for queries the override path does not answer.
///
/// One UDP exchange with the configured upstream, bounded by the configured
/// timeout.
pub struct UpstreamForwarder {
    server: SocketAddr,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(server: &str, timeout_ms: u64) -> Result<Self, ResolutionError> {
        let server: SocketAddr = server
            .parse()
            .map_err(|e| ResolutionError::Transport(format!("invalid upstream address: {}", e)))?;
        Ok(Self {
            server,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub async fn forward(
        &self,
        domain: &str,
        record_type: HickoryRecordType,
    ) -> Result<Message, ResolutionError> {
        let request = build_query(domain, record_type)?;

        let bind_addr = if self.server.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| ResolutionError::Transport(format!("failed to bind socket: {}", e)))?;
        socket
            .connect(self.server)
            .await
            .map_err(|e| ResolutionError::Transport(format!("failed to connect: {}", e)))?;
        socket
            .send(&request)
            .await
            .map_err(|e| ResolutionError::Transport(format!("failed to send query: {}", e)))?;

        let mut response_buf = vec![0u8; 4096];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut response_buf))
            .await
            .map_err(|_| ResolutionError::Timeout)?
            .map_err(|e| ResolutionError::Transport(format!("failed to receive response: {}", e)))?;

        Message::from_vec(&response_buf[..len])
            .map_err(|e| ResolutionError::Parse(format!("invalid upstream response: {}", e)))
    }
}

/// Build a recursive query for `domain` in wire format.
fn build_query(domain: &str, record_type: HickoryRecordType) -> Result<Vec<u8>, ResolutionError> {
    let name = Name::from_str(domain)
        .map_err(|e| ResolutionError::Parse(format!("invalid query name '{}': {}", domain, e)))?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new();
    message.set_id(fastrand::u16(..));
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| ResolutionError::Parse(format!("failed to serialize query: {}", e)))?;

    Ok(buf)
}
