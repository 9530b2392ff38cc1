use std::net::IpAddr;
use stratus_dns_domain::{RecordType, ServerRecord};
use tracing::warn;

/// Picks a concrete address out of the inventory for a name and record type.
///
/// The first network in the configured order that yields an address of the
/// right IP version wins; ties within a network resolve to the first address
/// encountered.
pub struct AddressMatcher {
    networks: Vec<String>,
}

impl AddressMatcher {
    pub fn new(networks: Vec<String>) -> Self {
        Self { networks }
    }

    pub fn first_match(
        &self,
        servers: &[ServerRecord],
        name: &str,
        record_type: RecordType,
    ) -> Option<IpAddr> {
        for server in servers.iter().filter(|s| s.matches_name(name)) {
            for network in &self.networks {
                for address in server.addresses_on(network) {
                    if address.version != record_type.ip_version() {
                        continue;
                    }
                    match address.addr.parse::<IpAddr>() {
                        Ok(ip) if record_type.matches(&ip) => return Some(ip),
                        Ok(_) => {}
                        Err(_) => {
                            warn!(
                                server = %server.name,
                                network = %network,
                                addr = %address.addr,
                                "Skipping unparseable inventory address"
                            );
                        }
                    }
                }
            }
        }

        None
    }
}
