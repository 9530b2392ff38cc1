use serde::Deserialize;
use std::collections::HashMap;

/// One address entry from the compute inventory, tagged with its IP version.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerAddress {
    pub addr: String,
    pub version: u8,
}

/// A provider-managed server as returned by `GET .../servers/detail`.
///
/// `addresses` maps a network label ("public", "private", ...) to the
/// addresses attached on that network.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerRecord {
    pub name: String,

    #[serde(default)]
    pub addresses: HashMap<String, Vec<ServerAddress>>,
}

impl ServerRecord {
    /// Inventory names are matched case-insensitively.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn addresses_on(&self, network: &str) -> &[ServerAddress] {
        self.addresses
            .get(network)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
