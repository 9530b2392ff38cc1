//! Stratus DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod record_type;
pub mod resolution;
pub mod server_record;
pub mod token;

pub use config::{CliOverrides, Config};
pub use dns_query::DnsQuery;
pub use errors::ResolutionError;
pub use record_type::RecordType;
pub use resolution::ResolveOutcome;
pub use server_record::{ServerAddress, ServerRecord};
pub use token::{Endpoint, ServiceCatalog, Token};
