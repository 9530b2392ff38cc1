pub mod forwarder;
pub mod handler;
pub mod record_type_map;

pub use forwarder::UpstreamForwarder;
pub use handler::OverrideRequestHandler;
pub use record_type_map::RecordTypeMapper;
