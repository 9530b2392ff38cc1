pub mod errors;
pub mod logging;
pub mod overrides;
pub mod provider;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use overrides::OverrideConfig;
pub use provider::ProviderConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
