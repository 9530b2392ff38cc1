use clap::Parser;
use stratus_dns_domain::{CliOverrides, Config};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "stratus-dns")]
#[command(version)]
#[command(about = "DNS server that masquerades cloud inventory addresses as public names")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Domain suffix to answer from inventory (repeatable)
    #[arg(short = 'd', long = "domain")]
    domains: Vec<String>,

    /// Network label to consider, in priority order (repeatable)
    #[arg(short = 'n', long = "network")]
    networks: Vec<String>,

    /// The username for the provider account
    #[arg(short = 'u', long)]
    username: Option<String>,

    /// The API key for the provider account
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Provider region
    #[arg(long)]
    region: Option<String>,

    /// Provider identity endpoint URL
    #[arg(long)]
    identity_url: Option<String>,

    /// Upstream resolver for queries outside the configured domains
    #[arg(long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.bind,
        username: cli.username,
        api_key: cli.api_key,
        region: cli.region,
        identity_url: cli.identity_url,
        domains: cli.domains,
        networks: cli.networks,
        upstream: cli.upstream,
        log_level: cli.log_level,
    };

    let config = Config::load(cli.config.as_deref(), cli_overrides)?;
    config.validate()?;

    bootstrap::init_logging(&config);

    info!("Starting Stratus DNS v{}", env!("CARGO_PKG_VERSION"));
    info!(
        region = %config.provider.region,
        domains = ?config.overrides.domains,
        networks = ?config.overrides.networks,
        upstream = %config.upstream.server,
        "Override configuration"
    );

    let handler = di::build_handler(&config)?;

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(bind_addr, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
