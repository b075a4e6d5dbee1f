use clap::Parser;
use ferrous_echo_domain::CliOverrides;
use ferrous_echo_infrastructure::dns::{DnsServerHandler, MessageAssembler};
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-echo")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Echo - minimal DNS server answering every question with a fixed A record")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Hex dump every request and response at trace level
    #[arg(long)]
    dump_packets: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        dump_packets: cli.dump_packets,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Echo v{}", env!("CARGO_PKG_VERSION"));
    info!(
        ttl = config.answer.ttl,
        address = %config.answer.address,
        "Answering every question with a fixed A record"
    );

    let handler = DnsServerHandler::new(
        MessageAssembler::new(&config.answer),
        config.logging.dump_packets,
    );

    server::start_dns_server(config.server.listen_addr(), handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
