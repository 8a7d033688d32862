//! Movie catalogue gRPC server.
//!
//! Serves `movies.MovieService` from an in-memory collection seeded with
//! three movies. State is lost when the process exits.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use server::{run_server, shutdown_signal, IdStrategy, NotFoundPolicy, ServerConfig};

/// Movie catalogue server
#[derive(Parser)]
#[command(name = "movie-server")]
#[command(about = "In-memory movie catalogue served over gRPC", long_about = None)]
struct ServerArgs {
    /// Address to listen on
    #[arg(short, long, default_value = server::DEFAULT_LISTEN_ADDR)]
    listen: SocketAddr,

    /// How unknown ids are reported to callers
    #[arg(long, value_enum, default_value_t = NotFoundPolicy::Legacy)]
    not_found: NotFoundPolicy,

    /// Id scheme for created movies
    #[arg(long, value_enum, default_value_t = IdStrategy::Random)]
    ids: IdStrategy,

    /// Start with an empty collection instead of the seed movies
    #[arg(long)]
    no_seed: bool,
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            listen_addr: args.listen,
            not_found: args.not_found,
            ids: args.ids,
            seed: !args.no_seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from(ServerArgs::parse());
    info!("Starting movie server with {:?}", config);

    run_server(config, shutdown_signal()).await
}
