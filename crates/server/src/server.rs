//! gRPC server bootstrap.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{info, warn};

use movie_rpc::movies::movie_service_server::MovieServiceServer;

use crate::config::ServerConfig;
use crate::service::MovieServiceImpl;

/// Bind `config.listen_addr` and serve until `shutdown` resolves.
///
/// A bind failure is returned before anything is served.
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to listen on {}", config.listen_addr))?;

    let store = Arc::new(config.build_store());
    info!(
        "Movie store ready with {} movies ({} ids)",
        store.len(),
        store.id_source_name()
    );

    let service = MovieServiceImpl::with_policy(store, config.not_found);
    serve(listener, service, shutdown).await
}

/// Serve `service` on an already bound listener.
pub async fn serve<F>(listener: TcpListener, service: MovieServiceImpl, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Server has successfully started on {}", addr);

    Server::builder()
        .add_service(MovieServiceServer::new(service))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .context("Movie server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
    }
}
