//! HTTP server startup logic.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::HttpServerConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the listening socket described by `config`.
///
/// Host names are resolved, so an unresolvable or malformed host surfaces
/// here as a bind failure as well. No retry and no fallback port.
pub async fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.addr();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    match listener.local_addr() {
        Ok(local) => tracing::info!(addr = %local, "Server listening at http://{}", local),
        Err(e) => tracing::warn!(%addr, error = %e, "Server listening, local address unavailable"),
    }

    Ok(listener)
}

/// Serve `app` on an already bound listener.
///
/// This function blocks for as long as the listener accepts connections.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind according to `config`, then serve `app`.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await
}
