use std::future::Future;

use tokio::net::TcpListener;
use tokio::signal;

use greeter_core::{Error, ListenerConfig};

use crate::router::create_router;

/// Bind the listening socket for `config`.
///
/// # Errors
///
/// Returns [`Error::Bind`] if the address is invalid or already in use.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, Error> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

/// Serve the router on `listener` until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns [`Error::Serve`] if the server fails while running.
pub async fn serve(listener: TcpListener) -> Result<(), Error> {
    serve_with_shutdown(listener, shutdown_signal()).await
}

/// Serve the router on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
///
/// # Errors
///
/// Returns [`Error::Serve`] if the local address cannot be read or the server
/// fails while running.
pub async fn serve_with_shutdown<F>(listener: TcpListener, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(Error::Serve)?;
    tracing::info!("Server running at http://{addr}");

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind according to `config` and serve until shutdown.
///
/// # Errors
///
/// Propagates errors from [`bind`] and [`serve`].
pub async fn run(config: &ListenerConfig) -> Result<(), Error> {
    let listener = bind(config).await?;
    serve(listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl-C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
