//! Server startup and graceful shutdown

use anyhow::Result;
use axum::Router;
use formscan_core::Config;
use std::future::Future;

/// Start the server with graceful shutdown
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port());
    tracing::info!(addr = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        bucket = %config.s3_bucket(),
        region = %config.aws_region(),
        max_upload_mb = config.max_file_size_bytes() / 1024 / 1024,
        cors_origins = %config.cors_origins().join(","),
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    let mut sigterm = match tokio::signal::unix::signal(
        tokio::signal::unix::SignalKind::terminate(),
    ) {
        Ok(stream) => Some(stream),
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable");
            None
        }
    };

    let terminate = async {
        #[cfg(unix)]
        if let Some(stream) = sigterm.as_mut() {
            stream.recv().await;
            return "SIGTERM";
        }
        std::future::pending::<&'static str>().await
    };

    let signal = first_signal(tokio::signal::ctrl_c(), terminate).await;
    tracing::info!(signal, "Shutting down gracefully");
}

/// Name of the first signal received. A failed Ctrl+C listener is logged and
/// then ignored so it cannot trigger shutdown by itself.
async fn first_signal<I, T>(interrupt: I, terminate: T) -> &'static str
where
    I: Future<Output = std::io::Result<()>>,
    T: Future<Output = &'static str>,
{
    let interrupt = async {
        match interrupt.await {
            Ok(()) => "Ctrl+C",
            Err(e) => {
                tracing::warn!(error = %e, "Ctrl+C handler unavailable");
                std::future::pending::<&'static str>().await
            }
        }
    };

    tokio::select! {
        signal = interrupt => signal,
        signal = terminate => signal,
    }
}
