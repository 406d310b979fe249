use crate::config::server::ServerConfig;
use crate::utils::error::{HelloError, Result};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

pub const HELLO_BODY: &str = "Hello World";
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method not allowed";

pub async fn hello_handler(method: Method) -> impl IntoResponse {
    if method == Method::GET {
        (StatusCode::OK, HELLO_BODY)
    } else {
        (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_BODY)
    }
}

/// Every path is served by [`hello_handler`]; `/` acts as a catch-all.
pub fn build_router() -> Router {
    Router::new().fallback(hello_handler)
}

pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;

    println!("Server starting on port {}...", config.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| HelloError::BindError { addr, source })?;

    tracing::info!("hello-server listening on {}", addr);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hello-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
