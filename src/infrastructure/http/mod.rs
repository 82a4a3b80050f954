pub mod routes;

use std::sync::Arc;

use crate::CrossSell;

/// Bind `address` and serve the matrix routes until the process stops.
pub async fn serve(address: &str, app: Arc<CrossSell>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(bind_address = %address, "cross-sell matrix API listening");
    axum::serve(listener, routes::router(app)).await
}
