use std::sync::Arc;

use storeqa_core::executor::MockExecutor;
use storeqa_core::pipeline::Pipeline;

mod app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().init();

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "8000".to_string());
    let bind_addr = format!("{}:{}", host, port);

    // Query execution is mocked until a live ShopifyQL backend is wired in
    let pipeline = Arc::new(Pipeline::new(MockExecutor));
    let app = app::router(pipeline);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server running on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
