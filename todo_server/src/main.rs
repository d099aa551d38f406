//! Todo server: ensures the database and `todo` table exist, then serves the todo API.
//!
//! Run from repo root: `cargo run -p todo-server`

use todo_api::{build_router, ensure_database_exists, ensure_todo_table, AppState, PgTodoStore, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("todo_api=info,todo_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_todo_table(&pool).await?;

    let state = AppState::new(PgTodoStore::new(pool));
    let app = build_router(state, &config.cors_origin)?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(cors_origin = %config.cors_origin, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
