use std::sync::Arc;

use slideshot_server::{build_router, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slideshot_server=info,slideshot_core=info".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let port = config.port;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
            tracing::info!("carousel renderer listening on http://localhost:{port}");
            axum::serve(listener, app).await?;
            Ok::<(), Box<dyn std::error::Error>>(())
        })?;

    Ok(())
}
