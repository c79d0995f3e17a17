use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use jarvis::{config::Config, routes::create_router, utils::init_logger, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Fails before binding when GROQ_API_KEY is missing
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?} {:?}", config.server, config.llm);

    tokio::fs::create_dir_all(&config.storage.upload_dir)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to create upload directory {}: {}",
                config.storage.upload_dir.display(),
                e
            )
        })?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::from_config(config);
    let app = create_router(state);

    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
