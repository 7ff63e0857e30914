use quill_server::{AppState, Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    let _ = dotenv::dotenv();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_dir.as_deref());

    // 2. Load configuration
    let config = Config::from_env();
    tracing::info!("quill-server starting (env: {})", config.environment);

    // 3. Initialize application state
    let state = AppState::initialize(&config).await?;

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
