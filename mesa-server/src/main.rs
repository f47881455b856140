use anyhow::Context;
use mesa_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, then configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // 2. Working directory and logging
    setup_environment(&config)
        .with_context(|| format!("Failed to prepare working directory {}", config.work_dir))?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Mesa server starting..."
    );

    // 3. Database and services
    let state = ServerState::initialize(&config)
        .await
        .context("Failed to initialize server state")?;

    // 4. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
