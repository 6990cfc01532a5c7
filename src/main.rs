//! Binary entry point: environment config, database bootstrap, signal
//! handling.

use museum_server::{
    connect, shutdown_signal, AppState, DatabaseConfig, Server, ServerConfig, StartupError,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("museum_server=info,tower_http=info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal startup error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let server_config = ServerConfig::from_env();
    let db_config = DatabaseConfig::from_env()?;

    let pool = connect(&db_config).await?;
    let state = AppState::new(pool);

    let server = Server::new(server_config, state)?;
    server.run(shutdown_signal()).await
}
