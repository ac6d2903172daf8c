#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "vizai failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    let config = config::HostConfig::from_env()?;
    match config.api_base.as_deref() {
        Some(api_base) => tracing::info!(%api_base, "api base configured (not called)"),
        None => tracing::info!("api base not configured"),
    }

    let leptos_options = get_configuration(None)
        .map_err(|e| StartupError::Leptos(e.to_string()))?
        .leptos_options;
    let app = routes::app(leptos_options);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "vizai listening");
    axum::serve(listener, app).await?;
    Ok(())
}
