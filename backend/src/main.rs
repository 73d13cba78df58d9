use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use kidsafe_server::config::ServerConfig;
use kidsafe_server::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kidsafe_server=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;
    tracing::debug!(?config, "Loaded configuration");
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}, run `trunk build` in frontend/ first",
            config.static_dir.display()
        );
    }

    let app = routes::router(&config.static_dir);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Starting server on port {}", config.port);
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
