use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dawalink_gateway::{app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dawalink_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        target_api = %config.target_api,
        port = config.port,
        token_ttl_secs = config.token_ttl.as_secs(),
        cookie_secure = config.cookie_secure,
        "Loaded configuration from environment/.env"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = app(AppState::new(config));

    tracing::info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
