use axum::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flavorr_gateway::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PRIMARY_DOMAIN etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        primary_domain = %config.primary_domain,
        bind = %config.bind_address,
        "starting flavorr gateway"
    );

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(&state.config.bind_address).await?;
    let gateway = routes::create_gateway(state);

    axum::serve(listener, gateway.into_make_service()).await?;
    Ok(())
}
