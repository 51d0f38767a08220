use anyhow::{Context, Result};
use sefton_links::catalog::Catalog;
use sefton_links::config::Config;
use sefton_links::i18n::LocaleRegistry;
use sefton_links::server::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sefton_links=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let catalog = Catalog::load_configured(config.catalog_path.as_deref())?;
    let registry = LocaleRegistry::shared();

    info!(
        "Serving {} locales for {} (default: {})",
        registry.locales().len(),
        config.site_origin,
        registry.default_locale().code
    );

    let port = config.port;
    let app = build_router(AppState::new(config, catalog, registry)?);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
