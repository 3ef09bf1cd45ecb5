use dotenvy::dotenv;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;
use tracing_subscriber::EnvFilter;

use archidius_backend::{app, config::settings::Config, db, AppState};

// Unknown paths fall through to index.html so the client router can resolve them
fn static_files(dist: &Path) -> ServeDir<SetStatus<ServeFile>> {
    ServeDir::new(dist).not_found_service(ServeFile::new(dist.join("index.html")))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = db::build_pool(&config.database_url)?;
    db::run_migrations(&pool)?;

    let state = Arc::new(AppState::new(pool, config.lead_rate_limit_per_minute));

    if !config.frontend_dist.exists() {
        tracing::warn!(dist = %config.frontend_dist.display(), "Frontend build not found, only the api will be served");
    }
    let app = app(state).fallback_service(static_files(&config.frontend_dist));

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    tracing::info!(addr = %config.server_addr, "Listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
