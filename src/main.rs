mod routes;
mod services;
mod state;
mod util;

use std::path::PathBuf;
use std::sync::Arc;

use config::{AppConfig, load_env};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Optional .env file; absence is fine, the process environment rules.
    let env_file = load_env(&config::EnvLoadOptions::default());
    if env_file.success {
        tracing::info!(path = %env_file.path.display(), "environment file loaded");
    }

    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    // Upstream auth client (non-fatal: login pass-through disabled if unset).
    let auth = match services::upstream::HttpAuthUpstream::from_env() {
        Ok(client) => Some(Arc::new(client) as Arc<dyn services::upstream::AuthUpstream>),
        Err(e) => {
            tracing::warn!(reason = %e, "auth upstream not configured — login pass-through disabled");
            None
        }
    };

    let state = state::AppState::new(app_config, auth);

    let pages = match std::env::var("CONTENT_FILE") {
        Ok(path) => match services::content::load_content_file(&PathBuf::from(&path)) {
            Ok(pages) => pages,
            Err(err) => {
                tracing::error!(path, error = %err, "content file failed to load");
                std::process::exit(1);
            }
        },
        Err(_) => services::content::demo_pages(),
    };
    services::content::seed(&state, pages).await;

    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "pagecraft listening");
    axum::serve(listener, app).await.expect("server failed");
}
