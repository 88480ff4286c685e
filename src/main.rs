// main.rs
// Axum server wiring: loads configuration, builds the router, and serves.
//
// Endpoints:
// - GET  /             -> minimal HTML page for manual testing
// - GET  /health       -> "ok"
// - POST /api/setup    -> issues a new secret and its otpauth URL (nothing stored)
// - POST /api/verify   -> checks {"token","secret"} against the current TOTP

use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use totpgate::{app::build_app, config::Config, state};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr;
    let state = Arc::new(state::init_state(config)?);

    let params = state.engine.params();
    tracing::info!(
        %addr,
        digits = params.digits,
        step = params.step,
        algorithm = %params.algorithm,
        window = state.engine.window(),
        "starting totpgate"
    );

    let app = build_app(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
