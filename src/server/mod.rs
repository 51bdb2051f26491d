pub mod handlers;
mod types;

pub use types::*;

use crate::{Result, config::Config, workflow::CssWorkflow};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // The two dispatch targets are built once and shared read-only across
    // every request.
    let prompt = CssWorkflow::new(&config.provider, "prompt")?;
    let workflows = CssWorkflow::new(&config.provider, "workflows")?;

    let app_state = AppState {
        prompt: Arc::new(prompt),
        workflows: Arc::new(workflows),
        route_on_decoded_endpoint: config.bridge.route_on_decoded_endpoint,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the service router around an already-initialized state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/service_output", post(handlers::service_output))
        .with_state(state)
}
