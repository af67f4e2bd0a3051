use crate::runtime::helpers::{join_path, normalize_endpoint, CONFIG_SUFFIX};
use crate::runtime::{ConfigEnvelope, RuntimeConfig};
use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    config: Arc<RuntimeConfig>,
}

async fn handle_config(State(state): State<AppState>) -> Response {
    match ConfigEnvelope::ok(&state.config) {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => {
            tracing::error!("Failed to encode runtime config: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": e.to_string() })),
            )
                .into_response()
        }
    }
}

pub fn config_route(base_path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    if base.is_empty() {
        return CONFIG_SUFFIX.to_string();
    }
    join_path(&normalize_endpoint(base), CONFIG_SUFFIX)
}

pub fn router(config: RuntimeConfig) -> Router {
    let route = config_route(&config.base_path);
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route(&route, get(handle_config))
        .with_state(state)
}

pub async fn run_http_server(config: RuntimeConfig, port: u16) -> Result<()> {
    let route = config_route(&config.base_path);
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Serving runtime config at {}{}", addr, route);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
