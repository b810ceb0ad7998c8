use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

mod config;
mod error;
mod extract;
mod models;
mod web;
mod youtube;

use config::Config;
use error::ExtractionError;
use models::{CredentialsResponse, ExtractRequest, ExtractResponse, ExternalExtractResponse};

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    client: reqwest::Client,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(webhook_url = %config.webhook_url(), "configured");

    let state = AppState {
        config: Arc::new(config),
        client: reqwest::Client::new(),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, router(state)).await.unwrap();
}

fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/extract", post(extract_endpoint))
        .route("/api/extract-external", post(extract_external_endpoint))
        .route("/api/test-connection", get(test_connection))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/api/credentials", get(credentials))
        .merge(protected)
        .with_state(state)
}

// ── Access gate ──────────────────────────────────────────────────────────────

/// Runs before body extraction on every protected route; a bad or absent key
/// never reaches the pipeline.
async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    if authenticate(&state.config, provided) {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized: Invalid API Key" })),
        )
            .into_response()
    }
}

fn authenticate(config: &Config, provided: Option<&str>) -> bool {
    provided.is_some_and(|key| key == config.api_key)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn extract_endpoint(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ExtractionError> {
    let content = extract::extract(&state.client, &req).await?;
    Ok(Json(content.into_raw()))
}

async fn extract_external_endpoint(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExternalExtractResponse>, ExtractionError> {
    let content = extract::extract(&state.client, &req).await?;
    Ok(Json(content.into_external()))
}

async fn test_connection() -> impl IntoResponse {
    Json(json!({ "status": "success", "message": "API is active" }))
}

async fn credentials(State(state): State<AppState>) -> Json<CredentialsResponse> {
    Json(CredentialsResponse {
        api_key: state.config.api_key.clone(),
        webhook_url: state.config.webhook_url(),
        test_url: state.config.test_url(),
    })
}
