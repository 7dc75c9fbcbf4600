//! Router construction and request handlers.

use {
    axum::{
        Json, Router,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::{get, post},
    },
    tower_http::cors::{Any, CorsLayer},
    tracing::{error, info},
};

use remessa_channels::IncomingRequest;

use crate::state::AppState;

/// Build the gateway router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/enviar_pdf", post(enviar_pdf_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Run the delivery pipeline for an optional explicit payload.
///
/// Any pipeline failure is flattened to its display string with HTTP 500;
/// a partial delivery is indistinguishable from a total failure here.
async fn enviar_pdf_handler(
    State(state): State<AppState>,
    payload: Option<Json<IncomingRequest>>,
) -> Response {
    match state.run(payload.map(|Json(p)| p)).await {
        Ok(receipt) => {
            info!(package = %receipt.package_label, "delivery request succeeded");
            Json(serde_json::json!({ "status": "sucesso" })).into_response()
        },
        Err(e) => {
            error!(error = %e, "delivery request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        },
    }
}
