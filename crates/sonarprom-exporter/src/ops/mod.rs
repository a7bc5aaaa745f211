//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/readyz`  : readiness (503 when draining)
//! - `/metrics` : Prometheus text format (also `/api/prometheus/metrics`)
//! - `/api/prometheus/properties` : enablement property definitions

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use sonarprom_core::catalog::CATALOG;
use sonarprom_core::settings::property_definitions;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::CONTENT_TYPE;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.scraper().scrape().await {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "scrape failed");
            ApiError(e).into_response()
        }
    }
}

pub async fn properties() -> impl IntoResponse {
    Json(property_definitions(CATALOG))
}
