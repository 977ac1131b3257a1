use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use wardrobe_core::OutfitEngine;

#[derive(Clone)]
pub struct HealthState {
    engine: Arc<OutfitEngine>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub style_guide: HealthCheck,
    pub checked_at: String,
}

pub fn router(engine: Arc<OutfitEngine>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { engine })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let style_guide = style_guide_check(&state.engine);
    let ready = style_guide.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "wardrobe-server runtime initialized".to_string(),
        },
        style_guide,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

/// An empty palette still works but can never produce a "classic pairing".
fn style_guide_check(engine: &OutfitEngine) -> HealthCheck {
    let colors = engine.scorer().palette().len();
    if colors == 0 {
        return HealthCheck {
            status: "degraded",
            detail: "color palette is empty; every pairing will score as neutral".to_string(),
        };
    }

    HealthCheck { status: "ready", detail: format!("color palette has {colors} base colors") }
}
