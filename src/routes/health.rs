use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{db::Database, routes::AppState};

fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// A site without a database is ready as soon as it serves requests.
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    readiness(&app_state.database).await
}

async fn readiness(database: &Database) -> (StatusCode, Json<Value>) {
    if !database.is_configured() {
        return (
            StatusCode::OK,
            Json(json!({"status": "ready", "database": "disabled"})),
        );
    }

    match database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "database": "ok"})),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: database unavailable - {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "database_unavailable"
                })),
            )
        }
    }
}

/// GET /api/health
pub async fn api() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": timestamp(),
        "message": "API is running",
    }))
}

/// POST /api/health - Echoes the posted JSON back
pub async fn api_echo(Json(data): Json<Value>) -> impl IntoResponse {
    Json(json!({
        "status": "received",
        "data": data,
        "timestamp": timestamp(),
    }))
}
