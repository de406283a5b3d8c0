use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::routes::AppState;

#[derive(Deserialize)]
pub struct SubmitInput {
    #[serde(default)]
    pub url: String,
}

/// GET /indexnow.xml - Key verification file
pub async fn key(State(app_state): State<AppState>) -> Response {
    let Some(indexnow) = app_state.indexnow else {
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        indexnow.key().to_owned(),
    )
        .into_response()
}

/// POST /indexnow.xml - Forwards one url to every IndexNow engine
pub async fn submit(State(app_state): State<AppState>, Json(input): Json<SubmitInput>) -> Response {
    let Some(indexnow) = app_state.indexnow else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let url = input.url.trim();
    if url.is_empty() {
        return (StatusCode::BAD_REQUEST, "URL is required").into_response();
    }

    match indexnow.submit(url).await {
        Ok(submitted) => {
            let all = submitted == crate::indexnow::Submitted::All;
            let status = if all {
                StatusCode::OK
            } else {
                StatusCode::MULTI_STATUS
            };

            tracing::info!(url, all, "IndexNow submission sent");

            (
                status,
                Json(json!({ "success": all, "message": submitted.message() })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("IndexNow submission error: {e}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to submit URL" })),
            )
                .into_response()
        }
    }
}
