use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use vibedoctor_contact::EmailApi;

use crate::{
    db::Database,
    indexnow::IndexNow,
    template::{NotFoundTemplate, Template},
};

mod assets;
mod contact;
mod health;
mod index;
mod indexnow;
mod legal;
mod robots;
mod sitemap;
mod team;

pub use assets::AssetsService;

/// Pages listed in the sitemap.
pub const PUBLIC_PAGES: &[&str] = &["/", "/team", "/contact", "/terms", "/privacy"];

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub email_api: Arc<dyn EmailApi>,
    pub database: Database,
    pub indexnow: Option<IndexNow>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let seo = template
        .seo(
            "Page not found",
            "The page you are looking for does not exist.",
            "/",
        )
        .robots("noindex");

    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            seo,
            current_path: "",
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/health", get(health::api).post(health::api_echo))
        // Pages
        .route("/", get(index::page))
        .route("/team", get(team::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/terms", get(legal::terms))
        .route("/privacy", get(legal::privacy))
        // Search engines
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/robots.txt", get(robots::robots))
        .route("/indexnow.xml", get(indexnow::key).post(indexnow::submit))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
