use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    routes::{AppState, PUBLIC_PAGES},
    template::Template,
};

pub const CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(askama::Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate {
    pub urls: Vec<String>,
}

pub async fn sitemap(template: Template, State(app_state): State<AppState>) -> Response {
    let urls = PUBLIC_PAGES
        .iter()
        .map(|path| app_state.config.site.url(path))
        .collect();

    (
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        template.render(SitemapTemplate { urls }),
    )
        .into_response()
}
