use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    routes::{AppState, sitemap::CACHE_CONTROL},
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "robots.txt")]
pub struct RobotsTemplate {
    pub sitemap_url: String,
    pub indexnow_key: Option<String>,
}

pub async fn robots(template: Template, State(app_state): State<AppState>) -> Response {
    let robots = RobotsTemplate {
        sitemap_url: app_state.config.site.url("/sitemap.xml"),
        indexnow_key: app_state
            .indexnow
            .as_ref()
            .map(|indexnow| indexnow.key().to_owned()),
    };

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        template.render(robots),
    )
        .into_response()
}
