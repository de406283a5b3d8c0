use axum::response::IntoResponse;

use crate::{
    seo::{PageKind, SeoMeta},
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    pub seo: SeoMeta,
    pub current_path: &'static str,
}

#[derive(askama::Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub seo: SeoMeta,
    pub current_path: &'static str,
}

pub async fn terms(template: Template) -> impl IntoResponse {
    let seo = template
        .seo("Terms of Service", "Terms of Service for VibeDoctor", "/terms")
        .kind(PageKind::Article);

    template.render(TermsTemplate {
        seo,
        current_path: "/terms",
    })
}

pub async fn privacy(template: Template) -> impl IntoResponse {
    let seo = template
        .seo("Privacy Policy", "Privacy Policy for VibeDoctor", "/privacy")
        .kind(PageKind::Article)
        .keywords("privacy policy, data protection, GDPR, VibeDoctor");

    template.render(PrivacyTemplate {
        seo,
        current_path: "/privacy",
    })
}
