use axum::response::IntoResponse;

use crate::{seo::SeoMeta, template::Template};

pub struct Founder {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
}

pub const FOUNDERS: &[Founder] = &[
    Founder {
        name: "Suman Saurabh",
        role: "Co-founder · Full-stack + AI",
        bio: "Builds product and AI execution flows across code generation, runtime automation, and developer experience.",
        location: "Bengaluru / San Francisco",
    },
    Founder {
        name: "Sunil Agarwal",
        role: "Co-founder · Infrastructure",
        bio: "Leads infrastructure provisioning, private-cloud architecture, and deployment reliability for customer-owned environments.",
        location: "Bengaluru / San Francisco",
    },
];

#[derive(askama::Template)]
#[template(path = "team.html")]
pub struct TeamTemplate {
    pub seo: SeoMeta,
    pub current_path: &'static str,
    pub founders: &'static [Founder],
}

pub async fn page(template: Template) -> impl IntoResponse {
    let seo = template.seo(
        "Team",
        "Meet the VibeDoctor founding team behind AI-native shipping to customer-owned cloud environments.",
        "/team",
    );

    template.render(TeamTemplate {
        seo,
        current_path: "/team",
        founders: FOUNDERS,
    })
}
