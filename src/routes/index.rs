use axum::response::IntoResponse;

use crate::{seo::SeoMeta, template::Template};

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Repo Change Automation",
        description: "Send a request like 'add OTP login' and run cloud agents against your existing GitHub repository.",
    },
    Service {
        title: "Managed Infra Provisioning",
        description: "Provision Redis, PostgreSQL, queues, and object storage inside your cloud with sane defaults.",
    },
    Service {
        title: "Integration Wiring",
        description: "Automatically connect newly provisioned services to app code, env vars, and runtime configs.",
    },
    Service {
        title: "Deployment Orchestration",
        description: "Release to Cloud Run or Kubernetes with staged rollout and autoscaling support.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Connect Your Repo",
        description: "Link your existing GitHub repository and choose the target cloud environment.",
    },
    Step {
        number: "02",
        title: "Submit Change Request",
        description: "Describe what you want in plain language: feature, bug fix, or infrastructure request.",
    },
    Step {
        number: "03",
        title: "Run Agent + Infra Plan",
        description: "Choose your coding agent, execute code changes, and provision required services with integrations.",
    },
    Step {
        number: "04",
        title: "Review and Release",
        description: "Validate output, run staged deployment, and ship with rollback safety in place.",
    },
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub seo: SeoMeta,
    pub current_path: &'static str,
    pub services: &'static [Service],
    pub steps: &'static [Step],
}

pub async fn page(template: Template) -> impl IntoResponse {
    let seo = template
        .seo(
            "Provision your Infra at the Speed of Chat",
            "Provision your cloud infrastructure using natural language. No yaml, no console clicking. Just ask, and VibeDoctor deploys it.",
            "/",
        )
        .keywords("cloud infrastructure, AI agents, deployment, provisioning, devops");

    template.render(IndexTemplate {
        seo,
        current_path: "/",
        services: SERVICES,
        steps: STEPS,
    })
}
