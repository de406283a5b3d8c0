use std::collections::HashMap;

use axum::{
    Json,
    extract::{Form, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use strum::VariantArray;
use vibedoctor_contact::{ContactActionResult, ContactFormValues, Field};

use crate::{routes::AppState, seo::SeoMeta, template::Template};

pub const SUPPORT_EMAIL: &str = "support@vibedoctor.dev";
pub const BOOKING_URL: &str = "https://calendly.com/sumansaurabh-1/anek";

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub seo: SeoMeta,
    pub current_path: &'static str,
    pub support_email: &'static str,
    pub booking_url: &'static str,
    pub result: Option<ContactActionResult>,
    pub values: ContactFormValues,
}

impl ContactTemplate {
    fn field(name: &str) -> Option<Field> {
        Field::VARIANTS.iter().copied().find(|f| f.as_ref() == name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        let field = Self::field(name)?;

        self.result.as_ref()?.field_error(field)
    }

    pub fn value(&self, name: &str) -> &str {
        Self::field(name)
            .map(|field| self.values.get(field))
            .unwrap_or_default()
    }
}

fn seo(template: &Template) -> SeoMeta {
    template.seo(
        "Contact",
        "Reach VibeDoctor for technical support, product questions, or sales discussions.",
        "/contact",
    )
}

fn contact_template(template: &Template, result: Option<ContactActionResult>) -> ContactTemplate {
    let values = result
        .as_ref()
        .and_then(|result| result.values.clone())
        .unwrap_or_default();

    ContactTemplate {
        seo: seo(template),
        current_path: "/contact",
        support_email: SUPPORT_EMAIL,
        booking_url: BOOKING_URL,
        result,
        values,
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(contact_template(&template, None))
}

/// True when the client ranks `application/json` ahead of `text/html`.
fn wants_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    accept
        .split(',')
        .map(|part| part.split(';').next().unwrap_or_default().trim())
        .find(|media| *media == "application/json" || *media == "text/html")
        .is_some_and(|media| media == "application/json")
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<HashMap<String, String>>,
) -> Response {
    let submission = vibedoctor_contact::submit_contact(app_state.email_api.as_ref(), &input).await;
    let status =
        StatusCode::from_u16(submission.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if wants_json(&headers) {
        return (status, Json(submission.result)).into_response();
    }

    template.render_with_status(status, contact_template(&template, Some(submission.result)))
}
