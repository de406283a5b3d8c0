use std::collections::HashMap;

use crate::{ContactFormValues, EmailApi, EmailRequest, Outcome, Submission};

/// Validates a raw contact form and, when every field is valid, forwards it
/// to the email delivery api exactly once.
///
/// Never fails: validation errors, upstream rejections and transport errors
/// all end up in the returned [`Submission`].
#[tracing::instrument(skip_all)]
pub async fn submit_contact<A>(api: &A, form: &HashMap<String, String>) -> Submission
where
    A: EmailApi + ?Sized,
{
    let values = ContactFormValues::from_form(form);

    let field_errors = values.field_errors();
    if !field_errors.is_empty() {
        tracing::debug!(
            outcome = %Outcome::Rejected,
            fields = ?field_errors.keys().collect::<Vec<_>>(),
            "Contact form failed validation"
        );

        return Submission::rejected(field_errors, values);
    }

    let request = EmailRequest::from(&values);

    let response = match api.send(&request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(outcome = %Outcome::TransportFailed, "Contact email request failed: {err}");

            return Submission::transport_failed(values);
        }
    };

    if !response.is_success() {
        let submission = Submission::remote_rejected(
            response.status,
            response.message().or_else(|| response.error()),
            values,
        );

        tracing::warn!(
            outcome = %submission.outcome,
            status = response.status,
            "Email api rejected contact message"
        );

        return submission;
    }

    tracing::info!(outcome = %Outcome::Accepted, "Contact message sent");

    Submission::accepted(response.message())
}
