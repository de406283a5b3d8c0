use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{ContactFormValues, Field, FieldErrors};

pub const INVALID_FIELDS_MESSAGE: &str = "Please fix the highlighted fields and try again.";
pub const SENT_MESSAGE: &str = "Message sent successfully.";
pub const REJECTED_MESSAGE: &str = "Unable to send your message right now. Please try again.";
pub const TRANSPORT_FAILED_MESSAGE: &str =
    "Something went wrong while sending your message. Please try again.";

/// What the contact form is re-rendered with after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactActionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<ContactFormValues>,
}

impl ContactActionResult {
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors
            .as_ref()
            .and_then(|errors| errors.get(&field))
            .map(String::as_str)
    }
}

/// Terminal state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Local validation failed, nothing was sent.
    Rejected,
    Accepted,
    /// The email api answered with a non-success status.
    RemoteRejected,
    /// The email api could not be reached.
    TransportFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: Outcome,
    /// HTTP status the result should be rendered with.
    pub status: u16,
    pub result: ContactActionResult,
}

impl Submission {
    pub(crate) fn rejected(field_errors: FieldErrors, values: ContactFormValues) -> Self {
        Self {
            outcome: Outcome::Rejected,
            status: 400,
            result: ContactActionResult {
                success: false,
                message: INVALID_FIELDS_MESSAGE.to_owned(),
                field_errors: Some(field_errors),
                values: Some(values),
            },
        }
    }

    pub(crate) fn accepted(message: Option<&str>) -> Self {
        Self {
            outcome: Outcome::Accepted,
            status: 200,
            result: ContactActionResult {
                success: true,
                message: message.unwrap_or(SENT_MESSAGE).to_owned(),
                field_errors: None,
                values: None,
            },
        }
    }

    pub(crate) fn remote_rejected(
        upstream_status: u16,
        message: Option<&str>,
        values: ContactFormValues,
    ) -> Self {
        Self {
            outcome: Outcome::RemoteRejected,
            status: if upstream_status >= 400 {
                upstream_status
            } else {
                500
            },
            result: ContactActionResult {
                success: false,
                message: message.unwrap_or(REJECTED_MESSAGE).to_owned(),
                field_errors: None,
                values: Some(values),
            },
        }
    }

    pub(crate) fn transport_failed(values: ContactFormValues) -> Self {
        Self {
            outcome: Outcome::TransportFailed,
            status: 500,
            result: ContactActionResult {
                success: false,
                message: TRANSPORT_FAILED_MESSAGE.to_owned(),
                field_errors: None,
                values: Some(values),
            },
        }
    }
}
