use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, VariantArray};
use validator::{Validate, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Form fields of the contact page, named as they appear on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    VariantArray,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    SenderName,
    SenderEmail,
    Subject,
    Message,
}

impl Field {
    fn from_struct_field(name: &str) -> Option<Self> {
        match name {
            "sender_name" => Some(Self::SenderName),
            "sender_email" => Some(Self::SenderEmail),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

fn validate_sender_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("required").with_message("Email is required.".into()));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("email")
            .with_message("Please enter a valid email address.".into()));
    }

    Ok(())
}

/// Values of one contact form submission, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormValues {
    pub sender_name: String,
    #[validate(custom(function = "validate_sender_email"))]
    pub sender_email: String,
    #[validate(length(min = 1, message = "Subject is required."))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required."))]
    pub message: String,
}

impl ContactFormValues {
    /// Reads the contact fields out of raw form input. Missing fields become
    /// empty strings and every value is trimmed.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let read = |field: Field| {
            form.get(field.as_ref())
                .map(|value| value.trim().to_owned())
                .unwrap_or_default()
        };

        Self {
            sender_name: read(Field::SenderName),
            sender_email: read(Field::SenderEmail),
            subject: read(Field::Subject),
            message: read(Field::Message),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SenderName => &self.sender_name,
            Field::SenderEmail => &self.sender_email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Collects every failing field at once; an empty map means the values
    /// can be sent.
    pub fn field_errors(&self) -> FieldErrors {
        let Err(errors) = self.validate() else {
            return FieldErrors::new();
        };

        errors
            .field_errors()
            .iter()
            .filter_map(|(name, errors)| {
                let field = Field::from_struct_field(name)?;
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value.".to_string());

                Some((field, message))
            })
            .collect()
    }
}
