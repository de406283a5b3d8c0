//! Outbound side of the contact form: the email delivery api.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::ContactFormValues;

/// JSON body posted to the email delivery api.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub sender_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    pub subject: String,
    pub message: String,
}

impl From<&ContactFormValues> for EmailRequest {
    fn from(values: &ContactFormValues) -> Self {
        Self {
            sender_email: values.sender_email.to_owned(),
            sender_name: Some(values.sender_name.to_owned()).filter(|name| !name.is_empty()),
            subject: values.subject.to_owned(),
            message: values.message.to_owned(),
        }
    }
}

/// Status and (optional) JSON payload returned by the email delivery api.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailApiResponse {
    pub status: u16,
    pub payload: Option<Value>,
}

impl EmailApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.payload
            .as_ref()
            .and_then(|payload| payload.get(key))
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn message(&self) -> Option<&str> {
        self.text("message")
    }

    pub fn error(&self) -> Option<&str> {
        self.text("error")
    }
}

#[async_trait]
pub trait EmailApi: Send + Sync {
    /// Sends one request. An `Err` means the api could not be reached at
    /// all; any HTTP answer, successful or not, is an `Ok`.
    async fn send(&self, request: &EmailRequest) -> crate::Result<EmailApiResponse>;
}

/// [`EmailApi`] over HTTP, posting JSON to a configured endpoint.
#[derive(Clone)]
pub struct HttpEmailApi {
    client: Client,
    endpoint: Url,
}

impl HttpEmailApi {
    pub fn new(endpoint: Url, timeout: Duration) -> crate::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        tracing::info!(
            endpoint = %endpoint,
            timeout_secs = timeout.as_secs(),
            "Email api client initialized"
        );

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmailApi for HttpEmailApi {
    async fn send(&self, request: &EmailRequest) -> crate::Result<EmailApiResponse> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();

        // Bodies that are not JSON are treated as missing.
        let payload = response.json::<Value>().await.ok();

        Ok(EmailApiResponse { status, payload })
    }
}
