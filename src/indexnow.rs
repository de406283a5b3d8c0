//! IndexNow search engine notification.

use std::time::Duration;

use reqwest::{Client, header};
use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::config::{IndexNowConfig, SiteConfig};

const KEY_PATH: &str = "/indexnow.xml";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum IndexNowError {
    #[error("public url '{0}' has no host")]
    MissingHost(String),

    #[error("invalid public url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexNowPayload {
    pub host: String,
    pub key: String,
    pub key_location: String,
    pub url_list: Vec<String>,
}

/// Whether every engine accepted a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    All,
    Partially,
}

impl Submitted {
    pub fn message(&self) -> &'static str {
        match self {
            Submitted::All => "URL submitted successfully",
            Submitted::Partially => "Some submissions failed",
        }
    }
}

#[derive(Clone)]
pub struct IndexNow {
    client: Client,
    key: String,
    host: String,
    key_location: String,
    engines: Vec<String>,
}

impl IndexNow {
    /// `None` when no key is configured.
    pub fn new(config: &IndexNowConfig, site: &SiteConfig) -> Result<Option<Self>, IndexNowError> {
        if !config.is_enabled() {
            return Ok(None);
        }

        let host = Url::parse(&site.public_url)?
            .host_str()
            .map(str::to_owned)
            .ok_or_else(|| IndexNowError::MissingHost(site.public_url.to_owned()))?;

        let client = Client::builder().timeout(TIMEOUT).build()?;

        Ok(Some(Self {
            client,
            key: config.key.to_owned(),
            host,
            key_location: site.url(KEY_PATH),
            engines: config.engines.to_owned(),
        }))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self, url: &str) -> IndexNowPayload {
        IndexNowPayload {
            host: self.host.to_owned(),
            key: self.key.to_owned(),
            key_location: self.key_location.to_owned(),
            url_list: vec![url.to_owned()],
        }
    }

    /// Sends `url` to every engine at once. Fails if any engine can't be
    /// reached.
    pub async fn submit(&self, url: &str) -> Result<Submitted, IndexNowError> {
        let body = serde_json::to_vec(&self.payload(url))?;

        let requests = self.engines.iter().map(|engine| {
            self.client
                .post(engine)
                .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
                .body(body.clone())
                .send()
        });

        let responses = futures::future::join_all(requests)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        for response in responses.iter().filter(|r| !r.status().is_success()) {
            tracing::warn!(
                engine = %response.url(),
                status = response.status().as_u16(),
                "IndexNow engine rejected submission"
            );
        }

        if responses.iter().all(|r| r.status().is_success()) {
            Ok(Submitted::All)
        } else {
            Ok(Submitted::Partially)
        }
    }
}

/// Asks the site running at `base_url` to forward `url` to IndexNow.
pub async fn notify_index_now(url: &str, base_url: &str) -> bool {
    let endpoint = format!("{}{KEY_PATH}", base_url.trim_end_matches('/'));

    match post_url(&endpoint, url).await {
        Ok(accepted) => accepted,
        Err(err) => {
            tracing::error!("IndexNow submission failed: {err}");
            false
        }
    }
}

async fn post_url(endpoint: &str, url: &str) -> Result<bool, reqwest::Error> {
    let client = Client::builder().timeout(TIMEOUT).build()?;
    let response = client
        .post(endpoint)
        .json(&json!({ "url": url }))
        .send()
        .await?;

    Ok(response.status().is_success())
}
