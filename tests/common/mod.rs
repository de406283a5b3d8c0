#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::anyhow;
use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use vibedoctor::{
    AppState,
    config::{
        AppConfig, Config, DatabaseConfig, EmailConfig, IndexNowConfig, ObservabilityConfig,
        ServerConfig, SiteConfig,
    },
    db::Database,
    indexnow::IndexNow,
};
use vibedoctor_contact::{EmailApi, EmailApiResponse, EmailRequest};

pub const PUBLIC_URL: &str = "https://vibedoctor.dev";

/// How the stubbed email api answers.
#[derive(Clone)]
pub enum Reply {
    Status(u16, Option<Value>),
    Unreachable,
}

pub struct StubEmailApi {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<EmailRequest>>,
}

impl StubEmailApi {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<EmailRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailApi for StubEmailApi {
    async fn send(&self, request: &EmailRequest) -> vibedoctor_contact::Result<EmailApiResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            Reply::Status(status, payload) => Ok(EmailApiResponse {
                status: *status,
                payload: payload.clone(),
            }),
            Reply::Unreachable => Err(anyhow!("connection refused").into()),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub email_api: Arc<StubEmailApi>,
}

pub fn config() -> Config {
    Config {
        app: AppConfig::default(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        site: SiteConfig {
            name: "VibeDoctor".to_string(),
            public_url: PUBLIC_URL.to_string(),
        },
        email: EmailConfig {
            api_url: "http://127.0.0.1:9/send".to_string(),
            timeout_secs: 1,
        },
        indexnow: IndexNowConfig::default(),
        database: DatabaseConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(reply: Reply) -> TestApp {
    create_test_app_with(config(), reply, Database::disabled())
}

pub fn create_test_app_with(config: Config, reply: Reply, database: Database) -> TestApp {
    let email_api = StubEmailApi::new(reply);
    let indexnow = IndexNow::new(&config.indexnow, &config.site).unwrap();

    let state = AppState {
        config,
        email_api: email_api.clone(),
        database,
        indexnow,
    };

    TestApp {
        router: vibedoctor::server::app(state),
        email_api,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, form: &[(&str, &str)], accept: &str) -> Response {
        let body = serde_urlencoded::to_string(form).unwrap();

        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .header("accept", accept)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("senderName", "Ada"),
        ("senderEmail", "ada@example.com"),
        ("subject", "Pilot"),
        ("message", "We would like a demo."),
    ]
}
