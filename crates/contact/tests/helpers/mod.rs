#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use serde_json::Value;
use vibedoctor_contact::{EmailApi, EmailApiResponse, EmailRequest};

pub enum Reply {
    Status(u16, Option<Value>),
    Unreachable,
}

/// Email api double that records every request it receives.
pub struct StubEmailApi {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<EmailRequest>>,
}

impl StubEmailApi {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn ok(payload: Value) -> Self {
        Self::new(Reply::Status(200, Some(payload)))
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
            Reply::Unreachable => Err(anyhow::anyhow!("connection refused").into()),
        }
    }
}

pub fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn valid_form() -> HashMap<String, String> {
    form(&[
        ("senderName", ""),
        ("senderEmail", "bob@example.com"),
        ("subject", "Hi"),
        ("message", "Hello there"),
    ])
}
