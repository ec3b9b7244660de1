//! Shared test helpers for license tests.

#![allow(dead_code)]

use async_trait::async_trait;
use dlm_license::{
    LicenseClient, LicenseError, LicenseResult, LicenseServerConfig, LicenseTransport,
    MemoryLicenseStore, TransportResponse,
};
use dlm_types::{ProductId, SiteInstance};
use std::sync::{Arc, Mutex};

pub const SITE: &str = "https://shop.example.com";

pub fn product_id() -> ProductId {
    ProductId::parse("dlm-email-lock").unwrap()
}

pub fn site() -> SiteInstance {
    SiteInstance::parse(SITE).unwrap()
}

/// What the scripted transport answers with.
#[derive(Clone)]
pub enum Reply {
    Http(u16, String),
    Unreachable,
}

/// Transport that records every request and answers with a fixed reply.
pub struct ScriptedTransport {
    reply: Reply,
    calls: Mutex<Vec<Vec<(String, String)>>>,
}

impl ScriptedTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn json(status: u16, body: &str) -> Arc<Self> {
        Self::new(Reply::Http(status, body.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Query parameters of the last request.
    pub fn last_query(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub fn last_param(&self, name: &str) -> Option<String> {
        self.last_query()
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

#[async_trait]
impl LicenseTransport for ScriptedTransport {
    async fn get(&self, _url: &str, query: &[(&str, &str)]) -> LicenseResult<TransportResponse> {
        self.calls.lock().unwrap().push(
            query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        match &self.reply {
            Reply::Http(status, body) => Ok(TransportResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Unreachable => Err(LicenseError::Transport {
                detail: "connection refused".into(),
            }),
        }
    }
}

/// Client over a scripted transport and an in-memory store.
pub fn scripted_client(
    transport: Arc<ScriptedTransport>,
) -> (LicenseClient, Arc<MemoryLicenseStore>) {
    let store = Arc::new(MemoryLicenseStore::new());
    let client = LicenseClient::new(
        LicenseServerConfig::default(),
        site(),
        transport,
        store.clone(),
    );
    (client, store)
}
