#![allow(dead_code)]

use async_trait::async_trait;
use frontend::api::{HttpRequest, HttpResponse, HttpTransport};
use frontend::{ApiClient, AppConfig, Environment, MemoryStorage};
use shared::ApiError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub const BASE_URL: &str = "http://api.test/api";

/// Replays queued replies and records every request it was handed.
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) {
        self.reply_raw(status, &body.to_string());
    }

    pub fn reply_raw(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail_network(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no reply queued".to_string())))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::get_config(Environment::Development).with_api_base_url(BASE_URL)
}

pub fn create_test_client() -> (ApiClient, Rc<FakeTransport>, Rc<MemoryStorage>) {
    let transport = FakeTransport::new();
    let storage = Rc::new(MemoryStorage::new());
    let client = ApiClient::with_backends(&test_config(), transport.clone(), storage.clone());
    (client, transport, storage)
}
