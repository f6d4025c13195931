//! Backend Command Wrappers
//!
//! Typed bindings to the backend's JSON endpoints, organized by domain.
//! Every exchange goes through [`ApiClient`], which owns two injected
//! capabilities: a [`Transport`] that moves requests over the wire and a
//! [`Session`] that decorates them with ambient credentials.

mod auth;
mod chat;
mod checklist;
mod fetch;
mod myth;
mod symptom;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{ClientConfig, HeaderPair};
use crate::error::ApiError;

// Re-export all public items
pub use auth::*;
pub use chat::*;
pub use checklist::*;
pub use fetch::*;
pub use myth::*;
pub use symptom::*;

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Build from a raw body. Non-JSON bodies become `null`.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text).unwrap_or(Value::Null)
        };
        Self::new(status, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body's `message` field, if any
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Turn a non-2xx response into [`ApiError::Rejected`], or
    /// [`ApiError::Status`] when the body carries no `message`
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        match self.message() {
            Some(message) => Err(ApiError::Rejected { status: self.status, message: message.to_string() }),
            None => Err(ApiError::Status(self.status)),
        }
    }

    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// ========================
// Capabilities
// ========================

/// Moves one request to the backend and returns whatever came back.
///
/// Only failures to obtain a response are errors here; status codes are
/// left for the caller to interpret.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Attaches ambient session state to outgoing requests
pub trait Session {
    fn attach(&self, request: &mut ApiRequest);
}

/// Session carried by browser cookies, optionally with one extra header
#[derive(Debug, Clone, Default)]
pub struct CookieSession {
    header: Option<HeaderPair>,
}

impl CookieSession {
    pub fn new(header: Option<HeaderPair>) -> Self {
        Self { header }
    }
}

impl Session for CookieSession {
    fn attach(&self, request: &mut ApiRequest) {
        if let Some(header) = &self.header {
            request.headers.push((header.name.clone(), header.value.clone()));
        }
    }
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct ApiClient<T, S = CookieSession> {
    transport: T,
    session: S,
}

/// Client wired to `window.fetch` and the page's cookies
pub type BrowserApi = ApiClient<FetchTransport, CookieSession>;

pub fn browser_api(config: &ClientConfig) -> BrowserApi {
    ApiClient::new(
        FetchTransport::new(config.api_base.clone()),
        CookieSession::new(config.csrf_header.clone()),
    )
}

impl<T: Transport, S: Session> ApiClient<T, S> {
    pub fn new(transport: T, session: S) -> Self {
        Self { transport, session }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Get, path)).await
    }

    /// POST without a body
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Post, path)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(ApiRequest::new(Method::Post, path).with_body(body)).await
    }

    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.session.attach(&mut request);
        log::debug!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.send(request).await?;
        log::debug!("-> HTTP {}", response.status);
        Ok(response)
    }
}
