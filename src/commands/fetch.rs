//! `window.fetch` transport

use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::ApiError;

/// Sends requests with the browser's fetch API.
///
/// Cookies for the same origin ride along, which is how the backend's login
/// session reaches every call.
#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        request
            .headers
            .iter()
            .fold(builder.credentials(RequestCredentials::SameOrigin), |builder, (name, value)| {
                builder.header(name, value)
            })
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = self.builder(&request);
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;
        let status = response.status();

        // A body that cannot be read still counts as a received response
        let text = response.text().await.unwrap_or_default();

        Ok(ApiResponse::from_text(status, &text))
    }
}
