//! Browser Transport
//!
//! gloo-net implementation of the core transport, always sending cookie
//! credentials, plus the browser confirm dialog.

use apostas::api::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use apostas::controller::Confirm;
use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

/// Local storage key holding an alternate API origin
pub const API_URL_KEY: &str = "apostas_api_url";

/// Get the API base URL from local storage, or same-origin when unset
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_default();
    normalize_base(&url)
}

/// Remove the trailing slash so paths can be appended directly
fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[derive(Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include);

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError(format!("Network error: {}", e)))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Read error: {}", e)))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

/// `window.confirm`; a missing window counts as "no"
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base(" https://apostas.example.com// "), "https://apostas.example.com");
    }
}
