//! Outbound HTTP client for catalog reads.
//!
//! A thin wrapper over Spin's outbound HTTP with automatic JSON handling.
//! All storefront reads are independent, idempotent GETs; there is no write
//! surface here.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// HTTP client for making outbound read requests.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL prepended to all request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }
}

/// A builder for constructing GET requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    #[allow(dead_code)] // Used in the wasm32 target
    url: String,
    #[allow(dead_code)] // Used in the wasm32 target
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: String) -> Self {
        Self {
            url,
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let mut request = Request::builder();
        request.method(SpinMethod::Get).uri(&self.url);
        for (key, value) in &self.headers {
            request.header(key.as_str(), value.as_str());
        }
        let request = request.build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request (non-WASM stub for tests and host builds).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        Ok(Response::new(200, HashMap::new(), Vec::new()))
    }
}

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(404, b"").is_success());
        assert!(!make_response(500, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(serde::Deserialize)]
        struct Row {
            id: String,
        }
        let rows: Vec<Row> = make_response(200, br#"[{"id":"1"},{"id":"2"}]"#)
            .json()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"[]").error_for_status().is_ok());
        let err = make_response(401, b"unauthorized").error_for_status();
        assert!(matches!(
            err,
            Err(FetchError::HttpError { status: 401, .. })
        ));
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let resp = Response::new(200, headers, Vec::new());
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn test_base_url_join() {
        let client = FetchClient::new().with_base_url("https://api.example.com/");
        let builder = client.get("/rest/v1/products");
        assert_eq!(builder.url, "https://api.example.com/rest/v1/products");

        // Absolute URLs pass through untouched.
        let builder = client.get("https://other.example.com/x");
        assert_eq!(builder.url, "https://other.example.com/x");
    }

    #[test]
    fn test_default_headers_applied() {
        let client = FetchClient::new().with_default_header("apikey", "secret");
        let builder = client.get("https://api.example.com/");
        assert_eq!(builder.headers.get("apikey").map(String::as_str), Some("secret"));
    }
}
