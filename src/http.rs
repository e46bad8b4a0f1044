//! HTTP collaborator seam.
//!
//! Tests talk to the remote API through the [`HttpSend`] capability rather
//! than a concrete client, so a suite can run against the live service
//! ([`ReqwestClient`]) or entirely in memory ([`ScriptedClient`]) without
//! changing the test body. The verifier itself performs no network IO;
//! timeouts and cancellation belong to the client implementation.

use serde_json::{Map, Value};

use crate::errors::SnapError;

/// HTTP methods the suites exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to the API under test.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn head(url: impl Into<String>) -> Self {
        Self::new(Method::Head, url)
    }

    pub fn options(url: impl Into<String>) -> Self {
        Self::new(Method::Options, url)
    }

    /// Attach a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body (and the matching content type).
    pub fn json_body(mut self, value: &Value) -> Self {
        self.body = Some(value.to_string());
        self.header("Content-Type", "application/json")
    }

    /// First header value with the given name, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response from the API under test.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Attach a header; used when scripting canned responses.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body; used when scripting canned responses.
    pub fn with_json(mut self, value: &Value) -> Self {
        self.body = value.to_string();
        self.with_header("Content-Type", "application/json")
    }

    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, SnapError> {
        serde_json::from_str(&self.body)
            .map_err(|e| SnapError::http("<response body>", format!("body is not JSON: {e}")))
    }

    /// The response headers as a JSON object, suitable for snapshotting.
    /// Later duplicates of a header name overwrite earlier ones.
    pub fn headers_value(&self) -> Value {
        let mut map = Map::new();
        for (k, v) in &self.headers {
            map.insert(k.clone(), Value::String(v.clone()));
        }
        Value::Object(map)
    }
}

/// The substitutable send capability every suite depends on.
pub trait HttpSend {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, SnapError>;
}

// ============================================================================
// LIVE CLIENT - blocking reqwest against the real service
// ============================================================================

/// Blocking HTTP client for runs against the live API.
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            inner: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSend for ReqwestClient {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, SnapError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        };

        let mut builder = self.inner.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .map_err(|e| SnapError::http(&request.url, e))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .map_err(|e| SnapError::http(&request.url, e))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

// ============================================================================
// SCRIPTED CLIENT - in-memory collaborator for network-free suites
// ============================================================================

/// In-memory [`HttpSend`] implementation serving canned responses keyed on
/// method and URL. Unmatched requests fail rather than silently returning
/// anything, so a suite cannot pass against a route it never scripted.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    routes: Vec<(Method, String, ApiResponse)>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for the given method and exact URL.
    pub fn route(mut self, method: Method, url: impl Into<String>, response: ApiResponse) -> Self {
        self.routes.push((method, url.into(), response));
        self
    }
}

impl HttpSend for ScriptedClient {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, SnapError> {
        self.routes
            .iter()
            .find(|(method, url, _)| *method == request.method && *url == request.url)
            .map(|(_, _, response)| response.clone())
            .ok_or_else(|| {
                SnapError::http(
                    &request.url,
                    format!("no scripted response for {} {}", request.method, request.url),
                )
            })
    }
}
