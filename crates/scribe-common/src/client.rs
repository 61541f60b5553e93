//! Thin wrapper over `reqwest` carrying the endpoint and session token.

use reqwest::Method;

use crate::config::Config;

/// Header carrying the session token on authenticated requests.
pub const SESSION_HEADER: &str = "SESSION-ID";

/// Shared HTTP plumbing for the upload adapter and the remote post store.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    endpoint: String,
    session_id: Option<String>,
}

impl HttpClient {
    pub fn new(config: &Config) -> Self {
        Self {
            inner: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            session_id: config.session_id.clone(),
        }
    }

    /// Absolute URL for a path under the configured endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    /// A request builder with the session header already applied.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.inner.request(method, self.url(path));
        if let Some(session_id) = &self.session_id {
            builder = builder.header(SESSION_HEADER, session_id);
        }
        builder
    }
}
