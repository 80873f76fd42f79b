//! Blocking reqwest implementation of [`HttpTransport`].

use std::time::Duration;

use crate::http::{HttpResponse, HttpTransport, Method, Request};

/// Request timeout applied by [`ReqwestTransport::new`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("wegli_api/", env!("CARGO_PKG_VERSION"));

/// Sends requests with a blocking `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Builds a transport with a 30-second timeout and the crate's user agent.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                e
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    type Error = reqwest::Error;
    type Response = ReqwestResponse;

    fn send(&self, request: Request) -> Result<ReqwestResponse, reqwest::Error> {
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
        };

        let mut builder = self.client.request(method, request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder.send().map(ReqwestResponse)
    }
}

/// Response handed out by [`ReqwestTransport`].
pub struct ReqwestResponse(reqwest::blocking::Response);

impl HttpResponse for ReqwestResponse {
    type Error = reqwest::Error;

    fn status_code(&self) -> u16 {
        self.0.status().as_u16()
    }

    fn header_line(&self, name: &str) -> String {
        self.0
            .headers()
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn text(self) -> Result<String, reqwest::Error> {
        self.0.text()
    }
}
