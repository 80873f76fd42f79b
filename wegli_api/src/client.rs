//! HTTP client for the weg.li API.

use url::Url;

use crate::{
    decode::{Mapping, Payload, ResponseDecoder},
    http::{DefaultRequestFactory, HttpTransport, Method, Request, RequestFactory},
    transport::ReqwestTransport,
    BaseUrlError, Error,
};

/// Base URL of the production weg.li service.
pub const DEFAULT_BASE_URL: &str = "https://www.weg.li";

/// Header carrying the API key on authenticated calls.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Synchronous client for the weg.li API.
///
/// Every operation performs exactly one request through the injected
/// transport and returns either the decoded JSON payload or an error. There
/// is no retrying, caching or pagination.
pub struct Client<T, F = DefaultRequestFactory> {
    transport: T,
    request_factory: F,
    /// Base URL for the API. Defaults to `https://www.weg.li`.
    base_api_url: String,
    api_key: Option<String>,
    decoder: ResponseDecoder,
}

impl Client<ReqwestTransport> {
    /// Creates a client on the bundled reqwest transport, pointing at production.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self::create(ReqwestTransport::new()?, DefaultRequestFactory))
    }
}

impl<T, F> Client<T, F>
where
    T: HttpTransport,
    F: RequestFactory,
{
    /// Creates a client from a transport and a request factory.
    pub fn create(transport: T, request_factory: F) -> Self {
        Self {
            transport,
            request_factory,
            base_api_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            decoder: ResponseDecoder::default(),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(
        transport: T,
        request_factory: F,
        base_url: &str,
    ) -> Result<Self, BaseUrlError> {
        let url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {:?}: {}", base_url, e);
            e
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            tracing::error!("Unsupported base URL scheme {:?}", url.scheme());
            return Err(BaseUrlError::UnsupportedScheme(url.scheme().to_string()));
        }
        let mut client = Self::create(transport, request_factory);
        client.base_api_url = base_url.trim_end_matches('/').to_string();
        Ok(client)
    }

    /// Sets the API key sent with every following request. Calling it again
    /// replaces the previous key.
    pub fn authenticate(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Builds the request for `path` (e.g. `/api/charges`).
    ///
    /// Always asks for JSON; adds the API key header when authenticated.
    pub fn build_request(&self, method: Method, path: &str) -> Request {
        let url = format!("{}{}", self.base_api_url, path);
        let request = self
            .request_factory
            .create_request(method, &url)
            .with_header("Accept", "application/json");

        match &self.api_key {
            Some(key) => request.with_header(API_KEY_HEADER, key.as_str()),
            None => request,
        }
    }

    fn get<P: Payload>(&self, path: &str) -> Result<P, Error<T::Error>> {
        let request = self.build_request(Method::Get, path);
        tracing::debug!(
            authenticated = self.api_key.is_some(),
            "{} {}",
            request.method(),
            request.url()
        );
        let response = self.transport.send(request).map_err(Error::Transport)?;
        self.decoder.decode(response)
    }

    /// Lists all districts (`GET /api/districts`).
    pub fn list_districts(&self) -> Result<Vec<Mapping>, Error<T::Error>> {
        self.get("/api/districts")
    }

    /// Fetches a single district by its postal code (`GET /api/districts/{zip}`).
    pub fn get_district_by_zip(&self, zip: &str) -> Result<Mapping, Error<T::Error>> {
        self.get(&format!("/api/districts/{}", zip))
    }

    /// Lists the whole charge catalogue (`GET /api/charges`).
    pub fn list_charges(&self) -> Result<Vec<Mapping>, Error<T::Error>> {
        self.get("/api/charges")
    }

    /// Fetches a single charge by its TBNR (`GET /api/charges/{tbnr}`).
    pub fn get_charge_by_tbnr(&self, tbnr: &str) -> Result<Mapping, Error<T::Error>> {
        self.get(&format!("/api/charges/{}", tbnr))
    }

    /// Lists the notices of the authenticated user (`GET /api/notices`).
    pub fn list_own_notices(&self) -> Result<Vec<Mapping>, Error<T::Error>> {
        self.get("/api/notices")
    }

    /// Fetches one of the user's notices by token (`GET /api/notices/{token}`).
    pub fn get_notice_by_token(&self, token: &str) -> Result<Mapping, Error<T::Error>> {
        self.get(&format!("/api/notices/{}", token))
    }
}
