//! Transport seam between [`Client`](crate::Client) and whatever actually speaks HTTP.
//!
//! The client never touches the network itself. It asks a [`RequestFactory`]
//! for a [`Request`], hands it to an [`HttpTransport`], and reads the result
//! back through the [`HttpResponse`] capabilities. Any HTTP stack can be
//! plugged in by implementing these two traits; [`ReqwestTransport`] is the
//! bundled one.
//!
//! [`ReqwestTransport`]: crate::ReqwestTransport

use std::fmt;

/// HTTP method of an outgoing request. The API is read-only, so only `GET`
/// is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing HTTP request described as plain data.
///
/// Built fresh for every call and owned by that call. Headers keep their
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Returns the request with `name` set to `value`.
    ///
    /// Header names compare case-insensitively; an existing header with the
    /// same name is replaced in place.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Creates bare requests for a method and an absolute URL.
pub trait RequestFactory {
    fn create_request(&self, method: Method, url: &str) -> Request;
}

/// Factory producing a [`Request`] with no headers attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    fn create_request(&self, method: Method, url: &str) -> Request {
        Request::new(method, url)
    }
}

impl<F: RequestFactory + ?Sized> RequestFactory for &F {
    fn create_request(&self, method: Method, url: &str) -> Request {
        (**self).create_request(method, url)
    }
}

/// Read-only view of a received response.
///
/// Status and headers may be inspected any number of times. The body is read
/// by [`text`](HttpResponse::text), which consumes the response, so it can
/// only ever be read once.
pub trait HttpResponse {
    /// Error raised while streaming the body.
    type Error;

    fn status_code(&self) -> u16;

    /// All values of header `name` joined with `", "`, or an empty string
    /// when the header is absent.
    fn header_line(&self, name: &str) -> String;

    /// Reads the whole body as text.
    fn text(self) -> Result<String, Self::Error>;
}

/// Sends a request and returns the raw response.
///
/// Timeouts, TLS and connection handling are entirely the transport's
/// business. Its error type reaches the caller untouched.
pub trait HttpTransport {
    type Error;
    type Response: HttpResponse<Error = Self::Error>;

    fn send(&self, request: Request) -> Result<Self::Response, Self::Error>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    type Error = T::Error;
    type Response = T::Response;

    fn send(&self, request: Request) -> Result<Self::Response, Self::Error> {
        (**self).send(request)
    }
}
