//! Error types for the API client.

/// The server answered, but not the way a successful call looks.
///
/// The messages are part of the public contract and are matched verbatim by
/// callers, so keep them stable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnexpectedResponse {
    /// The status code differs from the expected one.
    #[error("Server replied with the status code {actual}, but {expected} was expected.")]
    UnexpectedStatus { actual: u16, expected: u16 },
    /// The `Content-Type` line does not mention JSON.
    #[error("Server replied not with JSON content.")]
    UnexpectedContentType,
    /// The body is not parseable JSON. Carries the raw body.
    #[error("Response body contains no valid JSON: {raw_body}")]
    InvalidJson { raw_body: String },
    /// The body is JSON, but not a container of the expected kind.
    #[error("Response JSON does not contain an array: {raw_body}")]
    UnexpectedShape { raw_body: String },
}

/// Errors returned by [`Client`](crate::Client) operations.
///
/// `E` is the transport's own error type. Both variants are transparent:
/// `Display` and `source()` are those of the wrapped value.
#[derive(thiserror::Error, Debug)]
pub enum Error<E> {
    /// The transport failed to deliver the request or to read the body.
    #[error(transparent)]
    Transport(E),
    /// The response failed validation.
    #[error(transparent)]
    UnexpectedResponse(#[from] UnexpectedResponse),
}

impl<E> Error<E> {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns the validation failure, if that is what this error is.
    pub fn as_unexpected_response(&self) -> Option<&UnexpectedResponse> {
        match self {
            Error::UnexpectedResponse(e) => Some(e),
            Error::Transport(_) => None,
        }
    }

    /// Returns the transport's original error value.
    pub fn into_transport(self) -> Option<E> {
        match self {
            Error::Transport(e) => Some(e),
            Error::UnexpectedResponse(_) => None,
        }
    }
}

/// Reasons a base URL handed to [`Client::with_base_url`](crate::Client::with_base_url) is refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BaseUrlError {
    #[error("Invalid base URL: {0}")]
    Parse(#[from] url::ParseError),
    /// Only `http` and `https` can reach the API.
    #[error("Unsupported base URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug, PartialEq)]
    #[error("connection refused")]
    struct Refused;

    #[test]
    fn unexpected_status_message() {
        let err = UnexpectedResponse::UnexpectedStatus {
            actual: 401,
            expected: 200,
        };
        assert_eq!(
            err.to_string(),
            "Server replied with the status code 401, but 200 was expected."
        );
    }

    #[test]
    fn shape_message_keeps_array_wording() {
        let err = UnexpectedResponse::UnexpectedShape {
            raw_body: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Response JSON does not contain an array: 42");
    }

    #[test]
    fn base_url_error_messages() {
        let err = BaseUrlError::UnsupportedScheme("mailto".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported base URL scheme 'mailto', expected http or https"
        );
        let err: BaseUrlError = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid base URL: "));
    }

    #[test]
    fn transport_error_is_transparent() {
        let err: Error<Refused> = Error::Transport(Refused);
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.is_transport());
        assert!(err.as_unexpected_response().is_none());
        assert_eq!(err.into_transport(), Some(Refused));
    }

    #[test]
    fn unexpected_response_converts_into_error() {
        let err: Error<Refused> = UnexpectedResponse::UnexpectedContentType.into();
        assert_eq!(err.to_string(), "Server replied not with JSON content.");
        assert_eq!(
            err.as_unexpected_response(),
            Some(&UnexpectedResponse::UnexpectedContentType)
        );
        assert!(err.into_transport().is_none());
    }
}
