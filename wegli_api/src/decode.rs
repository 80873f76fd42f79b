//! Response validation and JSON decoding shared by every endpoint.

use serde_json::{Map, Value};

use crate::errors::{Error, UnexpectedResponse};
use crate::http::HttpResponse;

/// Status code every successful API call answers with.
pub const EXPECTED_STATUS: u16 = 200;

/// Substring the `Content-Type` line must contain.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single decoded resource: JSON object keys mapped to their raw values.
pub type Mapping = Map<String, Value>;

/// A top-level JSON container an endpoint can be decoded into.
pub trait Payload: Sized {
    /// Converts an already parsed array or object. `None` when the container
    /// is not of the kind this payload expects.
    fn from_container(value: Value) -> Option<Self>;
}

impl Payload for Value {
    fn from_container(value: Value) -> Option<Self> {
        Some(value)
    }
}

/// An empty array decodes as an empty object.
impl Payload for Mapping {
    fn from_container(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map),
            Value::Array(items) if items.is_empty() => Some(Mapping::new()),
            _ => None,
        }
    }
}

impl Payload for Vec<Mapping> {
    fn from_container(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

/// Validates a response envelope and decodes its JSON body.
///
/// The checks run strictly in order and stop at the first failure:
/// status code, content type, body read, JSON parse, container shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDecoder {
    expected_status: u16,
    expected_content_type: String,
}

impl Default for ResponseDecoder {
    fn default() -> Self {
        Self::new(EXPECTED_STATUS, JSON_CONTENT_TYPE)
    }
}

impl ResponseDecoder {
    pub fn new(expected_status: u16, expected_content_type: impl Into<String>) -> Self {
        Self {
            expected_status,
            expected_content_type: expected_content_type.into(),
        }
    }

    pub fn expected_status(&self) -> u16 {
        self.expected_status
    }

    pub fn expected_content_type(&self) -> &str {
        &self.expected_content_type
    }

    /// Decodes `response` into `P`.
    ///
    /// Only the body read touches the transport; its error is returned as
    /// [`Error::Transport`] unchanged.
    pub fn decode<P, R>(&self, response: R) -> Result<P, Error<R::Error>>
    where
        P: Payload,
        R: HttpResponse,
    {
        let status = response.status_code();
        if status != self.expected_status {
            tracing::error!(
                "Unexpected status {} (expected {})",
                status,
                self.expected_status
            );
            return Err(UnexpectedResponse::UnexpectedStatus {
                actual: status,
                expected: self.expected_status,
            }
            .into());
        }

        let content_type = response.header_line("Content-Type");
        if !content_type.contains(self.expected_content_type.as_str()) {
            tracing::error!("Unexpected content type {:?}", content_type);
            return Err(UnexpectedResponse::UnexpectedContentType.into());
        }

        let body = response.text().map_err(Error::Transport)?;

        let value = match serde_json::from_str::<Value>(&body) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to parse response body: {}", e);
                return Err(UnexpectedResponse::InvalidJson { raw_body: body }.into());
            }
        };

        if !(value.is_array() || value.is_object()) {
            tracing::error!("Response JSON is a scalar, not a container");
            return Err(UnexpectedResponse::UnexpectedShape { raw_body: body }.into());
        }

        match P::from_container(value) {
            Some(payload) => Ok(payload),
            None => {
                tracing::error!("Response JSON container does not match the endpoint");
                Err(UnexpectedResponse::UnexpectedShape { raw_body: body }.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::json;

    use super::*;

    #[derive(thiserror::Error, Debug, PartialEq)]
    #[error("body stream reset")]
    struct StreamReset;

    struct FakeResponse<'a> {
        status: u16,
        content_type: &'a str,
        body: Result<&'a str, StreamReset>,
        reads: &'a Cell<u32>,
    }

    impl HttpResponse for FakeResponse<'_> {
        type Error = StreamReset;

        fn status_code(&self) -> u16 {
            self.status
        }

        fn header_line(&self, name: &str) -> String {
            if name.eq_ignore_ascii_case("content-type") {
                self.content_type.to_string()
            } else {
                String::new()
            }
        }

        fn text(self) -> Result<String, StreamReset> {
            self.reads.set(self.reads.get() + 1);
            self.body.map(str::to_string)
        }
    }

    fn response<'a>(
        status: u16,
        content_type: &'a str,
        body: &'a str,
        reads: &'a Cell<u32>,
    ) -> FakeResponse<'a> {
        FakeResponse {
            status,
            content_type,
            body: Ok(body),
            reads,
        }
    }

    fn decode_err(resp: FakeResponse<'_>) -> Error<StreamReset> {
        ResponseDecoder::default()
            .decode::<Value, _>(resp)
            .unwrap_err()
    }

    #[test]
    fn wrong_status_fails_before_reading_body() {
        let reads = Cell::new(0);
        for status in [401, 404, 500] {
            let err = decode_err(response(status, "application/json", "{}", &reads));
            assert_eq!(
                err.to_string(),
                format!("Server replied with the status code {status}, but 200 was expected.")
            );
        }
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn wrong_content_type_fails_before_reading_body() {
        let reads = Cell::new(0);
        let err = decode_err(response(200, "text/html", "{}", &reads));
        assert_eq!(err.to_string(), "Server replied not with JSON content.");
        assert_eq!(
            err.as_unexpected_response(),
            Some(&UnexpectedResponse::UnexpectedContentType)
        );
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn missing_content_type_is_rejected() {
        let reads = Cell::new(0);
        let err = decode_err(response(200, "", "{}", &reads));
        assert_eq!(err.to_string(), "Server replied not with JSON content.");
    }

    #[test]
    fn content_type_with_parameters_is_accepted() {
        let reads = Cell::new(0);
        let value: Value = ResponseDecoder::default()
            .decode(response(200, "application/json; charset=utf-8", "[]", &reads))
            .unwrap();
        assert_eq!(value, json!([]));
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn invalid_json_embeds_raw_body() {
        let reads = Cell::new(0);
        let err = decode_err(response(200, "application/json", "invalid json", &reads));
        assert_eq!(
            err.to_string(),
            "Response body contains no valid JSON: invalid json"
        );
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn scalar_json_is_rejected_with_array_wording() {
        let reads = Cell::new(0);
        let err = decode_err(response(
            200,
            "application/json",
            r#""this is not an array""#,
            &reads,
        ));
        assert_eq!(
            err.to_string(),
            r#"Response JSON does not contain an array: "this is not an array""#
        );

        for scalar in ["42", "true", "null"] {
            let err = decode_err(response(200, "application/json", scalar, &reads));
            assert_eq!(
                err.as_unexpected_response(),
                Some(&UnexpectedResponse::UnexpectedShape {
                    raw_body: scalar.to_string()
                })
            );
        }
    }

    #[test]
    fn object_is_returned_unchanged() {
        let reads = Cell::new(0);
        let body = r#"{"tbnr":"141312","penalty":null,"points":0,"nested":{"a":[1,2]}}"#;
        let map: Mapping = ResponseDecoder::default()
            .decode(response(200, "application/json", body, &reads))
            .unwrap();
        assert_eq!(
            Value::Object(map),
            json!({"tbnr": "141312", "penalty": null, "points": 0, "nested": {"a": [1, 2]}})
        );
    }

    #[test]
    fn object_keeps_server_key_order() {
        let reads = Cell::new(0);
        let body = r#"{"tbnr":"141312","description":"x","fine":"25.0","bkat":null}"#;
        let map: Mapping = ResponseDecoder::default()
            .decode(response(200, "application/json", body, &reads))
            .unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["tbnr", "description", "fine", "bkat"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), body);
    }

    #[test]
    fn list_items_keep_server_key_order() {
        let reads = Cell::new(0);
        let body = r#"[{"zip":"12305","name":"Berlin"},{"token":"b","city":"Hamburg","brand":null}]"#;
        let list: Vec<Mapping> = ResponseDecoder::default()
            .decode(response(200, "application/json", body, &reads))
            .unwrap();
        assert_eq!(serde_json::to_string(&list).unwrap(), body);
    }

    #[test]
    fn empty_array_decodes_to_empty_mapping() {
        let reads = Cell::new(0);
        let map: Mapping = ResponseDecoder::default()
            .decode(response(200, "application/json", "[]", &reads))
            .unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn array_of_objects_is_returned_in_order() {
        let reads = Cell::new(0);
        let body = r#"[{"token":"a"},{"token":"b"}]"#;
        let list: Vec<Mapping> = ResponseDecoder::default()
            .decode(response(200, "application/json", body, &reads))
            .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["token"], "a");
        assert_eq!(list[1]["token"], "b");
    }

    #[test]
    fn container_of_wrong_kind_is_rejected() {
        let reads = Cell::new(0);
        let err = ResponseDecoder::default()
            .decode::<Mapping, _>(response(200, "application/json", "[1]", &reads))
            .unwrap_err();
        assert_eq!(err.to_string(), "Response JSON does not contain an array: [1]");

        let err = ResponseDecoder::default()
            .decode::<Vec<Mapping>, _>(response(200, "application/json", "[[]]", &reads))
            .unwrap_err();
        assert_eq!(err.to_string(), "Response JSON does not contain an array: [[]]");

        let err = ResponseDecoder::default()
            .decode::<Vec<Mapping>, _>(response(200, "application/json", "[1,2]", &reads))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Response JSON does not contain an array: [1,2]"
        );
    }

    #[test]
    fn body_read_failure_is_a_transport_error() {
        let reads = Cell::new(0);
        let resp = FakeResponse {
            status: 200,
            content_type: "application/json",
            body: Err(StreamReset),
            reads: &reads,
        };
        let err = decode_err(resp);
        assert_eq!(err.into_transport(), Some(StreamReset));
    }

    #[test]
    fn custom_expectations_are_honoured() {
        let reads = Cell::new(0);
        let decoder = ResponseDecoder::new(201, "application/vnd.api+json");
        assert_eq!(decoder.expected_status(), 201);
        assert_eq!(decoder.expected_content_type(), "application/vnd.api+json");

        let err = decoder
            .decode::<Value, _>(response(200, "application/vnd.api+json", "{}", &reads))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server replied with the status code 200, but 201 was expected."
        );

        let value: Value = decoder
            .decode(response(201, "application/vnd.api+json", "{}", &reads))
            .unwrap();
        assert_eq!(value, json!({}));
    }
}
