mod client;
mod decode;
mod errors;
pub mod http;
mod transport;
pub mod types;
pub use self::client::{Client, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use self::decode::{Mapping, Payload, ResponseDecoder, EXPECTED_STATUS, JSON_CONTENT_TYPE};
pub use self::errors::{BaseUrlError, Error, UnexpectedResponse};
pub use self::transport::{ReqwestResponse, ReqwestTransport};
