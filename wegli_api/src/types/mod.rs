//! Typed views of the records the API returns.
//!
//! Client operations hand back raw [`Mapping`]s so no field is ever lost.
//! These models are an opt-in layer on top: convert with [`Record::from_map`]
//! when typed access is more convenient.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decode::Mapping;

mod charge;
pub use self::charge::{Charge, Tbnr};

mod district;
pub use self::district::District;

mod notice;
pub use self::notice::{Notice, NoticeStatus, Photo};

/// A record that can be built from a decoded JSON object.
pub trait Record: DeserializeOwned {
    fn from_map(map: Mapping) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(map))
    }

    /// Converts every mapping, failing on the first one that does not fit.
    fn from_maps(maps: Vec<Mapping>) -> Result<Vec<Self>, serde_json::Error> {
        maps.into_iter().map(Self::from_map).collect()
    }
}

impl Record for Charge {}
impl Record for District {}
impl Record for Notice {}
