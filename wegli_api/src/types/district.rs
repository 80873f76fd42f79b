//! District records: the authorities that receive notices for a postal code.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A municipal district returned by `/api/districts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub name: String,

    /// Postal code, also used as path parameter.
    pub zip: String,

    /// Address notices for this district are mailed to.
    pub email: Option<String>,

    /// Licence plate prefixes registered in this district.
    #[serde(default)]
    pub prefixes: Vec<String>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    #[serde(default)]
    pub aliases: Option<Vec<String>>,

    #[serde(default)]
    pub personal_email: bool,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub updated_at: Option<DateTime<FixedOffset>>,
}
