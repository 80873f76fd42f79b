//! Charge records: entries of the federal catalogue of traffic offences.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Catalogue number of a charge (e.g. "141312").
pub type Tbnr = String;

/// A catalogued offence with its fine, returned by `/api/charges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Catalogue number, also used as path parameter.
    pub tbnr: Tbnr,

    /// Offence text as it appears on a notice.
    pub description: String,

    /// Fine in euros, as a decimal string (e.g. "25.0").
    pub fine: String,

    /// Legal references.
    #[serde(default)]
    pub bkat: Option<String>,

    pub penalty: Option<String>,

    pub fap: Option<String>,

    /// Demerit points in the central register.
    #[serde(default)]
    pub points: i64,

    pub valid_from: Option<DateTime<FixedOffset>>,

    pub valid_to: Option<DateTime<FixedOffset>>,

    pub implementation: Option<i64>,

    pub classification: Option<i64>,

    pub variant_table_id: Option<i64>,

    pub rule_id: Option<i64>,

    pub table_id: Option<i64>,

    #[serde(default)]
    pub required_refinements: Option<String>,

    #[serde(default)]
    pub number_required_refinements: i64,

    pub max_fine: Option<String>,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Charge {
    /// Fine in euros, if the string parses as a number.
    pub fn fine_amount(&self) -> Option<f64> {
        self.fine.parse().ok()
    }

    /// Whether the charge is valid at `at`. Open bounds count as unbounded.
    pub fn is_valid_at(&self, at: DateTime<FixedOffset>) -> bool {
        self.valid_from.map_or(true, |from| from <= at) && self.valid_to.map_or(true, |to| at < to)
    }
}
