//! Notice records: violation reports submitted by the authenticated user.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Charge;

/// Processing state of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    Open,
    Disabled,
    Analyzing,
    Shared,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeStatus::Open => write!(f, "open"),
            NoticeStatus::Disabled => write!(f, "disabled"),
            NoticeStatus::Analyzing => write!(f, "analyzing"),
            NoticeStatus::Shared => write!(f, "shared"),
            NoticeStatus::Other => write!(f, "other"),
        }
    }
}

/// Photo attached to a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub filename: String,
    pub url: String,
}

/// A user-submitted report returned by `/api/notices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Unique notice token, also used as path parameter.
    pub token: String,

    pub status: NoticeStatus,

    pub street: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Licence plate of the reported vehicle.
    pub registration: Option<String>,
    pub color: Option<String>,
    pub brand: Option<String>,

    /// The offence, embedded in full.
    pub charge: Option<Charge>,
    pub tbnr: Option<String>,

    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,

    pub note: Option<String>,

    #[serde(default)]
    pub photos: Vec<Photo>,

    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// When the notice was mailed to the district, if it was.
    pub sent_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub vehicle_empty: bool,
    #[serde(default)]
    pub hazard_lights: bool,
    #[serde(default)]
    pub expired_tuv: bool,
    #[serde(default)]
    pub expired_eco: bool,
    #[serde(default)]
    pub over_2_8_tons: bool,
}

impl Notice {
    /// Duration of the observed violation, when both ends are known.
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
