//! Request and response records of the SUPR API.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::SuprError;

/// Date format SUPR expects for project dates.
pub const SUPR_DATE_FORMAT: &str = "%Y-%m-%d";

/// How long a delivery project stays open.
pub const DELIVERY_PROJECT_MONTHS: u32 = 3;

/// A person record returned by the SUPR person search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuprPerson {
    /// SUPR person ID.
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of `GET /person/search/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSearchResponse {
    pub matches: Vec<SuprPerson>,
}

/// Pick the only person matching an email.
///
/// Zero matches and more than one match are both errors: an ambiguous PI is
/// never guessed.
pub fn select_sole_match(
    email: &str,
    mut matches: Vec<SuprPerson>,
) -> Result<SuprPerson, SuprError> {
    match matches.len() {
        0 => Err(SuprError::NoMatch {
            email: email.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        count => Err(SuprError::AmbiguousMatch {
            email: email.to_string(),
            count,
        }),
    }
}

/// Whether the delivered data contains sensitive personal information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    Sensitive,
    NotSensitive,
}

impl Sensitivity {
    pub fn is_sensitive(self) -> bool {
        matches!(self, Self::Sensitive)
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sensitive => write!(f, "sensitive"),
            Self::NotSensitive => write!(f, "not-sensitive"),
        }
    }
}

/// Body of `POST /ngi_delivery/project/create/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryProjectRequest {
    pub ngi_project_name: String,
    pub title: String,
    pub pi_id: u64,
    #[serde(with = "supr_date")]
    pub start_date: NaiveDate,
    #[serde(with = "supr_date")]
    pub end_date: NaiveDate,
    pub continuation_name: String,
    pub api_opaque_data: String,
    pub ngi_ready: bool,
    pub ngi_delivery_status: String,
    pub ngi_sensitive_data: bool,
}

impl DeliveryProjectRequest {
    /// Build the registration record for a project starting on `today`.
    pub fn new(project_name: &str, pi_id: u64, sensitivity: Sensitivity, today: NaiveDate) -> Self {
        Self {
            ngi_project_name: project_name.to_string(),
            title: delivery_title(project_name, today),
            pi_id,
            start_date: today,
            end_date: delivery_end_date(today),
            continuation_name: String::new(),
            api_opaque_data: String::new(),
            ngi_ready: false,
            ngi_delivery_status: String::new(),
            ngi_sensitive_data: sensitivity.is_sensitive(),
        }
    }
}

/// `DELIVERY_<project>_<YYYY-MM-DD>`
pub fn delivery_title(project_name: &str, start_date: NaiveDate) -> String {
    format!(
        "DELIVERY_{}_{}",
        project_name,
        start_date.format(SUPR_DATE_FORMAT)
    )
}

/// Three calendar months after `start_date`, clamped to the end of the
/// month when the day does not exist there.
pub fn delivery_end_date(start_date: NaiveDate) -> NaiveDate {
    start_date
        .checked_add_months(Months::new(DELIVERY_PROJECT_MONTHS))
        .unwrap_or(NaiveDate::MAX)
}

/// A delivery project as returned by SUPR after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryProject {
    /// Name SUPR assigned to the delivery project (e.g. "delivery00042").
    pub name: String,
    /// Every other field of the record, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

mod supr_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SUPR_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(SUPR_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, SUPR_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
