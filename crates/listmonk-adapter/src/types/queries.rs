/*
[INPUT]:  Caller-supplied list filters
[OUTPUT]: Query strings for paginated GET endpoints
[POS]:    Data layer - query parameter shapes
[UPDATE]: When API filter parameters change
*/

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Free-form filters for endpoints without a typed query
pub type Filters = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Page size; `All` disables pagination (`per_page=all`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerPage {
    Count(u32),
    All,
}

impl From<u32> for PerPage {
    fn from(count: u32) -> Self {
        PerPage::Count(count)
    }
}

impl FromStr for PerPage {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("all") {
            return Ok(PerPage::All);
        }
        raw.trim()
            .parse()
            .map(PerPage::Count)
            .map_err(|_| format!("per_page must be a number or \"all\", got {raw:?}"))
    }
}

impl Serialize for PerPage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PerPage::Count(count) => serializer.serialize_u32(*count),
            PerPage::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for PerPage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(count) => Ok(PerPage::Count(count)),
            Raw::Text(text) => text.parse().map_err(D::Error::custom),
        }
    }
}

/// Filters for `GET /subscribers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriberQuery {
    /// SQL expression evaluated against the subscribers table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<PerPage>,
}

/// Filters for `GET /lists`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<PerPage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal: Option<bool>,
}
