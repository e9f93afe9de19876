use crate::enums::{StatusPageSort, StatusPageStatus};
use crate::pagination::Pagination;
use crate::wire;

use serde::{Deserialize, Serialize, Serializer};

/// Which monitors a public status page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusPageMonitors {
    #[default]
    All,
    Only(Vec<i64>),
}

impl StatusPageMonitors {
    /// `0` for all monitors, otherwise the hyphen-joined ids. An empty
    /// selection has no wire form.
    pub fn wire_value(&self) -> Option<String> {
        match self {
            StatusPageMonitors::All => Some(String::from("0")),
            StatusPageMonitors::Only(ids) if ids.is_empty() => None,
            StatusPageMonitors::Only(ids) => Some(wire::hyphen_join(ids)),
        }
    }
}

impl Serialize for StatusPageMonitors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StatusPageMonitors::All => serializer.serialize_i64(0),
            StatusPageMonitors::Only(ids) => ids.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPage {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "friendly_name", default)]
    pub friendly_name: Option<String>,
    #[serde(rename = "monitors", default, deserialize_with = "wire::opt_status_page_monitors")]
    pub monitors: Option<StatusPageMonitors>,
    #[serde(rename = "sort", default, deserialize_with = "wire::opt_code")]
    pub sort: Option<StatusPageSort>,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<StatusPageStatus>,
    #[serde(rename = "standard_url", default)]
    pub standard_url: Option<String>,
    #[serde(rename = "custom_url", default)]
    pub custom_url: Option<String>,
}

/// `getPSPs` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPagesPage {
    #[serde(rename = "pagination", default)]
    pub pagination: Option<Pagination>,
    #[serde(rename = "psps", default)]
    pub psps: Vec<StatusPage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPageRef {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<StatusPageStatus>,
}
