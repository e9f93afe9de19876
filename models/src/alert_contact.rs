use crate::enums::{AlertContactStatus, AlertContactType};
use crate::pagination::Pagination;
use crate::wire;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertContact {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "friendly_name", default)]
    pub friendly_name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "wire::opt_code")]
    pub contact_type: Option<AlertContactType>,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<AlertContactStatus>,
    /// Address, phone number or URL, depending on the type.
    #[serde(rename = "value", default, deserialize_with = "wire::opt_string")]
    pub value: Option<String>,
}

/// `getAlertContacts` payload.
///
/// This endpoint reports `offset`/`limit`/`total` at the top level instead of
/// inside a `pagination` object; both layouts decode to `pagination`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireAlertContactsPage")]
pub struct AlertContactsPage {
    #[serde(rename = "pagination")]
    pub pagination: Option<Pagination>,
    #[serde(rename = "alert_contacts")]
    pub alert_contacts: Vec<AlertContact>,
}

#[derive(Deserialize)]
struct WireAlertContactsPage {
    #[serde(rename = "pagination", default)]
    pagination: Option<Pagination>,
    #[serde(rename = "offset", default, deserialize_with = "wire::opt_u32")]
    offset: Option<u32>,
    #[serde(rename = "limit", default, deserialize_with = "wire::opt_u32")]
    limit: Option<u32>,
    #[serde(rename = "total", default, deserialize_with = "wire::opt_u32")]
    total: Option<u32>,
    #[serde(rename = "alert_contacts", default)]
    alert_contacts: Vec<AlertContact>,
}

impl From<WireAlertContactsPage> for AlertContactsPage {
    fn from(raw: WireAlertContactsPage) -> Self {
        let flat = Pagination {
            offset: raw.offset,
            limit: raw.limit,
            total: raw.total,
        };
        let pagination = raw
            .pagination
            .or_else(|| (flat != Pagination::default()).then_some(flat));

        Self {
            pagination,
            alert_contacts: raw.alert_contacts,
        }
    }
}

/// Acknowledgement of an alert contact mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertContactRef {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<AlertContactStatus>,
}
