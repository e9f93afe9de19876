use crate::enums::AlertContactType;
use crate::pagination::PageParams;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertContactsRequest {
    pub alert_contacts: Vec<i64>,
    pub page: PageParams,
}

impl AlertContactsRequest {
    pub fn for_id(id: i64) -> Self {
        Self::for_ids([id])
    }

    pub fn for_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            alert_contacts: ids.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlertContact {
    pub contact_type: AlertContactType,
    pub value: String,
    pub friendly_name: String,
}

impl NewAlertContact {
    pub fn new(
        contact_type: AlertContactType,
        value: impl Into<String>,
        friendly_name: impl Into<String>,
    ) -> Self {
        Self {
            contact_type,
            value: value.into(),
            friendly_name: friendly_name.into(),
        }
    }
}

/// Parameters for `editAlertContact`. The type cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertContactUpdate {
    pub id: i64,
    pub friendly_name: Option<String>,
    pub value: Option<String>,
}

impl AlertContactUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}
