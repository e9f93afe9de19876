use crate::enums::{StatusPageSort, StatusPageStatus};
use crate::pagination::PageParams;
use crate::status_page::StatusPageMonitors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPagesRequest {
    pub psps: Vec<i64>,
    pub page: PageParams,
}

impl StatusPagesRequest {
    pub fn for_id(id: i64) -> Self {
        Self::for_ids([id])
    }

    pub fn for_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            psps: ids.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatusPage {
    pub friendly_name: String,
    pub monitors: StatusPageMonitors,
    pub custom_domain: Option<String>,
    pub password: Option<String>,
    pub sort: Option<StatusPageSort>,
    pub hide_url_links: bool,
    pub status: Option<StatusPageStatus>,
}

impl NewStatusPage {
    pub fn new(friendly_name: impl Into<String>, monitors: StatusPageMonitors) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            monitors,
            custom_domain: None,
            password: None,
            sort: None,
            hide_url_links: false,
            status: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPageUpdate {
    pub id: i64,
    pub friendly_name: Option<String>,
    pub monitors: Option<StatusPageMonitors>,
    pub custom_domain: Option<String>,
    pub password: Option<String>,
    pub sort: Option<StatusPageSort>,
    pub status: Option<StatusPageStatus>,
}

impl StatusPageUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}
