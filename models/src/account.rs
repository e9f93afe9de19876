use crate::wire;

use serde::{Deserialize, Serialize};

/// Account summary returned by `getAccountDetails`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    #[serde(rename = "email", default)]
    pub email: Option<String>,
    #[serde(rename = "user_id", default, deserialize_with = "wire::opt_i64")]
    pub user_id: Option<i64>,
    #[serde(rename = "firstname", default)]
    pub first_name: Option<String>,
    #[serde(rename = "sms_credits", default, deserialize_with = "wire::opt_i64")]
    pub sms_credits: Option<i64>,
    #[serde(rename = "monitor_limit", default, deserialize_with = "wire::opt_i64")]
    pub monitor_limit: Option<i64>,
    /// Shortest check interval the plan allows, in minutes.
    #[serde(rename = "monitor_interval", default, deserialize_with = "wire::opt_i64")]
    pub monitor_interval: Option<i64>,
    #[serde(rename = "up_monitors", default, deserialize_with = "wire::opt_i64")]
    pub up_monitors: Option<i64>,
    #[serde(rename = "down_monitors", default, deserialize_with = "wire::opt_i64")]
    pub down_monitors: Option<i64>,
    #[serde(rename = "paused_monitors", default, deserialize_with = "wire::opt_i64")]
    pub paused_monitors: Option<i64>,
    #[serde(rename = "total_monitors_count", default, deserialize_with = "wire::opt_i64")]
    pub total_monitors_count: Option<i64>,
}
