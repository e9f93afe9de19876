//! Runs one parsed command and renders its payload as JSON.

use crate::cli::{Command, ListArgs, MonitorsArgs};
use crate::error::UptimectlError;

use models::{
    AlertContactsRequest, MaintenanceWindowsRequest, MonitorsRequest, StatusPagesRequest,
};
use uptime_client::UptimeClient;

use log::debug;
use serde_json::Value;

pub fn monitors_request(args: &MonitorsArgs) -> MonitorsRequest {
    MonitorsRequest {
        search: args.search.clone(),
        custom_uptime_ratios: args.ratios.clone(),
        logs: args.logs,
        response_times: args.response_times,
        ssl: args.ssl,
        page: args.list.page(),
        ..MonitorsRequest::for_ids(args.list.ids.iter().copied())
    }
}

pub fn alert_contacts_request(args: &ListArgs) -> AlertContactsRequest {
    AlertContactsRequest {
        page: args.page(),
        ..AlertContactsRequest::for_ids(args.ids.iter().copied())
    }
}

pub fn maintenance_windows_request(args: &ListArgs) -> MaintenanceWindowsRequest {
    MaintenanceWindowsRequest {
        page: args.page(),
        ..MaintenanceWindowsRequest::for_ids(args.ids.iter().copied())
    }
}

pub fn status_pages_request(args: &ListArgs) -> StatusPagesRequest {
    StatusPagesRequest {
        page: args.page(),
        ..StatusPagesRequest::for_ids(args.ids.iter().copied())
    }
}

/// Execute `command` and return its payload as JSON.
pub async fn execute(client: &UptimeClient, command: &Command) -> Result<Value, UptimectlError> {
    debug!("Running {command:?}");

    let payload = match command {
        Command::Account => serde_json::to_value(client.get_account_details().await?)?,
        Command::Monitors(args) => {
            serde_json::to_value(client.get_monitors(&monitors_request(args)).await?)?
        }
        Command::AlertContacts(args) => serde_json::to_value(
            client
                .get_alert_contacts(&alert_contacts_request(args))
                .await?,
        )?,
        Command::Mwindows(args) => serde_json::to_value(
            client
                .get_maintenance_windows(&maintenance_windows_request(args))
                .await?,
        )?,
        Command::Psps(args) => serde_json::to_value(
            client
                .get_status_pages(&status_pages_request(args))
                .await?,
        )?,
        Command::Pause { id } => serde_json::to_value(client.pause_monitor(*id).await?)?,
        Command::Resume { id } => serde_json::to_value(client.resume_monitor(*id).await?)?,
        Command::ResetMonitor { id } => serde_json::to_value(client.reset_monitor(*id).await?)?,
        Command::DeleteMonitor { id } => serde_json::to_value(client.delete_monitor(*id).await?)?,
    };

    Ok(payload)
}
