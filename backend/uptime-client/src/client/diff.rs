//! Reduce an update to the fields that differ from the entity's current state.
//!
//! The current state comes from a lookup made just before the update is
//! sent; a concurrent change between the two calls is not detected.

use models::{
    AlertContact, AlertContactAssignment, AlertContactUpdate, MaintenanceWindow,
    MaintenanceWindowUpdate, Monitor, MonitorUpdate, StatusPage, StatusPageUpdate,
};

/// `desired`, unless it equals `current`.
pub(crate) fn changed<T: PartialEq>(desired: Option<T>, current: Option<&T>) -> Option<T> {
    desired.filter(|value| current != Some(value))
}

/// Like [`changed`], ignoring element order.
fn changed_set<T, K, F>(desired: Option<Vec<T>>, current: Option<Vec<T>>, key: F) -> Option<Vec<T>>
where
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    let mut desired = desired?;
    desired.sort_by_key(key);
    let Some(mut current) = current else {
        return Some(desired);
    };
    current.sort_by_key(key);

    let same = desired.len() == current.len()
        && desired.iter().zip(&current).all(|(a, b)| key(a) == key(b));
    (!same).then_some(desired)
}

fn assignment_key(assignment: &AlertContactAssignment) -> (i64, u32, u32) {
    (assignment.id, assignment.threshold, assignment.recurrence)
}

fn current_assignments(monitor: &Monitor) -> Option<Vec<AlertContactAssignment>> {
    let minutes = |value: Option<i64>| value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0);
    monitor.alert_contacts.as_ref().map(|contacts| {
        contacts
            .iter()
            .map(|contact| AlertContactAssignment {
                id: contact.id,
                threshold: minutes(contact.threshold),
                recurrence: minutes(contact.recurrence),
            })
            .collect()
    })
}

/// Fields the API does not report back (auth type, method, SSL handling) are
/// always kept.
pub(crate) fn monitor_changes(update: &MonitorUpdate, current: &Monitor) -> MonitorUpdate {
    MonitorUpdate {
        id: update.id,
        friendly_name: changed(update.friendly_name.clone(), current.friendly_name.as_ref()),
        url: changed(update.url.clone(), current.url.as_ref()),
        sub_type: changed(update.sub_type, current.sub_type.as_ref()),
        port: changed(update.port, current.port.as_ref()),
        keyword_type: changed(update.keyword_type, current.keyword_type.as_ref()),
        keyword_case_type: changed(update.keyword_case_type, current.keyword_case_type.as_ref()),
        keyword_value: changed(update.keyword_value.clone(), current.keyword_value.as_ref()),
        interval: changed(update.interval, current.interval.as_ref()),
        timeout: changed(update.timeout, current.timeout.as_ref()),
        http_username: changed(update.http_username.clone(), current.http_username.as_ref()),
        http_password: changed(update.http_password.clone(), current.http_password.as_ref()),
        http_auth_type: update.http_auth_type,
        http_method: update.http_method,
        alert_contacts: changed_set(
            update.alert_contacts.clone(),
            current_assignments(current),
            assignment_key,
        ),
        mwindows: changed_set(
            update.mwindows.clone(),
            current
                .mwindows
                .as_ref()
                .map(|windows| windows.iter().map(|window| window.id).collect()),
            |id: &i64| *id,
        ),
        custom_http_headers: changed(
            update.custom_http_headers.clone(),
            current.custom_http_headers.as_ref(),
        ),
        ignore_ssl_errors: update.ignore_ssl_errors,
        paused: update
            .paused
            .filter(|&paused| current.status.is_none() || paused != current.is_paused()),
    }
}

pub(crate) fn alert_contact_changes(
    update: &AlertContactUpdate,
    current: &AlertContact,
) -> AlertContactUpdate {
    AlertContactUpdate {
        id: update.id,
        friendly_name: changed(update.friendly_name.clone(), current.friendly_name.as_ref()),
        value: changed(update.value.clone(), current.value.as_ref()),
    }
}

pub(crate) fn maintenance_window_changes(
    update: &MaintenanceWindowUpdate,
    current: &MaintenanceWindow,
) -> MaintenanceWindowUpdate {
    MaintenanceWindowUpdate {
        id: update.id,
        friendly_name: changed(update.friendly_name.clone(), current.friendly_name.as_ref()),
        value: changed(update.value.clone(), current.value.as_ref()),
        start_time: changed(update.start_time.clone(), current.start_time.as_ref()),
        duration: changed(update.duration, current.duration.as_ref()),
    }
}

/// The domain and password are write-only and always kept.
pub(crate) fn status_page_changes(
    update: &StatusPageUpdate,
    current: &StatusPage,
) -> StatusPageUpdate {
    StatusPageUpdate {
        id: update.id,
        friendly_name: changed(update.friendly_name.clone(), current.friendly_name.as_ref()),
        monitors: changed(update.monitors.clone(), current.monitors.as_ref()),
        custom_domain: update.custom_domain.clone(),
        password: update.password.clone(),
        sort: changed(update.sort, current.sort.as_ref()),
        status: changed(update.status, current.status.as_ref()),
    }
}
