// Mapping parsed arguments onto typed requests

use crate::cli::{ListArgs, MonitorsArgs};
use crate::commands::{alert_contacts_request, monitors_request, status_pages_request};

use models::{DEFAULT_LIMIT, DEFAULT_OFFSET, PageParams};

fn list(ids: Vec<i64>, offset: u32) -> ListArgs {
    ListArgs {
        ids,
        offset,
        limit: DEFAULT_LIMIT,
    }
}

/// **VALUE**: Verifies CLI flags become the matching request fields.
///
/// **BUG THIS CATCHES**: Would catch a flag that parses but never reaches the
/// request, so the remote never sees it.
#[test]
fn given_monitor_args_when_mapped_then_request_carries_filters() {
    // GIVEN: Ids, a search term, ratios and include flags
    let args = MonitorsArgs {
        list: list(vec![111, 222], DEFAULT_OFFSET),
        search: Some(String::from("shop")),
        ratios: vec![7, 30],
        logs: true,
        response_times: false,
        ssl: true,
    };

    // WHEN: Mapping
    let request = monitors_request(&args);

    // THEN: Everything carried over, the rest stays default
    assert_eq!(request.monitors, vec![111, 222]);
    assert_eq!(request.search.as_deref(), Some("shop"));
    assert_eq!(request.custom_uptime_ratios, vec![7, 30]);
    assert!(request.logs);
    assert!(request.ssl);
    assert!(!request.response_times);
    assert!(!request.alert_contacts);
    assert_eq!(request.page, PageParams::default());
}

#[test]
fn given_list_args_when_mapped_then_page_kept() {
    let args = list(vec![], 100);

    let contacts = alert_contacts_request(&args);
    let pages = status_pages_request(&args);

    assert!(contacts.alert_contacts.is_empty());
    assert_eq!(contacts.page, PageParams::new(100, DEFAULT_LIMIT));
    assert_eq!(pages.page.offset, 100);
}
