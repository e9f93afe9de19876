use crate::{ModelError, UptimeDurations};

/// **VALUE**: Verifies the `up-down-paused` triplet splits in the documented order
/// and joins back to the exact wire string.
///
/// **BUG THIS CATCHES**: Would catch a reordering of the components, which would
/// silently report downtime as uptime.
#[test]
fn given_triplet_string_when_parsed_then_components_are_up_down_paused() {
    // GIVEN: The wire form
    let raw = "100-20-5";

    // WHEN: Parsing and re-joining
    let durations: UptimeDurations = raw.parse().unwrap();

    // THEN: Components match and Display reproduces the input
    assert_eq!(
        durations,
        UptimeDurations {
            up: 100,
            down: 20,
            paused: 5
        }
    );
    assert_eq!(durations.to_string(), raw);
    assert_eq!(durations.total(), 125);
}

#[test]
fn given_wrong_part_count_when_parsed_then_returns_validation_error() {
    for raw in ["100-20", "1-2-3-4", "", "a-b-c"] {
        let result = raw.parse::<UptimeDurations>();
        match result {
            Err(ModelError::Validation { message, .. }) => {
                assert!(message.contains(raw), "message should quote input: {message}")
            }
            Ok(parsed) => panic!("'{raw}' should not parse, got {parsed:?}"),
        }
    }
}

#[test]
fn given_durations_when_serialized_then_uses_wire_string() {
    let durations = UptimeDurations {
        up: 7,
        down: 0,
        paused: 3,
    };

    assert_eq!(serde_json::to_string(&durations).unwrap(), "\"7-0-3\"");
}

/// **VALUE**: Verifies `total()` on remote values near `u64::MAX` does not panic.
///
/// **BUG THIS CATCHES**: Would catch plain addition in `total()`, which overflows
/// on a triplet the parser happily accepts.
#[test]
fn given_triplet_near_u64_max_when_totalled_then_saturates() {
    // GIVEN: A triplet whose sum exceeds u64
    let durations: UptimeDurations = "18446744073709551615-1-0".parse().unwrap();

    // WHEN/THEN: The total clamps instead of overflowing
    assert_eq!(durations.total(), u64::MAX);
}
