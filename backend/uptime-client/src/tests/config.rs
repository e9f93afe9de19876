use crate::UPTIME_API_BASE_URL;
use crate::config::{CONFIG_FILE_NAME, ClientConfig};
use crate::error::config::ConfigError;

use std::time::Duration;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file is not an error.
///
/// **WHY THIS MATTERS**: Most users never write a config file; the client must
/// fall back to the public endpoint.
#[test]
fn given_no_config_file_when_loaded_then_defaults() {
    // GIVEN: An empty directory
    let dir = TempDir::new().unwrap();

    // WHEN: Loading config
    let config = ClientConfig::load(dir.path()).unwrap();

    // THEN: Defaults apply
    assert_eq!(config.base_url, UPTIME_API_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn given_partial_config_file_when_loaded_then_missing_fields_default() {
    // GIVEN: A file that only overrides the base URL
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "base_url = \"http://127.0.0.1:9000/v2/\"\n",
    )
    .unwrap();

    // WHEN: Loading config
    let config = ClientConfig::load(dir.path()).unwrap();

    // THEN: The override is kept and the timeout defaults
    assert_eq!(config.base_url, "http://127.0.0.1:9000/v2/");
    assert_eq!(config.timeout_secs, 30);
}

/// **VALUE**: Verifies malformed TOML is reported rather than silently defaulted.
///
/// **BUG THIS CATCHES**: Would catch `load()` swallowing parse errors and pointing
/// the client at the public API when the user meant a test server.
#[test]
fn given_malformed_config_when_loaded_then_parse_error() {
    // GIVEN: Broken TOML
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "base_url = ").unwrap();

    // WHEN: Loading config
    let result = ClientConfig::load(dir.path());

    // THEN: Parse error
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_non_http_base_url_when_validated_then_rejected() {
    let config = ClientConfig {
        base_url: String::from("ftp://example.com/v2/"),
        ..ClientConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_out_of_range_timeout_when_validated_then_rejected() {
    for timeout_secs in [0, 301] {
        let config = ClientConfig {
            timeout_secs,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err(), "timeout {timeout_secs} accepted");
    }
}
