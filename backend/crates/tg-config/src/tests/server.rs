use crate::Config;
use crate::tests::{EnvGuard, setup_valid_env};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server
// =========================================================================

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error_mentions_port() {
    // Given
    let _env = setup_valid_env();
    let _port = EnvGuard::set("TGAUTH_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("server.port"));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let _env = setup_valid_env();
    let _port = EnvGuard::set("TGAUTH_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_empty_host_when_validate_then_error() {
    // Given
    let _env = setup_valid_env();
    let _host = EnvGuard::set("TGAUTH_SERVER_HOST", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("server.host"));
}
