#![allow(clippy::unwrap_used)]

//! Integration test for logger startup, isolated in its own process
//! because the global logger can only be installed once

use tg_server::{ServerError, logger};

use log::LevelFilter;
use tg_config::LogLevel;

/// WHAT: The first initialization installs fern at the configured level
/// WHY: Startup must not fail or report an error after the logger is set
#[test]
fn given_fresh_process_when_initializing_logger_then_level_applied_once() {
    // When
    let first = logger::initialize(LogLevel(LevelFilter::Debug), None, false);

    // Then
    assert!(first.is_ok(), "first initialize failed: {:?}", first.err());
    assert_eq!(log::max_level(), LevelFilter::Debug);

    // A second install is refused rather than silently ignored
    let second = logger::initialize(LogLevel(LevelFilter::Info), None, false);
    assert!(matches!(second, Err(ServerError::Logger { .. })));
    assert_eq!(log::max_level(), LevelFilter::Debug);
}
