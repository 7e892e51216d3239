#![allow(dead_code)]

//! Test infrastructure for tg-server HTTP tests

use tg_auth::{IdentityRecord, SignatureVerifier, TokenCodec};
use tg_config::AuthConfig;
use tg_server::{AppState, build_router};

use axum_test::TestServer;

/// Bot token every test server is configured with
pub const TEST_BOT_TOKEN: &str = "123456:TEST-TOKEN";

/// TTL used by the test servers (1 hour)
pub const TEST_TTL_SECS: u64 = 3600;

/// Auth config with the test token and all defaults
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        bot_token: Some(TEST_BOT_TOKEN.to_string()),
        ttl_secs: TEST_TTL_SECS,
        ..Default::default()
    }
}

/// Create a TestServer with the default test configuration
pub fn create_test_server() -> TestServer {
    create_test_server_with_config(test_auth_config())
}

/// Create a TestServer with custom auth configuration
pub fn create_test_server_with_config(config: AuthConfig) -> TestServer {
    let state = AppState::from_config(&config).expect("Failed to build app state");

    TestServer::builder()
        .build(build_router(state))
        .expect("Failed to create test server")
}

/// Unsigned widget record issued `age_secs` seconds ago
pub fn record_issued_ago(age_secs: i64) -> IdentityRecord {
    IdentityRecord {
        id: 42,
        first_name: "Pavel".to_string(),
        last_name: "Durov".to_string(),
        username: "durov".to_string(),
        photo_url: "https://t.me/i/userpic/320/durov.jpg".to_string(),
        auth_date: chrono::Utc::now().timestamp() - age_secs,
        hash: String::new(),
    }
}

/// Record signed with the test bot token
pub fn signed(record: &IdentityRecord) -> IdentityRecord {
    SignatureVerifier::new(TEST_BOT_TOKEN).sign(record)
}

/// Freshly issued, correctly signed record
pub fn valid_record() -> IdentityRecord {
    signed(&record_issued_ago(0))
}

/// Token string for `record` with the default separator
pub fn token_for(record: &IdentityRecord) -> String {
    TokenCodec::default().encode(record)
}

/// Widget fields as query parameters, the way the widget redirect sends them
pub fn widget_query(record: &IdentityRecord) -> Vec<(&'static str, String)> {
    vec![
        ("id", record.id.to_string()),
        ("first_name", record.first_name.clone()),
        ("last_name", record.last_name.clone()),
        ("username", record.username.clone()),
        ("photo_url", record.photo_url.clone()),
        ("auth_date", record.auth_date.to_string()),
        ("hash", record.hash.clone()),
    ]
}
