mod auth_config;
mod config;
mod error;
mod extractor_kind;
mod log_level;
mod logging_config;
mod sender_kind;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use extractor_kind::ExtractorKind;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use sender_kind::SenderKind;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "TGAUTH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".tgauth";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

/// 12 hours, the lifetime used by the widget examples
const DEFAULT_TTL_SECS: u64 = 12 * 60 * 60;
const DEFAULT_HEADER_NAME: &str = "Authorization";
const DEFAULT_COOKIE_NAME: &str = "tgauth-token";
const DEFAULT_PAYLOAD_COOKIE_NAME: &str = "X-telegram-data";
const DEFAULT_TOKEN_SEPARATOR: char = '$';
const DEFAULT_COOKIE_SEPARATOR: char = '&';

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
