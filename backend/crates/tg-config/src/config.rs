use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TGAUTH_CONFIG_DIR env var, else use ./.tgauth/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TGAUTH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TGAUTH_CONFIG_DIR env var > ./.tgauth/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;

        if self.logging.dir.contains("..") || Path::new(&self.logging.dir).is_absolute() {
            return Err(ConfigError::config(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs the bot token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        info!(
            "  auth: bot_token={}, ttl={}s",
            if self.auth.bot_token.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.ttl_secs
        );
        info!(
            "  auth: header={}, cookie={}, payload_cookie={}",
            self.auth.header_name, self.auth.cookie_name, self.auth.payload_cookie_name
        );
        info!(
            "  auth: separators token='{}' cookie='{}'",
            self.auth.token_separator, self.auth.cookie_separator
        );
        info!(
            "  auth: login={} -> {}, protected={}, unauthorized={}",
            self.auth.login_extractor,
            self.auth.login_sender,
            self.auth.protected_extractor,
            self.auth
                .unauthorized_redirect
                .as_deref()
                .map(|url| format!("redirect {url}"))
                .unwrap_or_else(|| "401".to_string())
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TGAUTH_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TGAUTH_SERVER_PORT", &mut self.server.port);

        // Auth
        Self::apply_env_option_string("TGAUTH_BOT_TOKEN", &mut self.auth.bot_token);
        Self::apply_env_parse("TGAUTH_TTL_SECS", &mut self.auth.ttl_secs);
        Self::apply_env_string("TGAUTH_HEADER_NAME", &mut self.auth.header_name);
        Self::apply_env_string("TGAUTH_COOKIE_NAME", &mut self.auth.cookie_name);
        Self::apply_env_string(
            "TGAUTH_PAYLOAD_COOKIE_NAME",
            &mut self.auth.payload_cookie_name,
        );
        Self::apply_env_parse("TGAUTH_TOKEN_SEPARATOR", &mut self.auth.token_separator);
        Self::apply_env_parse("TGAUTH_COOKIE_SEPARATOR", &mut self.auth.cookie_separator);
        Self::apply_env_option_string(
            "TGAUTH_UNAUTHORIZED_REDIRECT",
            &mut self.auth.unauthorized_redirect,
        );
        Self::apply_env_parse("TGAUTH_LOGIN_EXTRACTOR", &mut self.auth.login_extractor);
        Self::apply_env_parse("TGAUTH_LOGIN_SENDER", &mut self.auth.login_sender);
        Self::apply_env_parse(
            "TGAUTH_PROTECTED_EXTRACTOR",
            &mut self.auth.protected_extractor,
        );

        // Logging
        Self::apply_env_parse("TGAUTH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TGAUTH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TGAUTH_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
