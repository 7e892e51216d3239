use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_COOKIE_SEPARATOR,
    DEFAULT_HEADER_NAME, DEFAULT_PAYLOAD_COOKIE_NAME, DEFAULT_TOKEN_SEPARATOR, DEFAULT_TTL_SECS,
    ExtractorKind, SenderKind,
};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bot token from @BotFather, the widget signing secret
    pub bot_token: Option<String>,
    /// Maximum age of `auth_date` before data counts as expired
    pub ttl_secs: u64,
    /// Header carrying the token on protected requests
    pub header_name: String,
    /// Cookie carrying the token string
    pub cookie_name: String,
    /// Cookie carrying the `key=value` payload
    pub payload_cookie_name: String,
    pub token_separator: char,
    pub cookie_separator: char,
    /// Redirect target for unauthorized protected requests (None = 401)
    pub unauthorized_redirect: Option<String>,
    pub login_extractor: ExtractorKind,
    pub login_sender: SenderKind,
    pub protected_extractor: ExtractorKind,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            ttl_secs: DEFAULT_TTL_SECS,
            header_name: String::from(DEFAULT_HEADER_NAME),
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            payload_cookie_name: String::from(DEFAULT_PAYLOAD_COOKIE_NAME),
            token_separator: DEFAULT_TOKEN_SEPARATOR,
            cookie_separator: DEFAULT_COOKIE_SEPARATOR,
            unauthorized_redirect: None,
            login_extractor: ExtractorKind::Query,
            login_sender: SenderKind::Json,
            protected_extractor: ExtractorKind::Header,
        }
    }
}

// Never print the bot token
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("ttl_secs", &self.ttl_secs)
            .field("header_name", &self.header_name)
            .field("cookie_name", &self.cookie_name)
            .field("payload_cookie_name", &self.payload_cookie_name)
            .field("token_separator", &self.token_separator)
            .field("cookie_separator", &self.cookie_separator)
            .field("unauthorized_redirect", &self.unauthorized_redirect)
            .field("login_extractor", &self.login_extractor)
            .field("login_sender", &self.login_sender)
            .field("protected_extractor", &self.protected_extractor)
            .finish()
    }
}

impl AuthConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.bot_token.as_deref() {
            None => {
                return Err(ConfigError::auth(
                    "auth.bot_token is required (set TGAUTH_BOT_TOKEN or [auth] bot_token)",
                ));
            }
            Some(token) if token.trim().is_empty() => {
                return Err(ConfigError::auth("auth.bot_token cannot be empty"));
            }
            Some(_) => {}
        }

        if self.ttl_secs == 0 {
            return Err(ConfigError::auth("auth.ttl_secs must be greater than 0"));
        }

        for (field, name) in [
            ("auth.header_name", &self.header_name),
            ("auth.cookie_name", &self.cookie_name),
            ("auth.payload_cookie_name", &self.payload_cookie_name),
        ] {
            if !is_http_token(name) {
                return Err(ConfigError::auth(format!(
                    "{} must be a non-empty HTTP token, got '{}'",
                    field, name
                )));
            }
        }

        if !is_valid_separator(self.token_separator) {
            return Err(ConfigError::auth(format!(
                "auth.token_separator must be ASCII punctuation other than '-', '_', '.', '~', '%', got '{}'",
                self.token_separator
            )));
        }

        if self.cookie_separator == '=' || !is_valid_separator(self.cookie_separator) {
            return Err(ConfigError::auth(format!(
                "auth.cookie_separator must be ASCII punctuation other than '=', '-', '_', '.', '~', '%', got '{}'",
                self.cookie_separator
            )));
        }

        if let Some(redirect) = &self.unauthorized_redirect {
            if redirect.trim().is_empty() {
                return Err(ConfigError::auth(
                    "auth.unauthorized_redirect cannot be empty when set",
                ));
            }
            // Sent verbatim as the Location header
            if redirect.chars().any(char::is_control) {
                return Err(ConfigError::auth(
                    "auth.unauthorized_redirect cannot contain control characters",
                ));
            }
        }

        if !self.protected_extractor.is_token_based() {
            return Err(ConfigError::auth(format!(
                "auth.protected_extractor must be header, cookie or cookie_payload, got '{}'",
                self.protected_extractor
            )));
        }

        Ok(())
    }
}

/// Separators may not survive percent-encoding of a field value
fn is_valid_separator(separator: char) -> bool {
    separator.is_ascii_punctuation() && !matches!(separator, '-' | '_' | '.' | '~' | '%')
}

/// RFC 7230 token: visible ASCII without delimiters
fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| {
            b.is_ascii_graphic() && !b"\"(),/:;<=>?@[\\]{}".contains(&b)
        })
}
