use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How an issued token is delivered to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderKind {
    Plain,
    Json,
    Cookie,
    CookiePayload,
}

impl SenderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
            Self::Cookie => "cookie",
            Self::CookiePayload => "cookie_payload",
        }
    }
}

impl FromStr for SenderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "cookie" => Ok(Self::Cookie),
            "cookie_payload" => Ok(Self::CookiePayload),
            other => Err(format!("unknown sender '{other}'")),
        }
    }
}

impl fmt::Display for SenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
