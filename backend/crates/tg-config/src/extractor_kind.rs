use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Where an identity is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    /// Widget fields as query parameters
    Query,
    /// Widget fields as a JSON object body
    Json,
    /// Token string in the configured header
    Header,
    /// Token string in the configured cookie
    Cookie,
    /// `key=value` payload in the configured payload cookie
    CookiePayload,
}

impl ExtractorKind {
    /// Token-based sources carry an already issued token
    pub fn is_token_based(&self) -> bool {
        matches!(self, Self::Header | Self::Cookie | Self::CookiePayload)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Json => "json",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::CookiePayload => "cookie_payload",
        }
    }
}

impl FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "json" => Ok(Self::Json),
            "header" => Ok(Self::Header),
            "cookie" => Ok(Self::Cookie),
            "cookie_payload" => Ok(Self::CookiePayload),
            other => Err(format!("unknown extractor '{other}'")),
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
