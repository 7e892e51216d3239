use serde::{Deserialize, Serialize};

/// Identity snapshot as delivered by the Telegram Login Widget.
///
/// Field names match the widget payload, see
/// <https://core.telegram.org/widgets/login#receiving-authorization-data>.
/// Whether a record is trustworthy depends on the bot token and TTL it is
/// checked against, so nothing about validity is stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityRecord {
    /// Telegram user id
    pub id: i64,
    pub first_name: String,
    /// Empty when the user has no last name
    pub last_name: String,
    /// Empty when the user has no username
    pub username: String,
    /// Empty when the user has no public photo
    pub photo_url: String,
    /// Issuance time (Unix seconds)
    pub auth_date: i64,
    /// Lowercase hex HMAC-SHA256 over the check string
    pub hash: String,
}

impl IdentityRecord {
    /// Build a record from widget `key=value` pairs.
    ///
    /// Unknown keys are ignored and integers that do not parse become zero:
    /// a corrupted record still reaches signature verification, which is
    /// where it gets rejected.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = IdentityRecord::default();
        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                "id" => record.id = parse_lenient(&value),
                "first_name" => record.first_name = value,
                "last_name" => record.last_name = value,
                "username" => record.username = value,
                "photo_url" => record.photo_url = value,
                "auth_date" => record.auth_date = parse_lenient(&value),
                "hash" => record.hash = value,
                _ => {}
            }
        }
        record
    }

    /// Data-check-string of the widget contract: `key=value` lines in
    /// alphabetical key order joined by `\n`, `hash` excluded, empty
    /// optional fields skipped.
    pub fn check_string(&self) -> String {
        let mut lines = Vec::with_capacity(6);
        lines.push(format!("auth_date={}", self.auth_date));
        lines.push(format!("first_name={}", self.first_name));
        lines.push(format!("id={}", self.id));

        if !self.last_name.is_empty() {
            lines.push(format!("last_name={}", self.last_name));
        }
        if !self.photo_url.is_empty() {
            lines.push(format!("photo_url={}", self.photo_url));
        }
        if !self.username.is_empty() {
            lines.push(format!("username={}", self.username));
        }

        lines.join("\n")
    }
}

pub(crate) fn parse_lenient(value: &str) -> i64 {
    value.trim().parse().unwrap_or_default()
}
