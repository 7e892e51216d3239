use crate::extract::{IdentityExtractor, InboundRequest};

use serde_json::Value;
use tg_auth::{AuthError, AuthResult, IdentityRecord};

/// Reads widget fields from a JSON object body, as posted by the widget's
/// `onauth` callback.
///
/// Strings and numbers are both accepted for every field; anything else is
/// treated as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBodyExtractor;

impl IdentityExtractor for JsonBodyExtractor {
    fn extract(&self, request: &InboundRequest<'_>) -> AuthResult<IdentityRecord> {
        let Some(body) = request.body.filter(|body| !body.is_empty()) else {
            return Err(AuthError::no_data());
        };

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AuthError::malformed_payload(format!("invalid JSON: {e}")))?;

        let Value::Object(fields) = value else {
            return Err(AuthError::malformed_payload("expected a JSON object"));
        };

        let pairs = fields
            .into_iter()
            .filter_map(|(key, value)| field_text(value).map(|text| (key, text)));

        Ok(IdentityRecord::from_pairs(pairs))
    }
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
