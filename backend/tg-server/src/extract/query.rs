use crate::extract::{IdentityExtractor, InboundRequest};

use std::collections::HashMap;

use axum::extract::Query;
use tg_auth::{AuthResult, IdentityRecord};

/// Reads widget fields straight from the query string
/// (`?id=..&first_name=..&auth_date=..&hash=..`).
///
/// Missing or malformed parameters become zero values, so this never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExtractor;

impl IdentityExtractor for QueryExtractor {
    fn extract(&self, request: &InboundRequest<'_>) -> AuthResult<IdentityRecord> {
        let params = Query::<HashMap<String, String>>::try_from_uri(&request.parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_else(|e| {
                log::debug!("Unreadable query string, treating as empty: {}", e);
                HashMap::new()
            });

        Ok(IdentityRecord::from_pairs(params))
    }
}
