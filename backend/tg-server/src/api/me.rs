use crate::CurrentUser;

use tg_auth::IdentityRecord;

use axum::Json;

/// GET /me - The logged-in user's widget data
pub async fn me(CurrentUser(user): CurrentUser) -> Json<IdentityRecord> {
    Json(user)
}
