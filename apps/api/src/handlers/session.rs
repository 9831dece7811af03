use axum::Json;
use axum::extract::Extension;
use permatrix_core::UserIdentity;

use crate::dto::UserIdentityResponse;

/// Returns the caller resolved by the auth middleware.
pub async fn me_handler(Extension(user): Extension<UserIdentity>) -> Json<UserIdentityResponse> {
    Json(UserIdentityResponse::from(user))
}
