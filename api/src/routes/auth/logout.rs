use actix_web::{web, HttpResponse};
use log::{error, info};

use tg_shared::ErrorResponse;

use crate::app::AppState;
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the session record behind the presented token, which invalidates
/// the token before its expiry. Requires authentication via Bearer token in
/// the Authorization header.
///
/// # Response
///
/// - 204 No Content: Session revoked
/// - 401 Unauthorized: Missing, invalid, expired or already revoked token
/// - 500 Internal Server Error: The session store could not be reached
pub async fn logout(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.issuer.revoke_session(&auth.session_id).await {
        Ok(()) => {
            info!("User {} logged out", auth.user_id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => {
            error!("Failed to revoke session for user {}: {}", auth.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}
