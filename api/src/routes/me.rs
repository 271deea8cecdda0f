use actix_web::HttpResponse;

use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/me
///
/// Echoes the identity the Access Guard attached to the request.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(auth)
}
