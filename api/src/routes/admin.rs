use actix_web::HttpResponse;

use crate::dto::auth::MessageResponse;

/// Handler for GET /api/v1/admin
///
/// Reachable only through the Access Guard and the admin Role Guard.
pub async fn admin() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "admin only".to_string(),
    })
}
